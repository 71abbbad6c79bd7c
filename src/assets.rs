mod api_ext;
mod database_ext;

pub use self::api_ext::{AssetsApiExt, ASSET_NOT_FOUND_MESSAGE};
