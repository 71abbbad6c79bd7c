mod asset;
mod asset_create_params;
mod asset_status;
mod asset_type;
mod asset_update_params;
mod assets_list_params;
mod assets_page;
mod assets_search_params;

pub use self::{
    asset::Asset, asset_create_params::AssetCreateParams, asset_status::AssetStatus,
    asset_type::AssetType, asset_update_params::AssetUpdateParams,
    assets_list_params::AssetsListParams, assets_page::AssetsPage,
    assets_search_params::AssetsSearchParams,
};
