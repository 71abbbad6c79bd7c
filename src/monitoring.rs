mod api_ext;
mod database_ext;

pub use self::api_ext::MonitoringApiExt;
