use serde::Deserialize;
use utoipa::IntoParams;

/// Parameters for a free-text assets search.
#[derive(Deserialize, Default, Debug, Clone, PartialEq, Eq, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct AssetsSearchParams {
    /// Case-insensitive text to look for in asset name, hostname, IP address or description.
    pub query: Option<String>,
}
