use crate::assets::AssetType;
use serde::Deserialize;
use utoipa::IntoParams;

/// Parameters for getting a page of assets.
#[derive(Deserialize, Default, Debug, Copy, Clone, PartialEq, Eq, IntoParams)]
#[into_params(parameter_in = Query)]
#[serde(rename_all = "camelCase")]
pub struct AssetsListParams {
    /// 1-based page number, defaults to the first page.
    pub page: Option<usize>,
    /// Maximum number of assets per page.
    pub limit: Option<usize>,
    /// Asset type to filter assets by.
    #[serde(rename = "type")]
    pub asset_type: Option<AssetType>,
}
