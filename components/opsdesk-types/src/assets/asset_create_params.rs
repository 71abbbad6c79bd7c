use crate::assets::{AssetStatus, AssetType};
use serde::Deserialize;
use utoipa::ToSchema;

/// Parameters for creating an asset.
#[derive(Deserialize, Debug, Default, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AssetCreateParams {
    #[schema(min_length = 1, max_length = 255)]
    pub name: Option<String>,
    #[schema(min_length = 1, max_length = 255)]
    pub hostname: Option<String>,
    #[serde(rename = "type")]
    pub asset_type: Option<AssetType>,
    pub status: Option<AssetStatus>,
    pub ip_address: Option<String>,
    pub description: Option<String>,
    #[schema(max_length = 255)]
    pub location: Option<String>,
    pub owner_id: Option<u64>,
    #[schema(value_type = Option<Object>)]
    pub specifications: Option<serde_json::Value>,
}
