use crate::assets::{AssetStatus, AssetType};
use serde::Deserialize;
use utoipa::ToSchema;

/// Parameters for updating an asset. Fields that aren't provided are left unchanged.
#[derive(Deserialize, Debug, Default, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
pub struct AssetUpdateParams {
    pub name: Option<String>,
    pub hostname: Option<String>,
    #[serde(rename = "type")]
    pub asset_type: Option<AssetType>,
    pub status: Option<AssetStatus>,
    pub ip_address: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub owner_id: Option<u64>,
    #[schema(value_type = Option<Object>)]
    pub specifications: Option<serde_json::Value>,
}
