use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Lifecycle status of the managed asset.
#[derive(Debug, Copy, Clone, Default, Deserialize, Serialize, PartialEq, Eq, Hash, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum AssetStatus {
    #[default]
    Active,
    Inactive,
    Maintenance,
    Retired,
}
