use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Kind of the managed asset.
#[derive(Debug, Copy, Clone, Deserialize, Serialize, PartialEq, Eq, Hash, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum AssetType {
    Server,
    Workstation,
    Laptop,
    Switch,
    Router,
    Firewall,
    Printer,
    Other,
}
