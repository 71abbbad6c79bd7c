use crate::monitoring::AlertSeverity;
use serde::Deserialize;
use utoipa::ToSchema;

/// Parameters for raising a new alert.
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AlertCreateParams {
    #[schema(min_length = 1)]
    pub title: Option<String>,
    pub description: Option<String>,
    pub severity: Option<AlertSeverity>,
    pub server_id: Option<u64>,
}
