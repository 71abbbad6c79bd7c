use crate::monitoring::AlertSeverity;
use serde::Deserialize;
use utoipa::IntoParams;

/// Parameters for getting a list of alerts.
#[derive(Deserialize, Default, Debug, Copy, Clone, PartialEq, Eq, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct AlertsListParams {
    /// Whether to return only resolved (`true`) or unresolved (`false`) alerts.
    pub resolved: Option<bool>,
    /// Severity to filter alerts by.
    pub severity: Option<AlertSeverity>,
}
