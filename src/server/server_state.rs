use crate::api::Api;
use serde::Serialize;
use std::sync::Arc;
use utoipa::ToSchema;

/// Status of the API server reported to the clients.
#[derive(Clone, Copy, Debug, Serialize, ToSchema)]
pub struct Status {
    /// Version of the running server build.
    pub version: &'static str,
}

impl Status {
    pub const CURRENT: Status = Status {
        version: env!("CARGO_PKG_VERSION"),
    };
}

pub struct ServerState {
    pub api: Arc<Api>,
    pub status: Status,
}

impl ServerState {
    pub fn new(api: Arc<Api>) -> Self {
        Self {
            api,
            status: Status::CURRENT,
        }
    }
}
