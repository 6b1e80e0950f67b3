use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Status value reported for a backend that answered its liveness probe
pub const STATUS_OK: &str = "OK";

/// Per-backend liveness report returned by `GET /health/`
///
/// Each field holds either [`STATUS_OK`] or a description of the failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
pub struct HealthResponse {
    pub mongo: String,
    pub redis: String,
}

impl HealthResponse {
    pub fn is_healthy(&self) -> bool {
        self.mongo == STATUS_OK && self.redis == STATUS_OK
    }
}
