use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DatabaseHealthStatus {
    pub status: String,
    pub response_time_ms: u64,
    pub error: Option<String>,
}

impl DatabaseHealthStatus {
    pub fn is_healthy(&self) -> bool {
        self.status == "healthy"
    }
}
