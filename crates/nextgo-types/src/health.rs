use serde::{Deserialize, Serialize};

use crate::envelope::ApiEnvelope;

/// Payload of `GET /api/health`. The server reports `"OK"` when up.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
}

/// Payload of `GET /api/database-health`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatabaseHealth {
    pub message: String,
}

/// Full wire shape of the health endpoint.
pub type HealthResponse = ApiEnvelope<HealthStatus>;

/// Full wire shape of the database-health endpoint.
pub type DatabaseHealthResponse = ApiEnvelope<DatabaseHealth>;
