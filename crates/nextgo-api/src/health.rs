use nextgo_types::{DatabaseHealthResponse, HealthResponse};

use crate::client::{ApiError, HttpClient};

/// Liveness endpoint path, fixed by the API contract.
const HEALTH_PATH: &str = "/api/health";
const DATABASE_HEALTH_PATH: &str = "/api/database-health";

/// Uniform boolean readiness view over a client's health endpoint.
///
/// Callers that only need up/down (dashboards, pollers) use this instead
/// of inspecting the full response.
pub trait HealthCheck: Send + Sync {
    /// Returns `Ok(true)` if the service is healthy, `Ok(false)` if it
    /// responded but reported an unhealthy state, or `Err` on connection failure.
    fn is_healthy(&self) -> impl std::future::Future<Output = Result<bool, ApiError>> + Send;
}

/// Accessor for the API's health endpoints.
///
/// `check` is a pure pass-through: it returns whatever the transport
/// decoded and propagates transport failures unchanged. Retries, timeouts,
/// and scheduling belong to the caller and the underlying transport.
#[derive(Debug, Clone)]
pub struct HealthClient {
    http: HttpClient,
}

impl HealthClient {
    /// Create a new health client for the given base URL.
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        Ok(Self {
            http: HttpClient::new(base_url)?,
        })
    }

    /// Build on an existing transport, e.g. one shared with other accessors.
    pub fn with_http(http: HttpClient) -> Self {
        Self { http }
    }

    /// GET `/api/health`
    pub async fn check(&self) -> Result<HealthResponse, ApiError> {
        self.http.get(HEALTH_PATH).await
    }

    /// GET `/api/database-health`
    pub async fn check_database(&self) -> Result<DatabaseHealthResponse, ApiError> {
        self.http.get(DATABASE_HEALTH_PATH).await
    }
}

impl HealthCheck for HealthClient {
    async fn is_healthy(&self) -> Result<bool, ApiError> {
        let resp = self.check().await?;
        Ok(resp.success)
    }
}
