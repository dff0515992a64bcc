use nextgo_types::{ApiEnvelope, NewUser, UpdateUser, User};
use uuid::Uuid;

use crate::client::{ApiError, HttpClient};

/// Client for the user endpoints under `/api/users`.
///
/// Every response arrives wrapped in the API envelope; this client unwraps
/// it, so a 2xx response that reports `success: false` surfaces as
/// [`ApiError::Envelope`].
#[derive(Debug, Clone)]
pub struct UsersClient {
    http: HttpClient,
}

impl UsersClient {
    /// Create a new users client for the given base URL.
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        Ok(Self {
            http: HttpClient::new(base_url)?,
        })
    }

    /// Build on an existing transport, e.g. one shared with other accessors.
    pub fn with_http(http: HttpClient) -> Self {
        Self { http }
    }

    /// GET `/api/users`
    pub async fn list(&self) -> Result<Vec<User>, ApiError> {
        let env: ApiEnvelope<Vec<User>> = self.http.get("/api/users").await?;
        Ok(env.into_data()?)
    }

    /// GET `/api/users/{id}`
    pub async fn get(&self, id: Uuid) -> Result<User, ApiError> {
        let env: ApiEnvelope<User> = self.http.get(&format!("/api/users/{id}")).await?;
        Ok(env.into_data()?)
    }

    /// GET `/api/users/by-email/{email}`
    pub async fn get_by_email(&self, email: &str) -> Result<User, ApiError> {
        // The email rides in a path segment and must stay one, even when
        // the local part contains URL metacharacters.
        let env: ApiEnvelope<User> = self
            .http
            .get_with_segment("/api/users/by-email", email)
            .await?;
        Ok(env.into_data()?)
    }

    /// POST `/api/users`
    pub async fn create(&self, user: &NewUser) -> Result<User, ApiError> {
        let env: ApiEnvelope<User> = self.http.post("/api/users", user).await?;
        Ok(env.into_data()?)
    }

    /// PUT `/api/users/{id}`
    pub async fn update(&self, id: Uuid, changes: &UpdateUser) -> Result<User, ApiError> {
        let env: ApiEnvelope<User> = self
            .http
            .put(&format!("/api/users/{id}"), changes)
            .await?;
        Ok(env.into_data()?)
    }

    /// DELETE `/api/users/{id}`
    pub async fn delete(&self, id: Uuid) -> Result<(), ApiError> {
        self.http.delete(&format!("/api/users/{id}")).await
    }
}
