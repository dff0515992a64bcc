use nextgo_types::EnvelopeError;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("Invalid base URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("API returned {status}: {body}")]
    ApiResponse { status: u16, body: String },
    #[error("Base URL cannot carry path segments")]
    CannotBeABase,
    #[error(transparent)]
    Envelope(#[from] EnvelopeError),
}

/// Shared HTTP client for all next-go-template API interactions.
///
/// Wraps [`reqwest::Client`] with a base URL. The per-surface accessors
/// ([`crate::HealthClient`], [`crate::UsersClient`]) build on top of this;
/// timeouts, pooling, and TLS configuration all live in the underlying
/// reqwest client, not here.
#[derive(Clone)]
pub struct HttpClient {
    inner: reqwest::Client,
    base_url: Url,
}

impl HttpClient {
    /// Create a new client for the given base URL. The template API is
    /// unauthenticated, so no credentials are taken.
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let base_url = Url::parse(base_url)?;
        let inner = reqwest::Client::builder().build()?;
        Ok(Self { inner, base_url })
    }

    /// GET `{base_url}{path}` and deserialize the JSON response.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = self.base_url.join(path)?;
        debug!(%url, "GET");
        let resp = self.inner.get(url).send().await?;
        Self::handle_response(resp).await
    }

    /// GET `{base_url}{path}/{segment}`, percent-encoding the segment.
    ///
    /// For path parameters that may contain characters with URL meaning,
    /// such as email addresses (`?` and `#` are valid in a local part).
    pub async fn get_with_segment<T: DeserializeOwned>(
        &self,
        path: &str,
        segment: &str,
    ) -> Result<T, ApiError> {
        let mut url = self.base_url.join(path)?;
        url.path_segments_mut()
            .map_err(|()| ApiError::CannotBeABase)?
            .push(segment);
        debug!(%url, "GET");
        let resp = self.inner.get(url).send().await?;
        Self::handle_response(resp).await
    }

    /// POST `{base_url}{path}` with a JSON body and deserialize the response.
    pub async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let url = self.base_url.join(path)?;
        debug!(%url, "POST");
        let resp = self.inner.post(url).json(body).send().await?;
        Self::handle_response(resp).await
    }

    /// PUT `{base_url}{path}` with a JSON body and deserialize the response.
    pub async fn put<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let url = self.base_url.join(path)?;
        debug!(%url, "PUT");
        let resp = self.inner.put(url).json(body).send().await?;
        Self::handle_response(resp).await
    }

    /// DELETE `{base_url}{path}`, discarding any response body.
    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let url = self.base_url.join(path)?;
        debug!(%url, "DELETE");
        let resp = self.inner.delete(url).send().await?;
        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            return Err(ApiError::ApiResponse { status, body });
        }
        Ok(())
    }

    /// Return the base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    async fn handle_response<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, ApiError> {
        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            return Err(ApiError::ApiResponse { status, body });
        }
        Ok(resp.json().await?)
    }
}

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient")
            .field("base_url", &self.base_url.as_str())
            .finish()
    }
}
