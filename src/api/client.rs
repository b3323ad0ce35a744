// Portfolio backend HTTP client.
// Handles the shared-secret admin header and request/response processing.

use reqwest::{
    Client, Response, StatusCode,
    header::{HeaderMap, HeaderValue, USER_AGENT},
};

use crate::error::{EaselError, Result};

/// Header carrying the shared admin secret on privileged calls.
pub const ADMIN_KEY_HEADER: &str = "X-Admin-Key";

/// Portfolio API client.
///
/// The admin key is not stored here: privileged calls take it explicitly so
/// the session owner controls its lifetime.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a new client for the given base URL (no trailing slash).
    pub fn new(base_url: &str) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static("easel-tui"));

        let client = Client::builder()
            .default_headers(headers)
            .build()
            .map_err(EaselError::Api)?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Make an unauthenticated GET request.
    pub async fn get(&self, endpoint: &str) -> Result<Response> {
        let url = format!("{}{}", self.base_url, endpoint);
        let response = self.client.get(&url).send().await.map_err(EaselError::Api)?;
        self.check_response(response).await
    }

    /// Make a GET request with the admin key header.
    pub async fn get_admin(&self, endpoint: &str, admin_key: &str) -> Result<Response> {
        let url = format!("{}{}", self.base_url, endpoint);
        let response = self
            .client
            .get(&url)
            .header(ADMIN_KEY_HEADER, admin_key)
            .send()
            .await
            .map_err(EaselError::Api)?;
        self.check_response(response).await
    }

    /// Make a DELETE request with the admin key header.
    pub async fn delete_admin(&self, endpoint: &str, admin_key: &str) -> Result<Response> {
        let url = format!("{}{}", self.base_url, endpoint);
        let response = self
            .client
            .delete(&url)
            .header(ADMIN_KEY_HEADER, admin_key)
            .send()
            .await
            .map_err(EaselError::Api)?;
        self.check_response(response).await
    }

    /// POST a multipart form with the admin key header.
    pub async fn post_multipart(
        &self,
        endpoint: &str,
        form: reqwest::multipart::Form,
        admin_key: &str,
    ) -> Result<Response> {
        let url = format!("{}{}", self.base_url, endpoint);
        let response = self
            .client
            .post(&url)
            .header(ADMIN_KEY_HEADER, admin_key)
            .multipart(form)
            .send()
            .await
            .map_err(EaselError::Api)?;
        self.check_response(response).await
    }

    /// Check response status and convert errors.
    /// The backend's error bodies are not parsed; only success/failure matters,
    /// with 401/403 kept distinct for login messaging.
    async fn check_response(&self, response: Response) -> Result<Response> {
        match response.status() {
            status if status.is_success() => Ok(response),
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(EaselError::Unauthorized),
            StatusCode::NOT_FOUND => {
                let url = response.url().to_string();
                Err(EaselError::NotFound(url))
            }
            status => Err(EaselError::Other(format!(
                "HTTP {}: {}",
                status,
                response.text().await.unwrap_or_default()
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let client = ApiClient::new("http://localhost:8000/").unwrap();
        assert_eq!(client.base_url(), "http://localhost:8000");
    }
}
