use crate::config::CatalogConfig;
use crate::error::CatalogError;
use crate::sources::{RecipeSource, SourceError};
use async_trait::async_trait;
use log::debug;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, RequestBuilder};
use std::time::Duration;

/// [`RecipeSource`] backed by a reqwest client
pub struct HttpSource {
    client: Client,
    base_url: String,
}

impl HttpSource {
    pub fn new(
        base_url: impl Into<String>,
        timeout: Option<Duration>,
        user_agent: Option<&str>,
    ) -> Result<Self, CatalogError> {
        let defaults = CatalogConfig::default();
        let timeout = timeout.unwrap_or_else(|| defaults.request_timeout());
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent.unwrap_or(&defaults.user_agent))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config(config: &CatalogConfig) -> Result<Self, CatalogError> {
        Self::new(
            config.base_url.clone(),
            Some(config.request_timeout()),
            Some(config.user_agent.as_str()),
        )
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn execute(&self, request: RequestBuilder) -> Result<String, SourceError> {
        let response = request.send().await.map_err(transport_error)?;
        let status = response.status();
        debug!("{} {}", status.as_u16(), response.url());

        if !status.is_success() {
            return Err(SourceError::status(
                status.as_u16(),
                status.canonical_reason().unwrap_or("request failed"),
            ));
        }

        response.text().await.map_err(transport_error)
    }
}

fn transport_error(err: reqwest::Error) -> SourceError {
    SourceError {
        status: err.status().map(|s| s.as_u16()),
        message: err.to_string(),
    }
}

#[async_trait]
impl RecipeSource for HttpSource {
    fn source_name(&self) -> &str {
        "http"
    }

    async fn get(&self, path: &str) -> Result<String, SourceError> {
        self.execute(self.client.get(self.url(path))).await
    }

    async fn post(&self, path: &str, body: String) -> Result<String, SourceError> {
        self.execute(
            self.client
                .post(self.url(path))
                .header(CONTENT_TYPE, "application/json")
                .body(body),
        )
        .await
    }

    async fn put(&self, path: &str, body: String) -> Result<String, SourceError> {
        self.execute(
            self.client
                .put(self.url(path))
                .header(CONTENT_TYPE, "application/json")
                .body(body),
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Server;

    #[tokio::test]
    async fn test_get_returns_body() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/recipes")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body("[]")
            .create_async()
            .await;

        let source = HttpSource::new(server.url(), None, None).unwrap();
        let body = source.get("/recipes").await.unwrap();
        assert_eq!(body, "[]");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_error_status_is_reported() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/recipes/9")
            .with_status(404)
            .create_async()
            .await;

        let source = HttpSource::new(server.url(), None, None).unwrap();
        let err = source.get("/recipes/9").await.unwrap_err();
        assert_eq!(err.status, Some(404));
        assert_eq!(err.message, "Not Found");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_unreachable_host_has_no_status() {
        // Port 9 (discard) is closed on test machines
        let source =
            HttpSource::new("http://127.0.0.1:9", Some(Duration::from_secs(2)), None).unwrap();
        let err = source.get("/recipes").await.unwrap_err();
        assert_eq!(err.status, None);
    }

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let source = HttpSource::new("http://localhost:3000/", None, None).unwrap();
        assert_eq!(source.base_url(), "http://localhost:3000");
        assert_eq!(source.url("/recipes"), "http://localhost:3000/recipes");
    }

    #[test]
    fn test_source_name() {
        let source = HttpSource::from_config(&CatalogConfig::default()).unwrap();
        assert_eq!(source.source_name(), "http");
    }
}
