use crate::rebuild_tracking::domain::PageRequest;
use crate::shared::error::ApiError;
use crate::shared::Result;
use anyhow::Context;
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use uuid::Uuid;

pub const REQUEST_ID_HEADER: &str = "X-Request-ID";

/// REST client of the rebuild service
///
/// One instance implements every outbound API port; the per-resource
/// endpoint modules hold those impls. Cloning is cheap and shares the
/// connection pool.
#[derive(Debug, Clone)]
pub struct HttpConsoleClient {
    client: Client,
    base_url: String,
}

impl HttpConsoleClient {
    /// Creates a client for `server_url`.
    ///
    /// No timeout is applied unless one is given.
    pub fn new(server_url: &str, timeout: Option<Duration>) -> Result<Self> {
        let version = env!("CARGO_PKG_VERSION");
        let user_agent = format!("rebuild-console/{}", version);
        let mut builder = Client::builder().user_agent(user_agent);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self {
            client,
            base_url: server_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(super) fn url(&self, path: &str, query: &Query) -> String {
        format!("{}{}{}", self.base_url, path, query.to_query_string())
    }

    fn request(&self, method: Method, url: &str) -> RequestBuilder {
        let request_id = Uuid::new_v4();
        tracing::debug!(%method, %url, %request_id, "sending request");
        self.client
            .request(method, url)
            .header(REQUEST_ID_HEADER, request_id.to_string())
    }

    /// Sends the request and turns every non-2xx response into an [`ApiError`].
    async fn send(&self, method: Method, url: String, body: Body<'_>) -> Result<Response> {
        let mut builder = self.request(method.clone(), &url);
        builder = match body {
            Body::None => builder,
            Body::Text(text) => builder
                .header(reqwest::header::CONTENT_TYPE, "text/plain")
                .body(text.to_string()),
            Body::Json(json) => builder.json(&json),
        };

        let response = builder.send().await.with_context(|| {
            format!(
                "Failed to reach the rebuild service: {} {}\n\n💡 Hint: Check the server URL (--server or REBUILD_CONSOLE_SERVER)",
                method, url
            )
        })?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let error = ApiError {
            status: status.as_u16(),
            method: method.to_string(),
            url,
            details: error_details(&body),
        };
        tracing::debug!(status = error.status, url = %error.url, "request failed");
        Err(error.into())
    }

    pub(super) async fn get_json<T: DeserializeOwned>(&self, path: &str, query: Query) -> Result<T> {
        let url = self.url(path, &query);
        let response = self.send(Method::GET, url.clone(), Body::None).await?;
        response
            .json::<T>()
            .await
            .with_context(|| format!("Failed to decode response of GET {}", url))
    }

    pub(super) async fn get_text(&self, path: &str) -> Result<String> {
        let url = self.url(path, &Query::new());
        let response = self.send(Method::GET, url.clone(), Body::None).await?;
        response
            .text()
            .await
            .with_context(|| format!("Failed to read response of GET {}", url))
    }

    pub(super) async fn send_text(&self, method: Method, path: &str, body: &str) -> Result<()> {
        let url = self.url(path, &Query::new());
        self.send(method, url, Body::Text(body)).await?;
        Ok(())
    }

    pub(super) async fn post_empty(&self, path: &str) -> Result<()> {
        let url = self.url(path, &Query::new());
        self.send(Method::POST, url, Body::None).await?;
        Ok(())
    }

    pub(super) async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let url = self.url(path, &Query::new());
        let json = serde_json::to_value(body)?;
        let response = self.send(Method::POST, url.clone(), Body::Json(json)).await?;
        response
            .json::<T>()
            .await
            .with_context(|| format!("Failed to decode response of POST {}", url))
    }
}

enum Body<'a> {
    None,
    Text(&'a str),
    Json(serde_json::Value),
}

#[derive(Deserialize)]
struct ErrorBody {
    details: Option<String>,
}

fn error_details(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.details)
        .filter(|d| !d.trim().is_empty())
}

/// Percent-encodes one path segment.
pub(super) fn segment(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}

/// Query string builder. Absent and blank values are never sent.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Query {
    pairs: Vec<(&'static str, String)>,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(self, page: PageRequest) -> Self {
        self.param("page", page.page)
            .param("perPage", page.per_page)
    }

    pub fn param(mut self, key: &'static str, value: impl ToString) -> Self {
        self.pairs.push((key, value.to_string()));
        self
    }

    pub fn optional(self, key: &'static str, value: Option<&str>) -> Self {
        match value.filter(|v| !v.trim().is_empty()) {
            Some(value) => self.param(key, value),
            None => self,
        }
    }

    pub fn to_query_string(&self) -> String {
        if self.pairs.is_empty() {
            return String::new();
        }
        let joined = self
            .pairs
            .iter()
            .map(|(key, value)| format!("{}={}", key, urlencoding::encode(value)))
            .collect::<Vec<_>>()
            .join("&");
        format!("?{}", joined)
    }
}
