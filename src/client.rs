use std::time::Duration;

use anyhow::Context;
use reqwest::{header::HeaderMap, Method, StatusCode};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::consts::ENTITY_SET;

/// OData system query options understood by the collection endpoint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ODataQuery {
    pub top: Option<usize>,
    pub skip: Option<usize>,
}

impl ODataQuery {
    pub fn top(n: usize) -> Self {
        Self { top: Some(n), ..Self::default() }
    }

    pub fn skip(n: usize) -> Self {
        Self { skip: Some(n), ..Self::default() }
    }

    /// Renders the options as a query string, `$` left unescaped.
    fn to_query_string(self) -> String {
        let mut pairs = Vec::with_capacity(2);
        if let Some(top) = self.top {
            pairs.push(format!("$top={top}"));
        }
        if let Some(skip) = self.skip {
            pairs.push(format!("$skip={skip}"));
        }
        if pairs.is_empty() {
            String::new()
        } else {
            crate::concat_str!("?", pairs.join("&"))
        }
    }
}

/// Status, headers and raw body of one exchange with the service.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl ApiResponse {
    /// Header value as text, `None` when absent or not visible ASCII.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    pub fn json<T: DeserializeOwned>(&self) -> anyhow::Result<T> {
        serde_json::from_slice(&self.body).with_context(|| {
            format!(
                "response body ({} bytes, status {}) is not the expected JSON",
                self.body.len(),
                self.status
            )
        })
    }
}

/// Thin wrapper over `reqwest::Client` bound to one OData service root.
#[derive(Debug, Clone)]
pub struct VacancyClient {
    http: reqwest::Client,
    base_url: String,
}

impl VacancyClient {
    pub fn new(base_url: impl Into<String>, timeout: Option<Duration>) -> anyhow::Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().context("building http client")?;

        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self { http, base_url })
    }

    /// Service root, without trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn collection_url(&self, query: ODataQuery) -> String {
        crate::concat_str!(self.base_url, "/", ENTITY_SET, query.to_query_string())
    }

    pub fn entity_url(&self, unique_id: &str) -> String {
        crate::concat_str!(self.base_url, "/", ENTITY_SET, "('", unique_id, "')")
    }

    pub async fn list(&self, query: ODataQuery) -> anyhow::Result<ApiResponse> {
        self.send(Method::GET, self.collection_url(query)).await
    }

    pub async fn get(&self, unique_id: &str) -> anyhow::Result<ApiResponse> {
        self.send(Method::GET, self.entity_url(unique_id)).await
    }

    pub async fn delete(&self, unique_id: &str) -> anyhow::Result<ApiResponse> {
        self.send(Method::DELETE, self.entity_url(unique_id)).await
    }

    async fn send(&self, method: Method, url: String) -> anyhow::Result<ApiResponse> {
        debug!("{method} {url}");
        let resp = self
            .http
            .request(method.clone(), &url)
            .send()
            .await
            .with_context(|| format!("{method} {url} failed"))?;

        let status = resp.status();
        let headers = resp.headers().clone();
        let body = resp
            .bytes()
            .await
            .with_context(|| format!("reading body of {method} {url}"))?
            .to_vec();
        debug!(%status, len = body.len(), "{method} {url}");

        Ok(ApiResponse { status, headers, body })
    }
}
