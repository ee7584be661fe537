//! The dispatch seam: one method that turns an [`ApiRequest`] into decoded
//! JSON. Everything above it (typed endpoints, paging, the CLI) is written
//! against the trait so tests can swap the transport out.

use crate::error::Result;
use crate::models::paging::{decode_page, PagedResponse};
use crate::models::schema::{encode, PagedRequest, WireSchema};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;
use wreq::Method;

/// A single call to the remote service.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    /// Path below the base URL, starting with `/`.
    pub path: String,
    pub body: Option<Value>,
    pub query: Vec<(String, String)>,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self { method, path: path.into(), body: None, query: Vec::new() }
    }

    /// POST with a JSON body.
    pub fn post(path: impl Into<String>, body: Value) -> Self {
        Self::new(Method::POST, path).with_body(body)
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Path plus URL-encoded query string.
    pub fn path_and_query(&self) -> String {
        if self.query.is_empty() {
            return self.path.clone();
        }

        let query = self
            .query
            .iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&");

        format!("{}?{}", self.path, query)
    }
}

/// Executes requests against the SmartScout service.
#[async_trait]
pub trait Dispatch: Send + Sync {
    /// Sends `request` once and returns the decoded JSON body.
    async fn execute(&self, request: ApiRequest) -> Result<Value>;

    /// POSTs a request schema to `path` and decodes the paged envelope.
    ///
    /// Transport and HTTP failures come back as they were raised by
    /// [`execute`](Dispatch::execute); a body that does not match the
    /// envelope is a schema validation error.
    async fn execute_paged<R, T>(&self, path: &str, request: &R) -> Result<PagedResponse<T>>
    where
        R: PagedRequest + Sync,
        T: DeserializeOwned + WireSchema + Send,
    {
        let body = encode(request)?;
        let value = self.execute(ApiRequest::post(path, body)).await?;
        decode_page(value)
    }
}
