use async_trait::async_trait;
use serde_json::Value;
use std::future::Future;

use crate::errors::BoxError;

pub mod http;

/// Status code and raw body of a completed GET.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl FetchResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self { status, body: body.into() }
    }

    /// 200 with `value` serialized as the body.
    pub fn json(value: &Value) -> Self {
        Self::new(200, value.to_string())
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn parse_json(&self) -> serde_json::Result<Value> {
        serde_json::from_slice(&self.body)
    }
}

/// Capability to perform a GET against the device's web server.
///
/// A non-success status is still a response; only failures to complete the
/// request at all are errors here.
#[async_trait]
pub trait Fetch: Send + Sync {
    async fn get(&self, path: &str) -> Result<FetchResponse, BoxError>;
}

#[async_trait]
impl<T: Fetch + ?Sized> Fetch for std::sync::Arc<T> {
    async fn get(&self, path: &str) -> Result<FetchResponse, BoxError> {
        (**self).get(path).await
    }
}

/// Adapts a closure `path -> pending response` into a [`Fetch`].
pub struct FnFetch<F> {
    f: F,
}

pub fn from_fn<F, Fut>(f: F) -> FnFetch<F>
where
    F: Fn(String) -> Fut + Send + Sync,
    Fut: Future<Output = Result<FetchResponse, BoxError>> + Send + 'static,
{
    FnFetch { f }
}

#[async_trait]
impl<F, Fut> Fetch for FnFetch<F>
where
    F: Fn(String) -> Fut + Send + Sync,
    Fut: Future<Output = Result<FetchResponse, BoxError>> + Send + 'static,
{
    async fn get(&self, path: &str) -> Result<FetchResponse, BoxError> {
        (self.f)(path.to_string()).await
    }
}
