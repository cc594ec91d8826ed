use serde_json::Value;
use tracing::debug;

use crate::context::PageContext;
use crate::errors::{LoadError, Result};
use crate::fetch::Fetch;

pub const FEATURES_PATH: &str = "/rest/features";
pub const INSTANCES_PATH: &str = "/rest/instances";

/// How the two endpoint requests are scheduled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LoadOrder {
    /// `/rest/instances` is requested only after the features body parsed.
    #[default]
    Sequential,
    /// Both requests in flight at once. The first error wins and the other
    /// request is dropped.
    Concurrent,
}

/// Builds a [`PageContext`] from an injected fetch capability.
///
/// Holds no state between loads: every call issues fresh requests.
#[derive(Debug, Clone)]
pub struct PageContextLoader<F> {
    fetch: F,
    order: LoadOrder,
}

impl<F: Fetch> PageContextLoader<F> {
    pub fn new(fetch: F) -> Self {
        Self { fetch, order: LoadOrder::default() }
    }

    pub fn with_order(mut self, order: LoadOrder) -> Self {
        self.order = order;
        self
    }

    pub fn order(&self) -> LoadOrder {
        self.order
    }

    pub fn fetch(&self) -> &F {
        &self.fetch
    }

    pub async fn load(&self) -> Result<PageContext> {
        load_with(&self.fetch, self.order).await
    }
}

/// Sequential load, the way the layout does it.
pub async fn load<F: Fetch + ?Sized>(fetch: &F) -> Result<PageContext> {
    load_with(fetch, LoadOrder::Sequential).await
}

pub async fn load_with<F: Fetch + ?Sized>(fetch: &F, order: LoadOrder) -> Result<PageContext> {
    let (features, instances) = match order {
        LoadOrder::Sequential => {
            let features = fetch_json(fetch, FEATURES_PATH).await?;
            let instances = fetch_json(fetch, INSTANCES_PATH).await?;
            (features, instances)
        }
        LoadOrder::Concurrent => tokio::try_join!(
            fetch_json(fetch, FEATURES_PATH),
            fetch_json(fetch, INSTANCES_PATH)
        )?,
    };
    debug!(?order, "page context composed");
    Ok(PageContext::compose(features, instances))
}

/// GET `path` and decode the body as an opaque JSON value.
pub async fn fetch_json<F: Fetch + ?Sized>(fetch: &F, path: &str) -> Result<Value> {
    let response = fetch.get(path).await.map_err(|source| LoadError::Transport {
        path: path.to_string(),
        source,
    })?;
    if !response.is_success() {
        return Err(LoadError::Status {
            path: path.to_string(),
            status: response.status,
        });
    }
    response.parse_json().map_err(|source| LoadError::Decode {
        path: path.to_string(),
        source,
    })
}
