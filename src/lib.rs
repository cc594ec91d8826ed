//! Page-context loader for the MoonBase web interface.
//!
//! Fetches `/rest/features` and `/rest/instances` through an injected
//! [`Fetch`] capability and combines them with the app's fixed metadata.

pub mod context;
pub mod errors;
pub mod fetch;
pub mod loader;

pub use context::PageContext;
pub use errors::{BoxError, ConfigError, LoadError, Result};
pub use fetch::http::{HttpFetch, HttpFetchConfig};
pub use fetch::{from_fn, Fetch, FetchResponse, FnFetch};
pub use loader::{fetch_json, load, load_with, LoadOrder, PageContextLoader};
