//! SmartScout API client: transport, dispatch seam and endpoint catalog.

pub mod curl;
pub mod dispatch;
pub mod endpoints;
pub mod http;

pub use dispatch::{ApiRequest, Dispatch};
pub use endpoints::{Endpoint, SmartScoutApi};
pub use http::{SmartScoutClient, DEFAULT_BASE_URL};
