//! smartscout - Typed async client and CLI for the SmartScout analytics API
//!
//! Request and response schemas carry an explicit internal ↔ wire name
//! table; the client sends each call exactly once and reports every
//! failure through [`Error`].

pub mod client;
pub mod commands;
pub mod config;
pub mod error;
pub mod format;
pub mod models;

pub use client::{ApiRequest, Dispatch, Endpoint, SmartScoutApi, SmartScoutClient};
pub use config::{ApiKey, Config, OutputFormat};
pub use error::{Error, Result};
pub use models::{Marketplace, PagedResponse, Paging};
