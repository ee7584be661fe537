//! CLI command implementations.

pub mod call;
pub mod catalog;

pub use call::CallCommand;
