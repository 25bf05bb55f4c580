//! Common utilities shared by database connectors

pub mod retry;

pub use retry::{RetryConfig, retry_if};
