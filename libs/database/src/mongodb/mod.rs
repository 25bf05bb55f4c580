//! MongoDB database connector and utilities
//!
//! Provides connection management and MongoDB-specific helpers.

mod config;
mod connector;
mod health;
mod ids;

pub use config::MongoConfig;
pub use connector::{MongoError, close, connect_from_config, connect_from_config_with_retry};
pub use health::check_health;
pub use ids::uuid_to_bson;

// Re-export MongoDB types for convenience
pub use mongodb::{Client, Collection, Database};
