use mongodb::{Client, bson::doc, options::ClientOptions};
use std::time::Duration;
use tracing::info;

use super::MongoConfig;
use crate::common::{RetryConfig, retry_if};

/// Error type for MongoDB operations
#[derive(Debug, thiserror::Error)]
pub enum MongoError {
    #[error("MongoDB error: {0}")]
    Mongo(#[from] mongodb::error::Error),

    #[error("Connection failed: {0}")]
    ConnectionFailed(String),
}

impl MongoError {
    /// Whether another connection attempt could succeed.
    ///
    /// A malformed connection string or bad credentials will not fix
    /// themselves, so those fail fast.
    pub fn is_transient(&self) -> bool {
        match self {
            MongoError::Mongo(e) => !matches!(
                *e.kind,
                mongodb::error::ErrorKind::InvalidArgument { .. }
                    | mongodb::error::ErrorKind::Authentication { .. }
            ),
            MongoError::ConnectionFailed(_) => true,
        }
    }
}

/// Connect using a MongoConfig and verify the deployment answers a ping
///
/// # Example
/// ```ignore
/// use database::mongodb::{MongoConfig, connect_from_config};
/// use core_config::FromEnv;
///
/// let config = MongoConfig::from_env()?;
/// let client = connect_from_config(&config).await?;
/// ```
pub async fn connect_from_config(config: &MongoConfig) -> Result<Client, MongoError> {
    info!("Attempting to connect to MongoDB at {}", config.redacted_url());

    let mut options = ClientOptions::parse(&config.url).await?;

    options.max_pool_size = Some(config.max_pool_size);
    options.min_pool_size = Some(config.min_pool_size);
    options.connect_timeout = Some(Duration::from_secs(config.connect_timeout_secs));
    options.server_selection_timeout =
        Some(Duration::from_secs(config.server_selection_timeout_secs));

    if let Some(ref app_name) = config.app_name {
        options.app_name = Some(app_name.clone());
    }

    let client = Client::with_options(options)?;

    client
        .database("admin")
        .run_command(doc! { "ping": 1 })
        .await
        .map_err(|e| MongoError::ConnectionFailed(e.to_string()))?;

    info!(database = %config.database, "Successfully connected to MongoDB");
    Ok(client)
}

/// Connect from config, retrying transient failures with exponential backoff
///
/// This is for startup only: it lets the API come up while MongoDB is
/// still booting.
///
/// # Example
/// ```ignore
/// use database::mongodb::{MongoConfig, connect_from_config_with_retry};
/// use database::common::RetryConfig;
///
/// let config = MongoConfig::from_env()?;
/// let retry_config = RetryConfig::new().with_max_retries(5);
/// let client = connect_from_config_with_retry(&config, Some(retry_config)).await?;
/// ```
pub async fn connect_from_config_with_retry(
    config: &MongoConfig,
    retry_config: Option<RetryConfig>,
) -> Result<Client, MongoError> {
    retry_if(
        || connect_from_config(config),
        retry_config.unwrap_or_default(),
        MongoError::is_transient,
    )
    .await
}

/// Close the client's connection pools, logging the outcome.
///
/// Used as the cleanup step of a graceful shutdown.
pub async fn close(client: Client) {
    client.shutdown().await;
    info!("MongoDB client shut down");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_malformed_url_is_permanent() {
        let config = MongoConfig::with_database("not-a-mongo-url", "test");
        let err = connect_from_config(&config).await.unwrap_err();
        assert!(!err.is_transient());
    }

    #[test]
    fn test_connection_failed_is_transient() {
        assert!(MongoError::ConnectionFailed("server selection timeout".into()).is_transient());
    }

    #[tokio::test]
    #[ignore] // Requires actual MongoDB
    async fn test_connect_from_config() {
        let url = std::env::var("MONGODB_URL")
            .unwrap_or_else(|_| "mongodb://localhost:27017".to_string());
        let config = MongoConfig::with_database(url, "test");
        assert!(connect_from_config(&config).await.is_ok());
    }
}
