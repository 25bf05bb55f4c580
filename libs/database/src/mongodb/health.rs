use mongodb::{Database, bson::doc};

use super::MongoError;

/// Ping the database the app works against.
///
/// # Example
/// ```ignore
/// use database::mongodb::check_health;
///
/// check_health(&client.database("marketplace")).await?;
/// ```
pub async fn check_health(db: &Database) -> Result<(), MongoError> {
    db.run_command(doc! { "ping": 1 }).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::Client;

    #[tokio::test]
    #[ignore] // Requires actual MongoDB
    async fn test_check_health() {
        let client = Client::with_uri_str("mongodb://localhost:27017")
            .await
            .unwrap();
        assert!(check_health(&client.database("test")).await.is_ok());
    }

    #[tokio::test]
    async fn test_check_health_reports_unreachable() {
        // Nothing listens on port 1; a short selection timeout keeps this fast
        let client = Client::with_uri_str(
            "mongodb://127.0.0.1:1/?serverSelectionTimeoutMS=200&connectTimeoutMS=200",
        )
        .await
        .unwrap();

        let err = check_health(&client.database("test")).await.unwrap_err();
        assert!(matches!(err, MongoError::Mongo(_)));
    }
}
