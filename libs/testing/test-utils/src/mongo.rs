//! MongoDB test infrastructure
//!
//! Provides a `TestMongo` helper that starts a MongoDB container for testing.

use mongodb::{Client, Database};
use testcontainers::runners::AsyncRunner;
use testcontainers::{ContainerAsync, ImageExt};
use testcontainers_modules::mongo::Mongo;
use uuid::Uuid;

/// Test MongoDB wrapper that ensures proper cleanup
///
/// The container is automatically stopped and removed when this struct is dropped.
/// Every instance gets its own database name, so collections never leak
/// between tests.
///
/// # Example
///
/// ```no_run
/// use test_utils::TestMongo;
///
/// # async fn example() {
/// let mongo = TestMongo::new().await;
/// let db = mongo.database();
/// let names = db.list_collection_names().await.unwrap();
/// assert!(names.is_empty());
/// # }
/// ```
pub struct TestMongo {
    #[allow(dead_code)]
    container: ContainerAsync<Mongo>,
    client: Client,
    database: Database,
    pub connection_string: String,
}

impl TestMongo {
    /// Create a new test MongoDB instance
    ///
    /// Uses the MongoDB 7 image.
    pub async fn new() -> Self {
        let container = Mongo::default()
            .with_tag("7")
            .start()
            .await
            .expect("Failed to start MongoDB container");

        let host_port = container
            .get_host_port_ipv4(27017)
            .await
            .expect("Failed to get MongoDB port");

        let connection_string = format!("mongodb://127.0.0.1:{}", host_port);

        let client = Client::with_uri_str(&connection_string)
            .await
            .expect("Failed to create MongoDB client");

        let db_name = format!("test_{}", Uuid::new_v4().simple());
        let database = client.database(&db_name);

        tracing::info!(port = host_port, database = %db_name, "Test MongoDB ready (mongo:7)");

        Self {
            container,
            client,
            database,
            connection_string,
        }
    }

    /// Handle to this test's database
    pub fn database(&self) -> Database {
        self.database.clone()
    }

    /// Underlying client, e.g. for health checks
    pub fn client(&self) -> Client {
        self.client.clone()
    }

    /// Get the connection string for manual client creation
    pub fn connection_string(&self) -> &str {
        &self.connection_string
    }
}

// Container is automatically cleaned up when TestMongo is dropped
impl Drop for TestMongo {
    fn drop(&mut self) {
        tracing::debug!("Cleaning up test MongoDB container");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::{Document, doc};

    #[tokio::test]
    async fn test_mongo_insert_and_find() {
        let mongo = TestMongo::new().await;
        let collection = mongo.database().collection::<Document>("things");

        collection
            .insert_one(doc! { "name": "widget", "qty": 3 })
            .await
            .unwrap();

        let found = collection
            .find_one(doc! { "name": "widget" })
            .await
            .unwrap()
            .unwrap();
        assert_eq!(found.get_i32("qty").unwrap(), 3);
    }

    #[tokio::test]
    async fn test_mongo_ping() {
        let mongo = TestMongo::new().await;
        let reply = mongo
            .client()
            .database("admin")
            .run_command(doc! { "ping": 1 })
            .await
            .unwrap();
        assert!(reply.contains_key("ok"));
    }
}
