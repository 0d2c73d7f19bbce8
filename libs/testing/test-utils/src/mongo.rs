//! MongoDB test infrastructure
//!
//! Provides a `TestMongo` helper that runs a disposable MongoDB container.

use mongodb::{Client, Database};
use testcontainers::runners::AsyncRunner;
use testcontainers::{ContainerAsync, ImageExt};
use testcontainers_modules::mongo::Mongo;

const MONGO_TAG: &str = "7.0";

/// Test MongoDB wrapper that ensures proper cleanup
///
/// The container is stopped and removed when this struct is dropped.
///
/// # Example
///
/// ```no_run
/// use test_utils::{TestDataBuilder, TestMongo};
///
/// # async fn example() {
/// let mongo = TestMongo::new().await;
/// let db = mongo.database(&TestDataBuilder::from_test_name("my_test").database_name());
/// let items = db.collection::<mongodb::bson::Document>("items");
/// # }
/// ```
pub struct TestMongo {
    #[allow(dead_code)]
    container: ContainerAsync<Mongo>,
    client: Client,
    pub connection_string: String,
}

impl TestMongo {
    /// Start a MongoDB 7.0 container and connect to it
    pub async fn new() -> Self {
        let container = Mongo::default()
            .with_tag(MONGO_TAG)
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

        tracing::info!(port = host_port, "Test MongoDB ready (mongo {})", MONGO_TAG);

        Self {
            container,
            client,
            connection_string,
        }
    }

    /// Handle to the database `name`; it is created on first write
    pub fn database(&self, name: &str) -> Database {
        self.client.database(name)
    }

    /// Connection string for building clients through other code paths
    pub fn connection_string(&self) -> &str {
        &self.connection_string
    }
}

impl Drop for TestMongo {
    fn drop(&mut self) {
        tracing::debug!("Cleaning up test MongoDB container");
    }
}
