// file: src/database/client.rs
// description: MongoDB record source wrapper with connection management
// reference: https://docs.rs/mongodb

use crate::config::DatabaseConfig;
use crate::error::Result;
use crate::models::DocumentRecord;
use futures::TryStreamExt;
use mongodb::bson::{doc, Bson, Document};
use mongodb::options::{ClientOptions, Credential, ServerAddress};
use mongodb::{Client, Collection};
use tracing::{debug, info};

#[derive(Clone)]
pub struct RecordSource {
    client: Client,
    config: DatabaseConfig,
}

impl RecordSource {
    pub fn new(config: DatabaseConfig) -> Result<Self> {
        info!("Connecting to record source at {}:{}", config.host, config.port);

        let mut options = ClientOptions::default();
        options.hosts = vec![ServerAddress::Tcp {
            host: config.host.clone(),
            port: Some(config.port),
        }];
        options.app_name = Some("doc_dedup".to_string());

        if config.username.is_some() {
            let mut credential = Credential::default();
            credential.username = config.username.clone();
            credential.password = config.password.clone();
            options.credential = Some(credential);
        }

        let client = Client::with_options(options)?;
        Ok(Self { client, config })
    }

    fn collection(&self) -> Collection<Document> {
        self.client
            .database(&self.config.database)
            .collection(&self.config.collection)
    }

    pub async fn ping(&self) -> Result<bool> {
        debug!("Pinging record source");

        self.client
            .database(&self.config.database)
            .run_command(doc! { "ping": 1 })
            .await?;

        info!("Record source connection successful");
        Ok(true)
    }

    pub async fn count_documents(&self) -> Result<u64> {
        let count = self.collection().count_documents(doc! {}).await?;
        Ok(count)
    }

    /// Reads every record in the configured collection, no filter pushed to
    /// the source, in the order the cursor yields them.
    pub async fn fetch_all(&self) -> Result<Vec<DocumentRecord>> {
        info!(
            "Fetching all records from {}.{}",
            self.config.database, self.config.collection
        );

        let mut cursor = self.collection().find(doc! {}).await?;
        let mut records = Vec::new();

        while let Some(document) = cursor.try_next().await? {
            records.push(Self::record_from_document(document));
        }

        info!("Fetched {} records", records.len());
        Ok(records)
    }

    /// A missing or non-string field maps to the empty string; the scanner
    /// treats an empty file path as not found.
    fn record_from_document(document: Document) -> DocumentRecord {
        let id = match document.get("_id") {
            Some(Bson::ObjectId(oid)) => oid.to_hex(),
            Some(Bson::String(s)) => s.clone(),
            Some(other) => other.to_string(),
            None => String::new(),
        };

        DocumentRecord::new(
            id,
            document.get_str("company").unwrap_or_default(),
            document.get_str("title").unwrap_or_default(),
            document.get_str("url").unwrap_or_default(),
            document.get_str("file_path").unwrap_or_default(),
        )
    }
}
