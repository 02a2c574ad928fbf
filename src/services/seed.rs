use crate::error::{IngestionError, ServiceError};
use crate::models::{SeedRecord, Transaction};
use crate::repositories::TransactionStore;
use crate::utils::helpers::{is_remote_source, load_seed_file};
use log::{info, warn};
use std::sync::Arc;

/// Loads the seed feed into the transaction store.
pub struct SeedService {
    store: Arc<dyn TransactionStore>,
    client: reqwest::Client,
    source: String,
    replace: bool,
}

impl SeedService {
    pub fn new(store: Arc<dyn TransactionStore>, source: impl Into<String>, replace: bool) -> Self {
        Self {
            store,
            client: reqwest::Client::new(),
            source: source.into(),
            replace,
        }
    }

    /// Fetches the seed records and bulk-inserts them, returning the number
    /// of records written.
    ///
    /// Without `replace` this appends, so calling it twice duplicates every
    /// record.
    pub async fn initialize_database(&self) -> Result<u64, ServiceError> {
        Ok(self.ingest().await?)
    }

    async fn ingest(&self) -> Result<u64, IngestionError> {
        let records = self.load_records().await?;
        info!("Loaded {} seed records from {}", records.len(), self.source);

        let transactions: Vec<Transaction> = records.into_iter().map(Transaction::from).collect();
        let inserted = if self.replace {
            let written = self.store.replace_all(&transactions).await?;
            info!("Replaced stored transactions with {} seed records", written);
            written
        } else {
            let written = self.store.insert_many(&transactions).await?;
            info!("Inserted {} transactions", written);
            written
        };
        Ok(inserted)
    }

    async fn load_records(&self) -> Result<Vec<SeedRecord>, IngestionError> {
        if !is_remote_source(&self.source) {
            return load_seed_file(&self.source);
        }

        info!("Fetching seed data from URL: {}", self.source);
        let response = self.client.get(&self.source).send().await?;
        if !response.status().is_success() {
            warn!(
                "Seed source {} responded with {}",
                self.source,
                response.status()
            );
            return Err(IngestionError::Status(response.status()));
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StoreError;
    use crate::models::{PieChartEntry, SaleMonth, TransactionFilter};
    use crate::repositories::InMemoryTransactionStore;
    use async_trait::async_trait;
    use axum::{http::header::CONTENT_TYPE, routing::get, Router};
    use std::net::SocketAddr;

    /// Reads from an in-memory store but refuses every write.
    struct ReadOnlyStore {
        inner: InMemoryTransactionStore,
    }

    #[async_trait]
    impl TransactionStore for ReadOnlyStore {
        async fn insert_many(&self, _: &[Transaction]) -> Result<u64, StoreError> {
            Err(StoreError::Other("insert refused".to_string()))
        }

        async fn replace_all(&self, _: &[Transaction]) -> Result<u64, StoreError> {
            Err(StoreError::Other("insert refused".to_string()))
        }

        async fn find(
            &self,
            filter: &TransactionFilter,
            skip: u64,
            limit: u64,
        ) -> Result<Vec<Transaction>, StoreError> {
            self.inner.find(filter, skip, limit).await
        }

        async fn count(&self, filter: &TransactionFilter) -> Result<u64, StoreError> {
            self.inner.count(filter).await
        }

        async fn sum_price(&self, filter: &TransactionFilter) -> Result<f64, StoreError> {
            self.inner.sum_price(filter).await
        }

        async fn count_by_category(
            &self,
            filter: &TransactionFilter,
        ) -> Result<Vec<PieChartEntry>, StoreError> {
            self.inner.count_by_category(filter).await
        }
    }

    const SEED_JSON: &str = r#"[
        {"id": 1, "title": "Backpack", "price": 329.85, "description": "Everyday pack",
         "category": "men's clothing", "image": "https://example.com/1.jpg",
         "sold": false, "dateOfSale": "2021-11-27T20:29:54+05:30"},
        {"id": 2, "title": "Slim Fit T-Shirt", "price": 44.6, "description": "Casual tee",
         "category": "men's clothing", "image": "https://example.com/2.jpg",
         "sold": true, "dateOfSale": "2021-10-27T20:29:54+05:30"},
        {"id": 3, "title": "Ring", "price": 9.99, "description": "Silver ring",
         "category": "jewelery", "image": "https://example.com/3.jpg",
         "sold": true, "dateOfSale": "2022-11-05T10:00:00+05:30"}
    ]"#;

    async fn serve(router: Router) -> SocketAddr {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move { axum::serve(listener, router).await.unwrap() });
        addr
    }

    async fn seed_server() -> String {
        let router = Router::new().route(
            "/product_transaction.json",
            get(|| async { ([(CONTENT_TYPE, "application/json")], SEED_JSON) }),
        );
        format!("http://{}/product_transaction.json", serve(router).await)
    }

    fn november() -> TransactionFilter {
        TransactionFilter::for_month(SaleMonth::new(11).unwrap())
    }

    #[tokio::test]
    async fn seeds_from_remote_json() {
        let store = Arc::new(InMemoryTransactionStore::new());
        let seeder = SeedService::new(store.clone(), seed_server().await, false);

        let inserted = seeder.initialize_database().await.unwrap();

        assert_eq!(inserted, 3);
        assert_eq!(store.count(&november()).await.unwrap(), 2);
    }

    #[tokio::test]
    async fn reseeding_appends_unless_replace_is_set() {
        let url = seed_server().await;
        let store = Arc::new(InMemoryTransactionStore::new());

        let appending = SeedService::new(store.clone(), url.clone(), false);
        appending.initialize_database().await.unwrap();
        appending.initialize_database().await.unwrap();
        assert_eq!(store.count(&november()).await.unwrap(), 4);

        let replacing = SeedService::new(store.clone(), url, true);
        replacing.initialize_database().await.unwrap();
        assert_eq!(store.count(&november()).await.unwrap(), 2);
    }

    #[tokio::test]
    async fn failed_reseed_keeps_existing_records() {
        let inner = InMemoryTransactionStore::new();
        let existing: Vec<SeedRecord> = serde_json::from_str(SEED_JSON).unwrap();
        inner
            .insert_many(&[Transaction::from(existing[0].clone())])
            .await
            .unwrap();
        let store = Arc::new(ReadOnlyStore { inner });
        let seeder = SeedService::new(store.clone(), seed_server().await, true);

        let result = seeder.initialize_database().await;

        assert!(matches!(
            result,
            Err(ServiceError::Ingestion(IngestionError::Store(_)))
        ));
        assert_eq!(store.count(&november()).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn error_status_is_an_ingestion_failure() {
        let addr = serve(Router::new()).await;
        let store = Arc::new(InMemoryTransactionStore::new());
        let seeder = SeedService::new(store.clone(), format!("http://{}/missing.json", addr), false);

        let result = seeder.initialize_database().await;

        assert!(matches!(
            result,
            Err(ServiceError::Ingestion(IngestionError::Status(status))) if status.as_u16() == 404
        ));
        assert_eq!(store.count(&november()).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn malformed_body_is_a_parse_failure() {
        let router = Router::new().route("/seed.json", get(|| async { r#"{"not": "an array"}"# }));
        let addr = serve(router).await;
        let store = Arc::new(InMemoryTransactionStore::new());
        let seeder = SeedService::new(store, format!("http://{}/seed.json", addr), false);

        let result = seeder.initialize_database().await;

        assert!(matches!(
            result,
            Err(ServiceError::Ingestion(IngestionError::Parse(_)))
        ));
    }

    #[tokio::test]
    async fn seeds_from_local_file() {
        let path = std::env::temp_dir().join(format!("seed-{}-local.json", std::process::id()));
        std::fs::write(&path, SEED_JSON).unwrap();
        let store = Arc::new(InMemoryTransactionStore::new());
        let seeder = SeedService::new(store.clone(), path.to_string_lossy(), false);

        let inserted = seeder.initialize_database().await.unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(inserted, 3);
    }
}
