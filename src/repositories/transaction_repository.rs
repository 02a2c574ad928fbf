use super::TransactionStore;
use crate::error::StoreError;
use crate::models::{PieChartEntry, Transaction, TransactionFilter};
use async_trait::async_trait;
use futures::TryStreamExt;
use log::{debug, warn};
use mongodb::bson::{doc, from_document, oid::ObjectId, Document};
use mongodb::{Collection, Database};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct PriceTotal {
    total: f64,
}

#[derive(Debug, Deserialize)]
struct CategoryGroup {
    #[serde(rename = "_id", default)]
    category: Option<String>,
    count: u64,
}

/// [`TransactionStore`] backed by a MongoDB collection.
#[derive(Clone)]
pub struct MongoTransactionStore {
    collection: Collection<Transaction>,
}

impl MongoTransactionStore {
    pub fn new(db: &Database, collection_name: &str) -> Self {
        Self {
            collection: db.collection(collection_name),
        }
    }
}

/// Largest skip the driver accepts; it sends `skip` as a signed 64-bit integer.
const MAX_SKIP: u64 = i64::MAX as u64;

/// Converts paging arguments into what the driver accepts. A skip past
/// `i64::MAX` is clamped, which still yields an empty page.
pub fn cursor_window(skip: u64, limit: u64) -> Result<(u64, i64), StoreError> {
    let limit = i64::try_from(limit)
        .map_err(|_| StoreError::Other(format!("limit {} is out of range", limit)))?;
    Ok((skip.min(MAX_SKIP), limit))
}

/// Matches every record outside the freshly inserted batch.
pub fn stale_records_filter(kept: &[ObjectId]) -> Document {
    doc! { "_id": { "$nin": kept.to_vec() } }
}

pub fn sum_price_pipeline(filter: &TransactionFilter) -> Vec<Document> {
    vec![
        doc! { "$match": filter.to_document() },
        doc! { "$group": { "_id": null, "total": { "$sum": "$price" } } },
    ]
}

pub fn category_pipeline(filter: &TransactionFilter) -> Vec<Document> {
    vec![
        doc! { "$match": filter.to_document() },
        doc! { "$group": { "_id": "$category", "count": { "$sum": 1 } } },
        doc! { "$sort": { "_id": 1 } },
    ]
}

#[async_trait]
impl TransactionStore for MongoTransactionStore {
    async fn insert_many(&self, transactions: &[Transaction]) -> Result<u64, StoreError> {
        if transactions.is_empty() {
            return Ok(0);
        }
        let result = self.collection.insert_many(transactions).await?;
        Ok(result.inserted_ids.len() as u64)
    }

    async fn replace_all(&self, transactions: &[Transaction]) -> Result<u64, StoreError> {
        let batch: Vec<Transaction> = transactions
            .iter()
            .cloned()
            .map(|mut tx| {
                tx.id = Some(ObjectId::new());
                tx
            })
            .collect();
        let ids: Vec<ObjectId> = batch.iter().filter_map(|tx| tx.id).collect();

        if !batch.is_empty() {
            if let Err(e) = self.collection.insert_many(&batch).await {
                // Drop whatever part of the batch made it in; the old records are untouched.
                let partial = doc! { "_id": { "$in": ids.clone() } };
                if let Err(cleanup) = self.collection.delete_many(partial).await {
                    warn!("Could not remove partially inserted batch: {}", cleanup);
                }
                return Err(e.into());
            }
        }

        let removed = self
            .collection
            .delete_many(stale_records_filter(&ids))
            .await?;
        debug!("Replaced {} stale transactions", removed.deleted_count);
        Ok(ids.len() as u64)
    }

    async fn find(
        &self,
        filter: &TransactionFilter,
        skip: u64,
        limit: u64,
    ) -> Result<Vec<Transaction>, StoreError> {
        let (skip, limit) = cursor_window(skip, limit)?;
        let query = filter.to_document();
        debug!("find {} skip={} limit={}", query, skip, limit);
        let cursor = self.collection.find(query).skip(skip).limit(limit).await?;
        Ok(cursor.try_collect().await?)
    }

    async fn count(&self, filter: &TransactionFilter) -> Result<u64, StoreError> {
        Ok(self.collection.count_documents(filter.to_document()).await?)
    }

    async fn sum_price(&self, filter: &TransactionFilter) -> Result<f64, StoreError> {
        let mut cursor = self.collection.aggregate(sum_price_pipeline(filter)).await?;
        match cursor.try_next().await? {
            Some(document) => Ok(from_document::<PriceTotal>(document)?.total),
            None => Ok(0.0),
        }
    }

    async fn count_by_category(
        &self,
        filter: &TransactionFilter,
    ) -> Result<Vec<PieChartEntry>, StoreError> {
        let documents: Vec<Document> = self
            .collection
            .aggregate(category_pipeline(filter))
            .await?
            .try_collect()
            .await?;

        documents
            .into_iter()
            .map(|document| -> Result<PieChartEntry, StoreError> {
                let group: CategoryGroup = from_document(document)?;
                Ok(PieChartEntry {
                    category: group.category.unwrap_or_default(),
                    count: group.count,
                })
            })
            .collect()
    }
}
