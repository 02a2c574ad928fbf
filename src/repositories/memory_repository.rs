use super::TransactionStore;
use crate::error::StoreError;
use crate::models::{PieChartEntry, Transaction, TransactionFilter};
use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

/// Process-local [`TransactionStore`], kept in insertion order.
///
/// Selected with `STORAGE_BACKEND=memory`; data is lost on restart.
#[derive(Default)]
pub struct InMemoryTransactionStore {
    transactions: RwLock<Vec<Transaction>>,
}

impl InMemoryTransactionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn with_new_ids(transactions: &[Transaction]) -> impl Iterator<Item = Transaction> + '_ {
    transactions.iter().cloned().map(|mut tx| {
        tx.id = Some(ObjectId::new());
        tx
    })
}

#[async_trait]
impl TransactionStore for InMemoryTransactionStore {
    async fn insert_many(&self, transactions: &[Transaction]) -> Result<u64, StoreError> {
        let mut stored = self.transactions.write().await;
        stored.extend(with_new_ids(transactions));
        Ok(transactions.len() as u64)
    }

    async fn replace_all(&self, transactions: &[Transaction]) -> Result<u64, StoreError> {
        let replacement: Vec<Transaction> = with_new_ids(transactions).collect();
        let mut stored = self.transactions.write().await;
        *stored = replacement;
        Ok(transactions.len() as u64)
    }

    async fn find(
        &self,
        filter: &TransactionFilter,
        skip: u64,
        limit: u64,
    ) -> Result<Vec<Transaction>, StoreError> {
        let stored = self.transactions.read().await;
        Ok(stored
            .iter()
            .filter(|tx| filter.matches(tx))
            .skip(usize::try_from(skip).unwrap_or(usize::MAX))
            .take(usize::try_from(limit).unwrap_or(usize::MAX))
            .cloned()
            .collect())
    }

    async fn count(&self, filter: &TransactionFilter) -> Result<u64, StoreError> {
        let stored = self.transactions.read().await;
        Ok(stored.iter().filter(|tx| filter.matches(tx)).count() as u64)
    }

    async fn sum_price(&self, filter: &TransactionFilter) -> Result<f64, StoreError> {
        let stored = self.transactions.read().await;
        Ok(stored
            .iter()
            .filter(|tx| filter.matches(tx))
            .map(|tx| tx.price)
            .sum())
    }

    async fn count_by_category(
        &self,
        filter: &TransactionFilter,
    ) -> Result<Vec<PieChartEntry>, StoreError> {
        let stored = self.transactions.read().await;
        let mut groups: BTreeMap<&str, u64> = BTreeMap::new();
        for tx in stored.iter().filter(|tx| filter.matches(tx)) {
            *groups.entry(tx.category.as_str()).or_insert(0) += 1;
        }
        Ok(groups
            .into_iter()
            .map(|(category, count)| PieChartEntry {
                category: category.to_string(),
                count,
            })
            .collect())
    }
}
