pub mod memory_repository;
pub mod transaction_repository;

use crate::error::StoreError;
use crate::models::{PieChartEntry, Transaction, TransactionFilter};
use async_trait::async_trait;

pub use memory_repository::InMemoryTransactionStore;
pub use transaction_repository::MongoTransactionStore;

/// Read and bulk-write access to the transaction collection.
///
/// Implementations must keep a stable natural order so that paging with
/// `skip`/`limit` is consistent between calls.
#[async_trait]
pub trait TransactionStore: Send + Sync {
    /// Inserts all records in one operation and returns how many were written.
    async fn insert_many(&self, transactions: &[Transaction]) -> Result<u64, StoreError>;

    /// Replaces every stored record with `transactions` and returns how many
    /// were written. On failure the previous records stay in place.
    async fn replace_all(&self, transactions: &[Transaction]) -> Result<u64, StoreError>;

    async fn find(
        &self,
        filter: &TransactionFilter,
        skip: u64,
        limit: u64,
    ) -> Result<Vec<Transaction>, StoreError>;

    async fn count(&self, filter: &TransactionFilter) -> Result<u64, StoreError>;

    /// Sum of `price` over matching records, 0 when nothing matches.
    async fn sum_price(&self, filter: &TransactionFilter) -> Result<f64, StoreError>;

    /// Record count per category, sorted by category.
    async fn count_by_category(
        &self,
        filter: &TransactionFilter,
    ) -> Result<Vec<PieChartEntry>, StoreError>;
}
