use crate::error::ServiceError;
use crate::models::{
    BarChartEntry, ListParams, PieChartEntry, SaleMonth, Statistics, Transaction,
    TransactionFilter, PRICE_BUCKETS,
};
use crate::repositories::TransactionStore;
use futures::future::try_join_all;
use log::debug;
use std::sync::Arc;

/// Listing and reporting over the stored transactions. Every call is
/// computed fresh from the store.
#[derive(Clone)]
pub struct TransactionService {
    store: Arc<dyn TransactionStore>,
}

impl TransactionService {
    pub fn new(store: Arc<dyn TransactionStore>) -> Self {
        Self { store }
    }

    pub async fn list_transactions(
        &self,
        params: &ListParams,
    ) -> Result<Vec<Transaction>, ServiceError> {
        debug!(
            "Listing {} page {} ({} per page)",
            params.month, params.page, params.per_page
        );
        let transactions = self
            .store
            .find(&params.filter(), params.skip(), params.per_page)
            .await?;
        Ok(transactions)
    }

    pub async fn get_statistics(&self, month: SaleMonth) -> Result<Statistics, ServiceError> {
        let filter = TransactionFilter::for_month(month);
        let sold = filter.clone().with_sold(true);
        let not_sold = filter.clone().with_sold(false);

        let (total_sale_amount, total_sold_items, total_not_sold_items) = tokio::try_join!(
            self.store.sum_price(&filter),
            self.store.count(&sold),
            self.store.count(&not_sold),
        )?;

        Ok(Statistics {
            total_sale_amount,
            total_sold_items,
            total_not_sold_items,
        })
    }

    /// One count per price bucket, always in bucket order.
    pub async fn get_bar_chart_data(
        &self,
        month: SaleMonth,
    ) -> Result<Vec<BarChartEntry>, ServiceError> {
        let filters: Vec<TransactionFilter> = PRICE_BUCKETS
            .iter()
            .map(|bucket| TransactionFilter::for_month(month).with_price(bucket.range))
            .collect();

        let counts = try_join_all(filters.iter().map(|filter| self.store.count(filter))).await?;

        Ok(PRICE_BUCKETS
            .iter()
            .zip(counts)
            .map(|(bucket, count)| BarChartEntry {
                range: bucket.label.to_string(),
                count,
            })
            .collect())
    }

    pub async fn get_pie_chart_data(
        &self,
        month: SaleMonth,
    ) -> Result<Vec<PieChartEntry>, ServiceError> {
        let entries = self
            .store
            .count_by_category(&TransactionFilter::for_month(month))
            .await?;
        Ok(entries)
    }
}
