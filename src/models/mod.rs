mod datetime_utils;
mod filter;
mod list_params;
mod month;
mod report;
mod transaction;

pub use filter::TransactionFilter;
pub use list_params::ListParams;
pub use month::SaleMonth;
pub use report::{BarChartEntry, PieChartEntry, Statistics, PRICE_BUCKETS};
pub use transaction::{SeedRecord, Transaction, TransactionView};
