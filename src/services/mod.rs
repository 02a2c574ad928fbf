pub mod database;
pub mod seed;
pub mod transaction_service;

pub use seed::SeedService;
pub use transaction_service::TransactionService;
