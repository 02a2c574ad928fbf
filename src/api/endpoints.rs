//! Route paths served by the API.

pub const INITIALIZE: &str = "/api/initialize";
pub const TRANSACTIONS: &str = "/api/transactions";
pub const STATISTICS: &str = "/api/statistics";
pub const BAR_CHART: &str = "/api/bar-chart";
pub const PIE_CHART: &str = "/api/pie-chart";
