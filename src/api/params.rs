//! Raw query strings and their validation into service parameters.

use crate::config::Config;
use crate::error::ServiceError;
use crate::models::{ListParams, SaleMonth};
use serde::Deserialize;

/// Query string of the report endpoints.
#[derive(Debug, Default, Deserialize)]
pub struct MonthQuery {
    pub month: Option<String>,
}

impl MonthQuery {
    pub fn resolve(&self, config: &Config) -> Result<SaleMonth, ServiceError> {
        resolve_month(self.month.as_deref(), config)
    }
}

/// Query string of the listing endpoint. Values are kept as text so that
/// bad input produces our own error message.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListQuery {
    pub month: Option<String>,
    pub page: Option<String>,
    pub per_page: Option<String>,
    pub search: Option<String>,
}

impl ListQuery {
    pub fn into_params(self, config: &Config) -> Result<ListParams, ServiceError> {
        let month = resolve_month(self.month.as_deref(), config)?;
        let page = parse_count("page", self.page.as_deref())?.unwrap_or(1);
        let per_page =
            parse_count("perPage", self.per_page.as_deref())?.unwrap_or(config.default_per_page);
        ListParams::new(
            month,
            page,
            per_page,
            self.search.as_deref().unwrap_or_default(),
            config.max_per_page,
        )
    }
}

fn resolve_month(raw: Option<&str>, config: &Config) -> Result<SaleMonth, ServiceError> {
    match raw {
        Some(text) if !text.trim().is_empty() => SaleMonth::resolve(text),
        _ => Ok(config.default_month),
    }
}

fn parse_count(name: &'static str, raw: Option<&str>) -> Result<Option<u64>, ServiceError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(text) => text.parse().map(Some).map_err(|_| {
            ServiceError::invalid_parameter(name, format!("\"{}\" is not a positive integer", text))
        }),
    }
}
