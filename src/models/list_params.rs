use super::filter::{SearchTerm, TransactionFilter};
use super::month::SaleMonth;
use crate::error::ServiceError;

/// Validated arguments of a transaction listing request.
#[derive(Debug, Clone, PartialEq)]
pub struct ListParams {
    pub month: SaleMonth,
    pub page: u64,
    pub per_page: u64,
    pub search: Option<SearchTerm>,
}

impl ListParams {
    pub fn new(
        month: SaleMonth,
        page: u64,
        per_page: u64,
        search: &str,
        max_per_page: u64,
    ) -> Result<Self, ServiceError> {
        if page < 1 {
            return Err(ServiceError::invalid_parameter("page", "must be at least 1"));
        }
        if per_page < 1 || per_page > max_per_page {
            return Err(ServiceError::invalid_parameter(
                "perPage",
                format!("must be between 1 and {}", max_per_page),
            ));
        }
        Ok(Self {
            month,
            page,
            per_page,
            search: SearchTerm::parse(search),
        })
    }

    pub fn skip(&self) -> u64 {
        (self.page - 1).saturating_mul(self.per_page)
    }

    pub fn filter(&self) -> TransactionFilter {
        TransactionFilter::for_month(self.month).with_search(self.search.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn march() -> SaleMonth {
        SaleMonth::new(3).unwrap()
    }

    #[test]
    fn computes_skip_from_page() {
        assert_eq!(ListParams::new(march(), 1, 10, "", 100).unwrap().skip(), 0);
        assert_eq!(ListParams::new(march(), 3, 10, "", 100).unwrap().skip(), 20);
    }

    #[test]
    fn rejects_out_of_range_paging() {
        assert!(matches!(
            ListParams::new(march(), 0, 10, "", 100),
            Err(ServiceError::InvalidParameter { name: "page", .. })
        ));
        assert!(matches!(
            ListParams::new(march(), 1, 0, "", 100),
            Err(ServiceError::InvalidParameter { name: "perPage", .. })
        ));
        assert!(matches!(
            ListParams::new(march(), 1, 101, "", 100),
            Err(ServiceError::InvalidParameter { name: "perPage", .. })
        ));
    }

    #[test]
    fn filter_carries_month_and_search() {
        let params = ListParams::new(march(), 1, 10, "  phone ", 100).unwrap();
        let filter = params.filter();

        assert_eq!(filter.month, march());
        assert_eq!(filter.search, SearchTerm::parse("phone"));
        assert_eq!(filter.sold, None);
    }
}
