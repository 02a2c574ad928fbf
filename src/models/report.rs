use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    pub total_sale_amount: f64,
    pub total_sold_items: u64,
    pub total_not_sold_items: u64,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct BarChartEntry {
    pub range: String,
    pub count: u64,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct PieChartEntry {
    pub category: String,
    pub count: u64,
}

/// Price interval. `min` is inclusive only when `min_inclusive` is set and
/// `max` is always inclusive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceRange {
    pub min: f64,
    pub min_inclusive: bool,
    pub max: Option<f64>,
}

impl PriceRange {
    pub fn contains(&self, price: f64) -> bool {
        let above_min = if self.min_inclusive {
            price >= self.min
        } else {
            price > self.min
        };
        above_min && self.max.map_or(true, |max| price <= max)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct PriceBucket {
    pub label: &'static str,
    pub range: PriceRange,
}

const fn bucket(label: &'static str, min: f64, max: Option<f64>) -> PriceBucket {
    PriceBucket {
        label,
        range: PriceRange {
            min,
            min_inclusive: false,
            max,
        },
    }
}

/// Bar chart buckets in display order. Adjacent buckets share a bound so a
/// price such as 100.5 still lands in `101-200`.
pub const PRICE_BUCKETS: [PriceBucket; 10] = [
    PriceBucket {
        label: "0-100",
        range: PriceRange {
            min: 0.0,
            min_inclusive: true,
            max: Some(100.0),
        },
    },
    bucket("101-200", 100.0, Some(200.0)),
    bucket("201-300", 200.0, Some(300.0)),
    bucket("301-400", 300.0, Some(400.0)),
    bucket("401-500", 400.0, Some(500.0)),
    bucket("501-600", 500.0, Some(600.0)),
    bucket("601-700", 600.0, Some(700.0)),
    bucket("701-800", 700.0, Some(800.0)),
    bucket("801-900", 800.0, Some(900.0)),
    bucket("901-above", 900.0, None),
];
