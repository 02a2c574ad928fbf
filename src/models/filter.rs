use super::month::SaleMonth;
use super::report::PriceRange;
use super::transaction::Transaction;
use chrono::Datelike;
use mongodb::bson::{doc, Bson, Document};

/// Free-text search over title and description, plus an exact price match
/// when the text is numeric.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchTerm {
    text: String,
    lowercase: String,
    price: Option<f64>,
}

impl SearchTerm {
    /// Returns `None` for blank input, which means "match everything".
    pub fn parse(input: &str) -> Option<Self> {
        let text = input.trim();
        if text.is_empty() {
            return None;
        }
        Some(Self {
            text: text.to_string(),
            lowercase: text.to_lowercase(),
            price: text.parse::<f64>().ok().filter(|p| p.is_finite()),
        })
    }

    fn matches(&self, tx: &Transaction) -> bool {
        tx.title.to_lowercase().contains(&self.lowercase)
            || tx.description.to_lowercase().contains(&self.lowercase)
            || self.price == Some(tx.price)
    }

    fn clauses(&self) -> Vec<Document> {
        let pattern = regex::escape(&self.text);
        let mut clauses = vec![
            doc! { "title": { "$regex": pattern.as_str(), "$options": "i" } },
            doc! { "description": { "$regex": pattern.as_str(), "$options": "i" } },
        ];
        if let Some(price) = self.price {
            clauses.push(doc! { "price": price });
        }
        clauses
    }
}

/// Conditions shared by every read against the transaction store.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionFilter {
    pub month: SaleMonth,
    pub search: Option<SearchTerm>,
    pub sold: Option<bool>,
    pub price: Option<PriceRange>,
}

impl TransactionFilter {
    pub fn for_month(month: SaleMonth) -> Self {
        Self {
            month,
            search: None,
            sold: None,
            price: None,
        }
    }

    pub fn with_search(mut self, search: Option<SearchTerm>) -> Self {
        self.search = search;
        self
    }

    pub fn with_sold(mut self, sold: bool) -> Self {
        self.sold = Some(sold);
        self
    }

    pub fn with_price(mut self, range: PriceRange) -> Self {
        self.price = Some(range);
        self
    }

    pub fn matches(&self, tx: &Transaction) -> bool {
        tx.date_of_sale.month() == self.month.number()
            && self.search.as_ref().map_or(true, |s| s.matches(tx))
            && self.sold.map_or(true, |sold| tx.sold == sold)
            && self.price.map_or(true, |range| range.contains(tx.price))
    }

    /// MongoDB query document. `$month` evaluates in UTC, matching `matches`.
    pub fn to_document(&self) -> Document {
        let month = self.month.number() as i32;
        let mut filter = doc! {
            "$expr": { "$eq": [{ "$month": "$dateOfSale" }, month] }
        };
        if let Some(search) = &self.search {
            filter.insert("$or", search.clauses());
        }
        if let Some(sold) = self.sold {
            filter.insert("sold", sold);
        }
        if let Some(range) = self.price {
            let mut bounds = Document::new();
            let lower = if range.min_inclusive { "$gte" } else { "$gt" };
            bounds.insert(lower, range.min);
            if let Some(max) = range.max {
                bounds.insert("$lte", max);
            }
            filter.insert("price", Bson::Document(bounds));
        }
        filter
    }
}
