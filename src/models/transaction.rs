use super::datetime_utils::{deserialize_datetime, serialize_datetime};
use chrono::{DateTime, Utc};
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// A product transaction as stored in the `transactions` collection.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub sold: bool,
    #[serde(
        serialize_with = "serialize_datetime",
        deserialize_with = "deserialize_datetime"
    )]
    pub date_of_sale: DateTime<Utc>,
}

/// One element of the seed feed's JSON array.
///
/// The feed carries its own numeric `id`; it is ignored because storage
/// assigns identity on insert.
#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct SeedRecord {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    pub category: String,
    #[serde(default)]
    pub image: Option<String>,
    pub sold: bool,
    pub date_of_sale: DateTime<Utc>,
}

impl From<SeedRecord> for Transaction {
    fn from(record: SeedRecord) -> Self {
        Self {
            id: None,
            title: record.title,
            description: record.description,
            price: record.price,
            category: record.category,
            image: record.image,
            sold: record.sold,
            date_of_sale: record.date_of_sale,
        }
    }
}

/// JSON shape returned by the listing endpoint.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TransactionView {
    pub id: String,
    pub title: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub sold: bool,
    pub date_of_sale: DateTime<Utc>,
}

impl From<Transaction> for TransactionView {
    fn from(tx: Transaction) -> Self {
        Self {
            id: tx.id.map(|id| id.to_hex()).unwrap_or_default(),
            title: tx.title,
            description: tx.description,
            price: tx.price,
            category: tx.category,
            image: tx.image,
            sold: tx.sold,
            date_of_sale: tx.date_of_sale,
        }
    }
}
