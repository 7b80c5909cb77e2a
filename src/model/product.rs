use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Catalog record only. Stock and its version stamp live in the inventory
/// ledger and are never written through this type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub product_id: i32,
    pub name: String,
    pub description: Option<String>,
    pub price: i64,
    pub category_ids: Vec<i32>,
    pub created_at: NaiveDateTime,
}
