use crate::model::{InventoryRecord, Product};
use serde::{Deserialize, Serialize};

/// Catalog fields joined with the live inventory snapshot. `version` is
/// exposed so a caller that hits a version conflict can re-read and resubmit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductResponse {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub price: i64,
    pub stock_quantity: i32,
    pub version: i64,
    pub category_ids: Vec<i32>,
    #[serde(rename = "created_at")]
    pub created_at: String,
}

impl ProductResponse {
    pub fn new(product: Product, inventory: &InventoryRecord) -> Self {
        ProductResponse {
            id: product.product_id,
            name: product.name,
            description: product.description,
            price: product.price,
            stock_quantity: inventory.quantity,
            version: inventory.version,
            category_ids: product.category_ids,
            created_at: product.created_at.to_string(),
        }
    }
}
