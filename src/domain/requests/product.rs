use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateProductRequest {
    #[validate(length(min = 1, message = "Product name is required"))]
    pub name: String,

    pub description: Option<String>,

    #[validate(range(min = 1, message = "Price must be positive"))]
    pub price: i64,

    #[validate(range(min = 0, message = "Stock quantity cannot be negative"))]
    pub stock_quantity: i32,

    #[serde(default)]
    pub category_ids: Vec<i32>,
}

/// Catalog fields only. Stock is mutated exclusively through the inventory
/// ledger, so it has no place here.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateProductRequest {
    #[validate(range(min = 1, message = "Product ID is required"))]
    pub id: i32,

    #[validate(length(min = 1, message = "Product name is required"))]
    pub name: String,

    pub description: Option<String>,

    #[validate(range(min = 1, message = "Price must be positive"))]
    pub price: i64,

    #[serde(default)]
    pub category_ids: Vec<i32>,
}
