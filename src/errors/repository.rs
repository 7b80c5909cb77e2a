use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Not found")]
    NotFound,

    #[error("Already exists: {0}")]
    AlreadyExists(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error(
        "Not enough stock for product {product_id}. Requested: {requested}, Available: {available}"
    )]
    InsufficientStock {
        product_id: i32,
        requested: i32,
        available: i32,
    },

    #[error("Product {product_id} was purchased by another customer. Please try again.")]
    VersionConflict { product_id: i32 },

    #[error("Custom: {0}")]
    Custom(String),
}
