use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateReviewRequest {
    #[validate(range(min = 1, message = "User ID is required"))]
    pub user_id: i32,

    #[validate(range(min = 1, message = "Product ID is required"))]
    pub product_id: i32,

    #[validate(range(min = 1, max = 5, message = "Rating must be between 1 and 5"))]
    pub rating: i32,

    pub comment: Option<String>,
}
