use crate::model::Review;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewResponse {
    pub id: i32,
    pub user_id: i32,
    pub product_id: i32,
    pub rating: i32,
    pub comment: Option<String>,
    #[serde(rename = "created_at")]
    pub created_at: String,
}

impl From<Review> for ReviewResponse {
    fn from(value: Review) -> Self {
        ReviewResponse {
            id: value.review_id,
            user_id: value.user_id,
            product_id: value.product_id,
            rating: value.rating,
            comment: value.comment,
            created_at: value.created_at.to_string(),
        }
    }
}
