use crate::{
    abstract_trait::ReviewRepositoryTrait,
    config::Database,
    domain::requests::CreateReviewRequest,
    errors::RepositoryError,
    model::Review,
};
use async_trait::async_trait;
use chrono::Utc;
use tracing::{error, info};

pub struct ReviewRepository {
    db: Database,
}

impl ReviewRepository {
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ReviewRepositoryTrait for ReviewRepository {
    async fn create_review(&self, req: &CreateReviewRequest) -> Result<Review, RepositoryError> {
        let mut reviews = self.db.reviews().write().await;

        let duplicate = reviews
            .values()
            .any(|r| r.user_id == req.user_id && r.product_id == req.product_id);
        if duplicate {
            error!(
                "❌ User {} already reviewed product {}",
                req.user_id, req.product_id
            );
            return Err(RepositoryError::AlreadyExists(
                "User already reviewed this product".to_string(),
            ));
        }

        let review = Review {
            review_id: self.db.next_review_id(),
            user_id: req.user_id,
            product_id: req.product_id,
            rating: req.rating,
            comment: req.comment.clone(),
            created_at: Utc::now().naive_utc(),
        };
        reviews.insert(review.review_id, review.clone());

        info!("✅ Created review ID {}", review.review_id);
        Ok(review)
    }

    async fn find_all(&self) -> Result<Vec<Review>, RepositoryError> {
        let mut reviews: Vec<Review> = self.db.reviews().read().await.values().cloned().collect();
        reviews.sort_by_key(|r| r.review_id);
        Ok(reviews)
    }

    async fn find_by_id(&self, review_id: i32) -> Result<Option<Review>, RepositoryError> {
        Ok(self.db.reviews().read().await.get(&review_id).cloned())
    }

    async fn find_by_product(&self, product_id: i32) -> Result<Vec<Review>, RepositoryError> {
        let mut reviews: Vec<Review> = self
            .db
            .reviews()
            .read()
            .await
            .values()
            .filter(|r| r.product_id == product_id)
            .cloned()
            .collect();
        reviews.sort_by_key(|r| r.review_id);
        Ok(reviews)
    }

    async fn find_by_user(&self, user_id: i32) -> Result<Vec<Review>, RepositoryError> {
        let mut reviews: Vec<Review> = self
            .db
            .reviews()
            .read()
            .await
            .values()
            .filter(|r| r.user_id == user_id)
            .cloned()
            .collect();
        reviews.sort_by_key(|r| r.review_id);
        Ok(reviews)
    }

    async fn delete_review(&self, review_id: i32) -> Result<(), RepositoryError> {
        self.db
            .reviews()
            .write()
            .await
            .remove(&review_id)
            .map(|_| ())
            .ok_or(RepositoryError::NotFound)
    }
}
