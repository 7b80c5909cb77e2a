use crate::{
    domain::{requests::CreateReviewRequest, responses::{ApiResponse, ReviewResponse}},
    errors::{RepositoryError, ServiceError},
    model::Review,
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynReviewRepository = Arc<dyn ReviewRepositoryTrait + Send + Sync>;
pub type DynReviewService = Arc<dyn ReviewServiceTrait + Send + Sync>;

#[async_trait]
pub trait ReviewRepositoryTrait {
    async fn create_review(&self, req: &CreateReviewRequest) -> Result<Review, RepositoryError>;
    async fn find_all(&self) -> Result<Vec<Review>, RepositoryError>;
    async fn find_by_id(&self, review_id: i32) -> Result<Option<Review>, RepositoryError>;
    async fn find_by_product(&self, product_id: i32) -> Result<Vec<Review>, RepositoryError>;
    async fn find_by_user(&self, user_id: i32) -> Result<Vec<Review>, RepositoryError>;
    async fn delete_review(&self, review_id: i32) -> Result<(), RepositoryError>;
}

#[async_trait]
pub trait ReviewServiceTrait {
    async fn create_review(
        &self,
        req: &CreateReviewRequest,
    ) -> Result<ApiResponse<ReviewResponse>, ServiceError>;
    async fn find_all(&self) -> Result<ApiResponse<Vec<ReviewResponse>>, ServiceError>;
    async fn find_by_id(&self, review_id: i32) -> Result<ApiResponse<ReviewResponse>, ServiceError>;
    async fn find_by_product(
        &self,
        product_id: i32,
    ) -> Result<ApiResponse<Vec<ReviewResponse>>, ServiceError>;
    async fn find_by_user(
        &self,
        user_id: i32,
    ) -> Result<ApiResponse<Vec<ReviewResponse>>, ServiceError>;
    async fn delete_review(&self, review_id: i32) -> Result<ApiResponse<()>, ServiceError>;
}
