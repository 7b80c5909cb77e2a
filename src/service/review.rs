use crate::{
    abstract_trait::{
        DynProductQueryRepository, DynReviewRepository, DynUserRepository, ReviewServiceTrait,
    },
    domain::{
        requests::CreateReviewRequest,
        responses::{ApiResponse, ReviewResponse},
    },
    errors::{RepositoryError, ServiceError},
    utils::format_validation_errors,
};
use async_trait::async_trait;
use tracing::{error, info};
use validator::Validate;

pub struct ReviewService {
    repository: DynReviewRepository,
    user_query: DynUserRepository,
    product_query: DynProductQueryRepository,
}

pub struct ReviewServiceDeps {
    pub repository: DynReviewRepository,
    pub user_query: DynUserRepository,
    pub product_query: DynProductQueryRepository,
}

impl ReviewService {
    pub fn new(deps: ReviewServiceDeps) -> Self {
        let ReviewServiceDeps {
            repository,
            user_query,
            product_query,
        } = deps;

        Self {
            repository,
            user_query,
            product_query,
        }
    }
}

#[async_trait]
impl ReviewServiceTrait for ReviewService {
    async fn create_review(
        &self,
        req: &CreateReviewRequest,
    ) -> Result<ApiResponse<ReviewResponse>, ServiceError> {
        info!(
            "⭐ Creating review for product {} by user {}",
            req.product_id, req.user_id
        );

        req.validate()
            .map_err(|e| ServiceError::Validation(format_validation_errors(&e)))?;

        if self.user_query.find_by_id(req.user_id).await?.is_none() {
            error!("❌ User not found with ID={}", req.user_id);
            return Err(ServiceError::Repo(RepositoryError::NotFound));
        }

        if self.product_query.find_by_id(req.product_id).await?.is_none() {
            error!("❌ Product not found with ID={}", req.product_id);
            return Err(ServiceError::Repo(RepositoryError::NotFound));
        }

        let review = self.repository.create_review(req).await?;

        info!("✅ Review created with ID={}", review.review_id);

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Review created successfully".to_string(),
            data: ReviewResponse::from(review),
        })
    }

    async fn find_all(&self) -> Result<ApiResponse<Vec<ReviewResponse>>, ServiceError> {
        let reviews = self.repository.find_all().await?;

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Reviews fetched successfully".to_string(),
            data: reviews.into_iter().map(ReviewResponse::from).collect(),
        })
    }

    async fn find_by_id(
        &self,
        review_id: i32,
    ) -> Result<ApiResponse<ReviewResponse>, ServiceError> {
        let review = match self.repository.find_by_id(review_id).await? {
            Some(review) => review,
            None => {
                error!("❌ Review not found with ID={review_id}");
                return Err(ServiceError::Repo(RepositoryError::NotFound));
            }
        };

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Review fetched successfully".to_string(),
            data: ReviewResponse::from(review),
        })
    }

    async fn find_by_product(
        &self,
        product_id: i32,
    ) -> Result<ApiResponse<Vec<ReviewResponse>>, ServiceError> {
        let reviews = self.repository.find_by_product(product_id).await?;

        info!(
            "📋 Fetched {} review(s) for product {product_id}",
            reviews.len()
        );

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Reviews fetched successfully".to_string(),
            data: reviews.into_iter().map(ReviewResponse::from).collect(),
        })
    }

    async fn find_by_user(
        &self,
        user_id: i32,
    ) -> Result<ApiResponse<Vec<ReviewResponse>>, ServiceError> {
        let reviews = self.repository.find_by_user(user_id).await?;

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Reviews fetched successfully".to_string(),
            data: reviews.into_iter().map(ReviewResponse::from).collect(),
        })
    }

    async fn delete_review(&self, review_id: i32) -> Result<ApiResponse<()>, ServiceError> {
        info!("🗑️ Deleting review ID={review_id}");

        self.repository.delete_review(review_id).await?;

        info!("✅ Review deleted with ID={review_id}");

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Review deleted successfully".to_string(),
            data: (),
        })
    }
}
