use crate::{
    abstract_trait::{CategoryServiceTrait, DynCategoryRepository},
    domain::{
        requests::CreateCategoryRequest,
        responses::{ApiResponse, CategoryResponse},
    },
    errors::{RepositoryError, ServiceError},
    utils::format_validation_errors,
};
use async_trait::async_trait;
use tracing::{error, info};
use validator::Validate;

pub struct CategoryService {
    repository: DynCategoryRepository,
}

impl CategoryService {
    pub fn new(repository: DynCategoryRepository) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl CategoryServiceTrait for CategoryService {
    async fn create_category(
        &self,
        req: &CreateCategoryRequest,
    ) -> Result<ApiResponse<CategoryResponse>, ServiceError> {
        info!("🏷️ Creating category: {}", req.name);

        req.validate()
            .map_err(|e| ServiceError::Validation(format_validation_errors(&e)))?;

        let category = self.repository.create_category(req).await?;

        info!("✅ Category created with ID={}", category.category_id);

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Category created successfully".to_string(),
            data: CategoryResponse::from(category),
        })
    }

    async fn find_all(&self) -> Result<ApiResponse<Vec<CategoryResponse>>, ServiceError> {
        let categories = self.repository.find_all().await?;

        info!("📋 Fetched {} categories", categories.len());

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Categories fetched successfully".to_string(),
            data: categories.into_iter().map(CategoryResponse::from).collect(),
        })
    }

    async fn find_by_id(
        &self,
        category_id: i32,
    ) -> Result<ApiResponse<CategoryResponse>, ServiceError> {
        let category = match self.repository.find_by_id(category_id).await? {
            Some(category) => category,
            None => {
                error!("❌ Category not found with ID={category_id}");
                return Err(ServiceError::Repo(RepositoryError::NotFound));
            }
        };

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Category fetched successfully".to_string(),
            data: CategoryResponse::from(category),
        })
    }

    async fn delete_category(&self, category_id: i32) -> Result<ApiResponse<()>, ServiceError> {
        info!("🗑️ Deleting category ID={category_id}");

        self.repository.delete_category(category_id).await?;

        info!("✅ Category deleted with ID={category_id}");

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Category deleted successfully".to_string(),
            data: (),
        })
    }
}
