use crate::{
    domain::{requests::CreateCategoryRequest, responses::{ApiResponse, CategoryResponse}},
    errors::{RepositoryError, ServiceError},
    model::Category,
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynCategoryRepository = Arc<dyn CategoryRepositoryTrait + Send + Sync>;
pub type DynCategoryService = Arc<dyn CategoryServiceTrait + Send + Sync>;

#[async_trait]
pub trait CategoryRepositoryTrait {
    async fn create_category(
        &self,
        req: &CreateCategoryRequest,
    ) -> Result<Category, RepositoryError>;
    async fn find_all(&self) -> Result<Vec<Category>, RepositoryError>;
    async fn find_by_id(&self, category_id: i32) -> Result<Option<Category>, RepositoryError>;
    async fn delete_category(&self, category_id: i32) -> Result<(), RepositoryError>;
}

#[async_trait]
pub trait CategoryServiceTrait {
    async fn create_category(
        &self,
        req: &CreateCategoryRequest,
    ) -> Result<ApiResponse<CategoryResponse>, ServiceError>;
    async fn find_all(&self) -> Result<ApiResponse<Vec<CategoryResponse>>, ServiceError>;
    async fn find_by_id(
        &self,
        category_id: i32,
    ) -> Result<ApiResponse<CategoryResponse>, ServiceError>;
    async fn delete_category(&self, category_id: i32) -> Result<ApiResponse<()>, ServiceError>;
}
