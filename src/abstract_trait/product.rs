use crate::{
    domain::{
        requests::{CreateProductRequest, UpdateProductRequest},
        responses::{ApiResponse, ProductResponse},
    },
    errors::{RepositoryError, ServiceError},
    model::Product,
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynProductCommandRepository = Arc<dyn ProductCommandRepositoryTrait + Send + Sync>;
pub type DynProductQueryRepository = Arc<dyn ProductQueryRepositoryTrait + Send + Sync>;
pub type DynProductCommandService = Arc<dyn ProductCommandServiceTrait + Send + Sync>;
pub type DynProductQueryService = Arc<dyn ProductQueryServiceTrait + Send + Sync>;

#[async_trait]
pub trait ProductCommandRepositoryTrait {
    async fn create_product(&self, req: &CreateProductRequest)
    -> Result<Product, RepositoryError>;
    async fn update_product(&self, req: &UpdateProductRequest)
    -> Result<Product, RepositoryError>;
    async fn delete_product(&self, product_id: i32) -> Result<(), RepositoryError>;
}

#[async_trait]
pub trait ProductQueryRepositoryTrait {
    async fn find_all(&self) -> Result<Vec<Product>, RepositoryError>;
    async fn find_by_id(&self, product_id: i32) -> Result<Option<Product>, RepositoryError>;
    async fn search_by_name(&self, name: &str) -> Result<Vec<Product>, RepositoryError>;
    async fn find_by_price_range(&self, min: i64, max: i64)
    -> Result<Vec<Product>, RepositoryError>;
    async fn find_by_category(&self, category_id: i32) -> Result<Vec<Product>, RepositoryError>;
}

#[async_trait]
pub trait ProductCommandServiceTrait {
    async fn create_product(
        &self,
        req: &CreateProductRequest,
    ) -> Result<ApiResponse<ProductResponse>, ServiceError>;
    async fn update_product(
        &self,
        req: &UpdateProductRequest,
    ) -> Result<ApiResponse<ProductResponse>, ServiceError>;
    async fn delete_product(&self, product_id: i32) -> Result<ApiResponse<()>, ServiceError>;
}

#[async_trait]
pub trait ProductQueryServiceTrait {
    async fn find_all(&self) -> Result<ApiResponse<Vec<ProductResponse>>, ServiceError>;
    async fn find_by_id(
        &self,
        product_id: i32,
    ) -> Result<ApiResponse<ProductResponse>, ServiceError>;
    async fn search_by_name(
        &self,
        name: &str,
    ) -> Result<ApiResponse<Vec<ProductResponse>>, ServiceError>;
    async fn find_by_price_range(
        &self,
        min: i64,
        max: i64,
    ) -> Result<ApiResponse<Vec<ProductResponse>>, ServiceError>;
    async fn find_by_category(
        &self,
        category_id: i32,
    ) -> Result<ApiResponse<Vec<ProductResponse>>, ServiceError>;
    async fn find_available(&self) -> Result<ApiResponse<Vec<ProductResponse>>, ServiceError>;
}
