use crate::{
    domain::{
        requests::{CreateOrderRequest, UpdateOrderStatusRequest},
        responses::{ApiResponse, OrderResponse},
    },
    errors::{RepositoryError, ServiceError},
    model::{Order, OrderItem, OrderStatus},
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynOrderCommandRepository = Arc<dyn OrderCommandRepositoryTrait + Send + Sync>;
pub type DynOrderQueryRepository = Arc<dyn OrderQueryRepositoryTrait + Send + Sync>;
pub type DynOrderCommandService = Arc<dyn OrderCommandServiceTrait + Send + Sync>;
pub type DynOrderQueryService = Arc<dyn OrderQueryServiceTrait + Send + Sync>;

#[async_trait]
pub trait OrderCommandRepositoryTrait {
    async fn create_order(
        &self,
        user_id: i32,
        items: Vec<OrderItem>,
        total_amount: i64,
    ) -> Result<Order, RepositoryError>;
    async fn update_status(
        &self,
        order_id: i32,
        status: OrderStatus,
    ) -> Result<Order, RepositoryError>;
}

#[async_trait]
pub trait OrderQueryRepositoryTrait {
    async fn find_all(&self) -> Result<Vec<Order>, RepositoryError>;
    async fn find_by_id(&self, order_id: i32) -> Result<Option<Order>, RepositoryError>;
    async fn find_by_user(&self, user_id: i32) -> Result<Vec<Order>, RepositoryError>;
    async fn exists_for_product(&self, product_id: i32) -> Result<bool, RepositoryError>;
}

#[async_trait]
pub trait OrderCommandServiceTrait {
    async fn create_order(
        &self,
        req: &CreateOrderRequest,
    ) -> Result<ApiResponse<OrderResponse>, ServiceError>;
    async fn update_order_status(
        &self,
        req: &UpdateOrderStatusRequest,
    ) -> Result<ApiResponse<OrderResponse>, ServiceError>;
}

#[async_trait]
pub trait OrderQueryServiceTrait {
    async fn find_all(&self) -> Result<ApiResponse<Vec<OrderResponse>>, ServiceError>;
    async fn find_by_id(&self, order_id: i32) -> Result<ApiResponse<OrderResponse>, ServiceError>;
    async fn find_by_user(
        &self,
        user_id: i32,
    ) -> Result<ApiResponse<Vec<OrderResponse>>, ServiceError>;
}
