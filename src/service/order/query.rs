use crate::{
    abstract_trait::{DynOrderQueryRepository, OrderQueryServiceTrait},
    domain::responses::{ApiResponse, OrderResponse},
    errors::{RepositoryError, ServiceError},
};
use async_trait::async_trait;
use tracing::{error, info};

pub struct OrderQueryService {
    pub query: DynOrderQueryRepository,
}

impl OrderQueryService {
    pub fn new(query: DynOrderQueryRepository) -> Self {
        Self { query }
    }
}

#[async_trait]
impl OrderQueryServiceTrait for OrderQueryService {
    async fn find_all(&self) -> Result<ApiResponse<Vec<OrderResponse>>, ServiceError> {
        let orders = self.query.find_all().await?;

        info!("📋 Fetched {} order(s)", orders.len());

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Orders fetched successfully".to_string(),
            data: orders.into_iter().map(OrderResponse::from).collect(),
        })
    }

    async fn find_by_id(&self, order_id: i32) -> Result<ApiResponse<OrderResponse>, ServiceError> {
        let order = match self.query.find_by_id(order_id).await? {
            Some(order) => order,
            None => {
                error!("❌ Order not found with ID={order_id}");
                return Err(ServiceError::Repo(RepositoryError::NotFound));
            }
        };

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Order fetched successfully".to_string(),
            data: OrderResponse::from(order),
        })
    }

    async fn find_by_user(
        &self,
        user_id: i32,
    ) -> Result<ApiResponse<Vec<OrderResponse>>, ServiceError> {
        let orders = self.query.find_by_user(user_id).await?;

        info!("📋 Fetched {} order(s) for user {user_id}", orders.len());

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Orders fetched successfully".to_string(),
            data: orders.into_iter().map(OrderResponse::from).collect(),
        })
    }
}
