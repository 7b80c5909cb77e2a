use crate::{
    abstract_trait::OrderCommandRepositoryTrait,
    config::Database,
    errors::RepositoryError,
    model::{Order, OrderItem, OrderStatus},
};
use async_trait::async_trait;
use chrono::Utc;
use tracing::{error, info};

pub struct OrderCommandRepository {
    db: Database,
}

impl OrderCommandRepository {
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

#[async_trait]
impl OrderCommandRepositoryTrait for OrderCommandRepository {
    async fn create_order(
        &self,
        user_id: i32,
        items: Vec<OrderItem>,
        total_amount: i64,
    ) -> Result<Order, RepositoryError> {
        let mut orders = self.db.orders().write().await;

        let order = Order {
            order_id: self.db.next_order_id(),
            user_id,
            status: OrderStatus::Pending,
            total_amount,
            created_at: Utc::now().naive_utc(),
            items,
        };
        orders.insert(order.order_id, order.clone());

        info!(
            "✅ Created order ID {} for user {} with {} item(s)",
            order.order_id,
            user_id,
            order.items.len()
        );
        Ok(order)
    }

    async fn update_status(
        &self,
        order_id: i32,
        status: OrderStatus,
    ) -> Result<Order, RepositoryError> {
        let mut orders = self.db.orders().write().await;

        let order = orders.get_mut(&order_id).ok_or_else(|| {
            error!("❌ Order not found with ID={order_id}");
            RepositoryError::NotFound
        })?;

        order.status = status;

        info!("🔄 Order {order_id} status set to {status}");
        Ok(order.clone())
    }
}
