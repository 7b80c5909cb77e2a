use crate::model::{Order, OrderItem, OrderStatus};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItemResponse {
    pub product_id: i32,
    pub quantity: i32,
    pub price_at_purchase: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderResponse {
    pub id: i32,
    pub user_id: i32,
    pub status: OrderStatus,
    pub total_amount: i64,
    #[serde(rename = "created_at")]
    pub created_at: String,
    pub items: Vec<OrderItemResponse>,
}

// model to response
impl From<OrderItem> for OrderItemResponse {
    fn from(value: OrderItem) -> Self {
        OrderItemResponse {
            product_id: value.product_id,
            quantity: value.quantity,
            price_at_purchase: value.price_at_purchase,
        }
    }
}

impl From<Order> for OrderResponse {
    fn from(value: Order) -> Self {
        OrderResponse {
            id: value.order_id,
            user_id: value.user_id,
            status: value.status,
            total_amount: value.total_amount,
            created_at: value.created_at.to_string(),
            items: value.items.into_iter().map(OrderItemResponse::from).collect(),
        }
    }
}
