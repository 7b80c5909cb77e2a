use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    Pending,
    Processing,
    Shipped,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    /// Transition table consulted before every status update.
    ///
    /// Deliberately permissive: every state may move to every other state,
    /// including Delivered -> Cancelled, which still restores stock. Repeated
    /// cancellation is accepted but only rewrites the status field.
    pub fn reachable(self) -> &'static [OrderStatus] {
        const ALL: [OrderStatus; 5] = [
            OrderStatus::Pending,
            OrderStatus::Processing,
            OrderStatus::Shipped,
            OrderStatus::Delivered,
            OrderStatus::Cancelled,
        ];
        &ALL
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            OrderStatus::Pending => "PENDING",
            OrderStatus::Processing => "PROCESSING",
            OrderStatus::Shipped => "SHIPPED",
            OrderStatus::Delivered => "DELIVERED",
            OrderStatus::Cancelled => "CANCELLED",
        };
        f.write_str(s)
    }
}

/// Line item inside an order. `price_at_purchase` is snapshotted when the
/// reservation succeeds and never recomputed, even if the catalog price moves.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItem {
    pub product_id: i32,
    pub quantity: i32,
    pub price_at_purchase: i64,
}

/// Orders are created whole: items and `total_amount` are fixed at creation
/// and only `status` mutates afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub order_id: i32,
    pub user_id: i32,
    pub status: OrderStatus,
    pub total_amount: i64,
    pub created_at: NaiveDateTime,
    pub items: Vec<OrderItem>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_status_reaches_cancelled() {
        for status in OrderStatus::Pending.reachable() {
            assert!(status.reachable().contains(&OrderStatus::Cancelled));
        }
    }
}
