use crate::{
    abstract_trait::OrderQueryRepositoryTrait,
    config::Database,
    errors::RepositoryError,
    model::Order,
};
use async_trait::async_trait;

pub struct OrderQueryRepository {
    db: Database,
}

impl OrderQueryRepository {
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

#[async_trait]
impl OrderQueryRepositoryTrait for OrderQueryRepository {
    async fn find_all(&self) -> Result<Vec<Order>, RepositoryError> {
        let mut orders: Vec<Order> = self.db.orders().read().await.values().cloned().collect();
        orders.sort_by_key(|o| o.order_id);
        Ok(orders)
    }

    async fn find_by_id(&self, order_id: i32) -> Result<Option<Order>, RepositoryError> {
        Ok(self.db.orders().read().await.get(&order_id).cloned())
    }

    async fn find_by_user(&self, user_id: i32) -> Result<Vec<Order>, RepositoryError> {
        let mut orders: Vec<Order> = self
            .db
            .orders()
            .read()
            .await
            .values()
            .filter(|o| o.user_id == user_id)
            .cloned()
            .collect();
        orders.sort_by_key(|o| o.order_id);
        Ok(orders)
    }

    async fn exists_for_product(&self, product_id: i32) -> Result<bool, RepositoryError> {
        Ok(self
            .db
            .orders()
            .read()
            .await
            .values()
            .any(|o| o.items.iter().any(|i| i.product_id == product_id)))
    }
}
