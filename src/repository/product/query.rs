use crate::{
    abstract_trait::ProductQueryRepositoryTrait,
    config::Database,
    errors::RepositoryError,
    model::Product,
};
use async_trait::async_trait;

pub struct ProductQueryRepository {
    db: Database,
}

impl ProductQueryRepository {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    async fn filter<F>(&self, predicate: F) -> Vec<Product>
    where
        F: Fn(&Product) -> bool,
    {
        let mut products: Vec<Product> = self
            .db
            .products()
            .read()
            .await
            .values()
            .filter(|p| predicate(p))
            .cloned()
            .collect();
        products.sort_by_key(|p| p.product_id);
        products
    }
}

#[async_trait]
impl ProductQueryRepositoryTrait for ProductQueryRepository {
    async fn find_all(&self) -> Result<Vec<Product>, RepositoryError> {
        Ok(self.filter(|_| true).await)
    }

    async fn find_by_id(&self, product_id: i32) -> Result<Option<Product>, RepositoryError> {
        Ok(self.db.products().read().await.get(&product_id).cloned())
    }

    async fn search_by_name(&self, name: &str) -> Result<Vec<Product>, RepositoryError> {
        let needle = name.to_lowercase();
        Ok(self
            .filter(|p| p.name.to_lowercase().contains(&needle))
            .await)
    }

    async fn find_by_price_range(
        &self,
        min: i64,
        max: i64,
    ) -> Result<Vec<Product>, RepositoryError> {
        Ok(self.filter(|p| p.price >= min && p.price <= max).await)
    }

    async fn find_by_category(&self, category_id: i32) -> Result<Vec<Product>, RepositoryError> {
        Ok(self
            .filter(|p| p.category_ids.contains(&category_id))
            .await)
    }
}
