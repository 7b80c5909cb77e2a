use crate::{
    abstract_trait::ProductCommandRepositoryTrait,
    config::Database,
    domain::requests::{CreateProductRequest, UpdateProductRequest},
    errors::RepositoryError,
    model::Product,
};
use async_trait::async_trait;
use chrono::Utc;
use tracing::{error, info};

pub struct ProductCommandRepository {
    db: Database,
}

impl ProductCommandRepository {
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductCommandRepositoryTrait for ProductCommandRepository {
    async fn create_product(
        &self,
        req: &CreateProductRequest,
    ) -> Result<Product, RepositoryError> {
        let mut products = self.db.products().write().await;

        let product = Product {
            product_id: self.db.next_product_id(),
            name: req.name.clone(),
            description: req.description.clone(),
            price: req.price,
            category_ids: req.category_ids.clone(),
            created_at: Utc::now().naive_utc(),
        };
        products.insert(product.product_id, product.clone());

        info!("✅ Created product ID {}", product.product_id);
        Ok(product)
    }

    async fn update_product(
        &self,
        req: &UpdateProductRequest,
    ) -> Result<Product, RepositoryError> {
        let mut products = self.db.products().write().await;

        let product = products.get_mut(&req.id).ok_or_else(|| {
            error!("❌ Product not found with ID={}", req.id);
            RepositoryError::NotFound
        })?;

        product.name = req.name.clone();
        product.description = req.description.clone();
        product.price = req.price;
        product.category_ids = req.category_ids.clone();

        info!("🔄 Updated product ID {}", req.id);
        Ok(product.clone())
    }

    async fn delete_product(&self, product_id: i32) -> Result<(), RepositoryError> {
        self.db
            .products()
            .write()
            .await
            .remove(&product_id)
            .map(|_| ())
            .ok_or(RepositoryError::NotFound)
    }
}
