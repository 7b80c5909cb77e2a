use crate::{
    abstract_trait::{
        DynCategoryRepository, DynOrderQueryRepository, DynProductCommandRepository,
        DynProductQueryRepository, ProductCommandServiceTrait,
    },
    domain::{
        requests::{CreateProductRequest, UpdateProductRequest},
        responses::{ApiResponse, ProductResponse},
    },
    errors::{RepositoryError, ServiceError},
    repository::InventoryLedger,
    utils::format_validation_errors,
};
use async_trait::async_trait;
use tracing::{error, info};
use validator::Validate;

pub struct ProductCommandService {
    pub command: DynProductCommandRepository,
    pub query: DynProductQueryRepository,
    pub category: DynCategoryRepository,
    pub order_query: DynOrderQueryRepository,
    pub ledger: InventoryLedger,
}

pub struct ProductCommandServiceDeps {
    pub command: DynProductCommandRepository,
    pub query: DynProductQueryRepository,
    pub category: DynCategoryRepository,
    pub order_query: DynOrderQueryRepository,
    pub ledger: InventoryLedger,
}

impl ProductCommandService {
    pub fn new(deps: ProductCommandServiceDeps) -> Self {
        let ProductCommandServiceDeps {
            command,
            query,
            category,
            order_query,
            ledger,
        } = deps;

        Self {
            command,
            query,
            category,
            order_query,
            ledger,
        }
    }

    async fn check_categories(&self, category_ids: &[i32]) -> Result<(), ServiceError> {
        for category_id in category_ids {
            if self.category.find_by_id(*category_id).await?.is_none() {
                error!("❌ Category not found with ID={category_id}");
                return Err(ServiceError::Repo(RepositoryError::NotFound));
            }
        }
        Ok(())
    }
}

#[async_trait]
impl ProductCommandServiceTrait for ProductCommandService {
    async fn create_product(
        &self,
        req: &CreateProductRequest,
    ) -> Result<ApiResponse<ProductResponse>, ServiceError> {
        info!("📦 Creating product: {}", req.name);

        req.validate()
            .map_err(|e| ServiceError::Validation(format_validation_errors(&e)))?;

        self.check_categories(&req.category_ids).await?;

        let product = self.command.create_product(req).await?;
        let record = self
            .ledger
            .register(product.product_id, req.stock_quantity)
            .await?;

        info!(
            "✅ Product created with ID={} stock={}",
            product.product_id, record.quantity
        );

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Product created successfully".to_string(),
            data: ProductResponse::new(product, &record),
        })
    }

    async fn update_product(
        &self,
        req: &UpdateProductRequest,
    ) -> Result<ApiResponse<ProductResponse>, ServiceError> {
        info!("🔄 Updating product ID={}", req.id);

        req.validate()
            .map_err(|e| ServiceError::Validation(format_validation_errors(&e)))?;

        self.check_categories(&req.category_ids).await?;

        let product = self.command.update_product(req).await?;
        let record = self.ledger.snapshot(product.product_id).await?;

        info!("✅ Product updated with ID={}", product.product_id);

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Product updated successfully".to_string(),
            data: ProductResponse::new(product, &record),
        })
    }

    async fn delete_product(&self, product_id: i32) -> Result<ApiResponse<()>, ServiceError> {
        info!("🗑️ Deleting product ID={product_id}");

        if self.query.find_by_id(product_id).await?.is_none() {
            error!("❌ Product not found with ID={product_id}");
            return Err(ServiceError::Repo(RepositoryError::NotFound));
        }

        if self.order_query.exists_for_product(product_id).await? {
            error!("❌ Product {product_id} is referenced by existing orders");
            return Err(ServiceError::Repo(RepositoryError::Conflict(format!(
                "Product {product_id} is referenced by existing orders"
            ))));
        }

        self.command.delete_product(product_id).await?;
        self.ledger.remove(product_id).await?;

        info!("✅ Product deleted with ID={product_id}");

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Product deleted successfully".to_string(),
            data: (),
        })
    }
}
