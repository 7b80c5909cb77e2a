use crate::{
    abstract_trait::{DynProductQueryRepository, ProductQueryServiceTrait},
    domain::responses::{ApiResponse, ProductResponse},
    errors::{RepositoryError, ServiceError},
    model::Product,
    repository::InventoryLedger,
};
use async_trait::async_trait;
use tracing::{error, info};

pub struct ProductQueryService {
    pub query: DynProductQueryRepository,
    pub ledger: InventoryLedger,
}

impl ProductQueryService {
    pub fn new(query: DynProductQueryRepository, ledger: InventoryLedger) -> Self {
        Self { query, ledger }
    }

    async fn with_stock(
        &self,
        products: Vec<Product>,
    ) -> Result<Vec<ProductResponse>, ServiceError> {
        let mut responses = Vec::with_capacity(products.len());
        for product in products {
            let record = self.ledger.snapshot(product.product_id).await?;
            responses.push(ProductResponse::new(product, &record));
        }
        Ok(responses)
    }

    fn ok(message: &str, data: Vec<ProductResponse>) -> ApiResponse<Vec<ProductResponse>> {
        ApiResponse {
            status: "success".to_string(),
            message: message.to_string(),
            data,
        }
    }
}

#[async_trait]
impl ProductQueryServiceTrait for ProductQueryService {
    async fn find_all(&self) -> Result<ApiResponse<Vec<ProductResponse>>, ServiceError> {
        let products = self.query.find_all().await?;

        info!("📋 Fetched {} product(s)", products.len());

        Ok(Self::ok(
            "Products fetched successfully",
            self.with_stock(products).await?,
        ))
    }

    async fn find_by_id(
        &self,
        product_id: i32,
    ) -> Result<ApiResponse<ProductResponse>, ServiceError> {
        let product = match self.query.find_by_id(product_id).await? {
            Some(product) => product,
            None => {
                error!("❌ Product not found with ID={product_id}");
                return Err(ServiceError::Repo(RepositoryError::NotFound));
            }
        };
        let record = self.ledger.snapshot(product_id).await?;

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Product fetched successfully".to_string(),
            data: ProductResponse::new(product, &record),
        })
    }

    async fn search_by_name(
        &self,
        name: &str,
    ) -> Result<ApiResponse<Vec<ProductResponse>>, ServiceError> {
        let products = self.query.search_by_name(name).await?;

        info!("🔍 Found {} product(s) matching '{name}'", products.len());

        Ok(Self::ok(
            "Products fetched successfully",
            self.with_stock(products).await?,
        ))
    }

    async fn find_by_price_range(
        &self,
        min: i64,
        max: i64,
    ) -> Result<ApiResponse<Vec<ProductResponse>>, ServiceError> {
        if min > max {
            return Err(ServiceError::Validation(vec![format!(
                "Invalid price range: {min} > {max}"
            )]));
        }

        let products = self.query.find_by_price_range(min, max).await?;

        Ok(Self::ok(
            "Products fetched successfully",
            self.with_stock(products).await?,
        ))
    }

    async fn find_by_category(
        &self,
        category_id: i32,
    ) -> Result<ApiResponse<Vec<ProductResponse>>, ServiceError> {
        let products = self.query.find_by_category(category_id).await?;

        Ok(Self::ok(
            "Products fetched successfully",
            self.with_stock(products).await?,
        ))
    }

    async fn find_available(&self) -> Result<ApiResponse<Vec<ProductResponse>>, ServiceError> {
        let products = self.query.find_all().await?;
        let mut responses = self.with_stock(products).await?;
        responses.retain(|p| p.stock_quantity > 0);

        info!("📋 {} product(s) currently in stock", responses.len());

        Ok(Self::ok("Available products fetched successfully", responses))
    }
}
