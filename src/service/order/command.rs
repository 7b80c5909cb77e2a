use crate::{
    abstract_trait::{
        DynOrderCommandRepository, DynOrderQueryRepository, DynProductQueryRepository,
        DynUserRepository, OrderCommandServiceTrait,
    },
    domain::{
        requests::{CreateOrderRequest, UpdateOrderStatusRequest},
        responses::{ApiResponse, OrderResponse},
    },
    errors::{RepositoryError, ServiceError},
    model::{OrderItem, OrderStatus},
    repository::InventoryLedger,
    utils::format_validation_errors,
};
use async_trait::async_trait;
use std::collections::HashMap;
use tracing::{error, info};
use validator::Validate;

pub struct OrderCommandService {
    pub user_query: DynUserRepository,
    pub product_query: DynProductQueryRepository,
    pub command: DynOrderCommandRepository,
    pub query: DynOrderQueryRepository,
    pub ledger: InventoryLedger,
}

pub struct OrderCommandServiceDeps {
    pub user_query: DynUserRepository,
    pub product_query: DynProductQueryRepository,
    pub command: DynOrderCommandRepository,
    pub query: DynOrderQueryRepository,
    pub ledger: InventoryLedger,
}

impl OrderCommandService {
    pub fn new(deps: OrderCommandServiceDeps) -> Self {
        let OrderCommandServiceDeps {
            user_query,
            product_query,
            command,
            query,
            ledger,
        } = deps;

        Self {
            user_query,
            product_query,
            command,
            query,
            ledger,
        }
    }
}

#[async_trait]
impl OrderCommandServiceTrait for OrderCommandService {
    async fn create_order(
        &self,
        req: &CreateOrderRequest,
    ) -> Result<ApiResponse<OrderResponse>, ServiceError> {
        info!(
            "🏗️ Creating order for user_id={} with {} item(s)",
            req.user_id,
            req.items.len()
        );

        req.validate()
            .map_err(|e| ServiceError::Validation(format_validation_errors(&e)))?;

        if self.user_query.find_by_id(req.user_id).await?.is_none() {
            error!("❌ User not found with ID={}", req.user_id);
            return Err(ServiceError::Repo(RepositoryError::NotFound));
        }

        // Price and inventory snapshots are read before the unit of work
        // opens; a concurrent commit in the gap surfaces as a version
        // conflict from the reserve below.
        let mut snapshots = Vec::with_capacity(req.items.len());
        for item in &req.items {
            let product = match self.product_query.find_by_id(item.product_id).await? {
                Some(product) => product,
                None => {
                    error!("❌ Product not found with ID={}", item.product_id);
                    return Err(ServiceError::Repo(RepositoryError::NotFound));
                }
            };
            let record = self.ledger.snapshot(item.product_id).await?;
            snapshots.push((item, product, record));
        }

        let mut txn = self.ledger.begin().await;
        // Versions advanced by this unit of work, so a product appearing in
        // two line items reserves against its own write instead of the
        // pre-transaction snapshot.
        let mut versions: HashMap<i32, i64> = HashMap::new();
        let mut items = Vec::with_capacity(snapshots.len());

        for (item, product, record) in snapshots {
            let expected = versions
                .get(&item.product_id)
                .copied()
                .unwrap_or(record.version);

            match txn.reserve(item.product_id, item.quantity, expected) {
                Ok(new_version) => {
                    versions.insert(item.product_id, new_version);
                    items.push(OrderItem {
                        product_id: item.product_id,
                        quantity: item.quantity,
                        price_at_purchase: product.price,
                    });
                }
                Err(e) => {
                    // Dropping the transaction discards every reservation
                    // staged so far, including earlier items of this request.
                    error!("❌ Aborting order for user_id={}: {e}", req.user_id);
                    return Err(ServiceError::Repo(e));
                }
            }
        }

        let total_amount = items
            .iter()
            .map(|i| i64::from(i.quantity) * i.price_at_purchase)
            .sum();

        let order = self
            .command
            .create_order(req.user_id, items, total_amount)
            .await?;
        txn.commit();

        info!(
            "✅ Order created with ID={} total={}",
            order.order_id, order.total_amount
        );

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Order created successfully".to_string(),
            data: OrderResponse::from(order),
        })
    }

    async fn update_order_status(
        &self,
        req: &UpdateOrderStatusRequest,
    ) -> Result<ApiResponse<OrderResponse>, ServiceError> {
        info!(
            "🔄 Updating order ID={} status to {}",
            req.order_id, req.status
        );

        req.validate()
            .map_err(|e| ServiceError::Validation(format_validation_errors(&e)))?;

        let order = match self.query.find_by_id(req.order_id).await? {
            Some(order) => order,
            None => {
                error!("❌ Order not found with ID={}", req.order_id);
                return Err(ServiceError::Repo(RepositoryError::NotFound));
            }
        };

        if !order.status.reachable().contains(&req.status) {
            return Err(ServiceError::Validation(vec![format!(
                "Cannot transition order {} from {} to {}",
                order.order_id, order.status, req.status
            )]));
        }

        let restock =
            req.status == OrderStatus::Cancelled && order.status != OrderStatus::Cancelled;

        if restock {
            // Restock and status change commit together or not at all.
            // Versions are read inside the unit of work, so these releases
            // cannot go stale.
            let mut txn = self.ledger.begin().await;
            for item in &order.items {
                let record = txn.record(item.product_id)?;
                txn.release(item.product_id, item.quantity, record.version)?;
            }
            let updated = self.command.update_status(req.order_id, req.status).await?;
            txn.commit();

            info!(
                "✅ Order {} cancelled, stock restored for {} item(s)",
                req.order_id,
                order.items.len()
            );

            return Ok(ApiResponse {
                status: "success".to_string(),
                message: "Order status updated successfully".to_string(),
                data: OrderResponse::from(updated),
            });
        }

        let updated = self.command.update_status(req.order_id, req.status).await?;

        info!("✅ Order {} status updated to {}", req.order_id, req.status);

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Order status updated successfully".to_string(),
            data: OrderResponse::from(updated),
        })
    }
}
