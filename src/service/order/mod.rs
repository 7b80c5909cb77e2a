mod command;
mod query;

use self::command::{OrderCommandService, OrderCommandServiceDeps};
use self::query::OrderQueryService;
use crate::{
    abstract_trait::{
        DynOrderCommandRepository, DynOrderCommandService, DynOrderQueryRepository,
        DynOrderQueryService, DynProductQueryRepository, DynUserRepository,
    },
    repository::InventoryLedger,
};
use std::{fmt, sync::Arc};

#[derive(Clone)]
pub struct OrderService {
    pub query: DynOrderQueryService,
    pub command: DynOrderCommandService,
}

pub struct OrderServiceDeps {
    pub query: DynOrderQueryRepository,
    pub command: DynOrderCommandRepository,
    pub product_query: DynProductQueryRepository,
    pub user_query: DynUserRepository,
    pub ledger: InventoryLedger,
}

impl fmt::Debug for OrderService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OrderService")
            .field("query", &"Arc<dyn OrderQueryServiceTrait>")
            .field("command", &"Arc<dyn OrderCommandServiceTrait>")
            .finish()
    }
}

impl OrderService {
    pub fn new(deps: OrderServiceDeps) -> Self {
        let OrderServiceDeps {
            query,
            command,
            product_query,
            user_query,
            ledger,
        } = deps;

        let query_service = Arc::new(OrderQueryService::new(query.clone())) as DynOrderQueryService;

        let command_deps = OrderCommandServiceDeps {
            user_query,
            product_query,
            command,
            query,
            ledger,
        };

        let command_service =
            Arc::new(OrderCommandService::new(command_deps)) as DynOrderCommandService;

        Self {
            query: query_service,
            command: command_service,
        }
    }
}
