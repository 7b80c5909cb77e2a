mod command;
mod query;

use self::command::{ProductCommandService, ProductCommandServiceDeps};
use self::query::ProductQueryService;
use crate::{
    abstract_trait::{
        DynCategoryRepository, DynOrderQueryRepository, DynProductCommandRepository,
        DynProductCommandService, DynProductQueryRepository, DynProductQueryService,
    },
    repository::InventoryLedger,
};
use std::{fmt, sync::Arc};

#[derive(Clone)]
pub struct ProductService {
    pub query: DynProductQueryService,
    pub command: DynProductCommandService,
}

pub struct ProductServiceDeps {
    pub query: DynProductQueryRepository,
    pub command: DynProductCommandRepository,
    pub category: DynCategoryRepository,
    pub order_query: DynOrderQueryRepository,
    pub ledger: InventoryLedger,
}

impl fmt::Debug for ProductService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProductService")
            .field("query", &"Arc<dyn ProductQueryServiceTrait>")
            .field("command", &"Arc<dyn ProductCommandServiceTrait>")
            .finish()
    }
}

impl ProductService {
    pub fn new(deps: ProductServiceDeps) -> Self {
        let ProductServiceDeps {
            query,
            command,
            category,
            order_query,
            ledger,
        } = deps;

        let query_service = Arc::new(ProductQueryService::new(query.clone(), ledger.clone()))
            as DynProductQueryService;

        let command_deps = ProductCommandServiceDeps {
            command,
            query,
            category,
            order_query,
            ledger,
        };

        let command_service =
            Arc::new(ProductCommandService::new(command_deps)) as DynProductCommandService;

        Self {
            query: query_service,
            command: command_service,
        }
    }
}
