mod command;
mod query;

use std::sync::Arc;

use self::command::ProductCommandRepository;
use self::query::ProductQueryRepository;

use crate::{
    abstract_trait::{DynProductCommandRepository, DynProductQueryRepository},
    config::Database,
};

#[derive(Clone)]
pub struct ProductRepository {
    pub query: DynProductQueryRepository,
    pub command: DynProductCommandRepository,
}

impl ProductRepository {
    pub fn new(db: Database) -> Self {
        let query = Arc::new(ProductQueryRepository::new(db.clone())) as DynProductQueryRepository;

        let command =
            Arc::new(ProductCommandRepository::new(db.clone())) as DynProductCommandRepository;

        Self { query, command }
    }
}
