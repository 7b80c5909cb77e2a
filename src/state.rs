use crate::{
    config::{Config, Database},
    di::DependenciesInject,
};
use anyhow::Result;

#[derive(Debug, Clone)]
pub struct AppState {
    pub di: DependenciesInject,
    pub config: Config,
}

impl AppState {
    pub fn new() -> Result<Self> {
        let config = Config::init()?;
        let db = Database::new();
        let di = DependenciesInject::new(db);

        Ok(Self { di, config })
    }
}
