use crate::{
    abstract_trait::CategoryRepositoryTrait,
    config::Database,
    domain::requests::CreateCategoryRequest,
    errors::RepositoryError,
    model::Category,
};
use async_trait::async_trait;
use tracing::{error, info};

pub struct CategoryRepository {
    db: Database,
}

impl CategoryRepository {
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CategoryRepositoryTrait for CategoryRepository {
    async fn create_category(
        &self,
        req: &CreateCategoryRequest,
    ) -> Result<Category, RepositoryError> {
        let mut categories = self.db.categories().write().await;

        if categories.values().any(|c| c.name == req.name) {
            error!("❌ Category already exists: {}", req.name);
            return Err(RepositoryError::AlreadyExists(format!(
                "Category already exists: {}",
                req.name
            )));
        }

        let category = Category {
            category_id: self.db.next_category_id(),
            name: req.name.clone(),
            description: req.description.clone(),
        };
        categories.insert(category.category_id, category.clone());

        info!("✅ Created category ID {}", category.category_id);
        Ok(category)
    }

    async fn find_all(&self) -> Result<Vec<Category>, RepositoryError> {
        let mut categories: Vec<Category> =
            self.db.categories().read().await.values().cloned().collect();
        categories.sort_by_key(|c| c.category_id);
        Ok(categories)
    }

    async fn find_by_id(&self, category_id: i32) -> Result<Option<Category>, RepositoryError> {
        Ok(self.db.categories().read().await.get(&category_id).cloned())
    }

    async fn delete_category(&self, category_id: i32) -> Result<(), RepositoryError> {
        self.db
            .categories()
            .write()
            .await
            .remove(&category_id)
            .map(|_| ())
            .ok_or(RepositoryError::NotFound)
    }
}
