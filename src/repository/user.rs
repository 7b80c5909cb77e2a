use crate::{
    abstract_trait::UserRepositoryTrait,
    config::Database,
    domain::requests::CreateUserRequest,
    errors::RepositoryError,
    model::User,
};
use async_trait::async_trait;
use chrono::Utc;
use tracing::{error, info};

pub struct UserRepository {
    db: Database,
}

impl UserRepository {
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepositoryTrait for UserRepository {
    async fn create_user(&self, req: &CreateUserRequest) -> Result<User, RepositoryError> {
        let mut users = self.db.users().write().await;

        if users.values().any(|u| u.email == req.email) {
            error!("❌ Email already in use: {}", req.email);
            return Err(RepositoryError::AlreadyExists(format!(
                "Email already in use: {}",
                req.email
            )));
        }

        let user = User {
            user_id: self.db.next_user_id(),
            full_name: req.full_name.clone(),
            email: req.email.clone(),
            created_at: Utc::now().naive_utc(),
        };
        users.insert(user.user_id, user.clone());

        info!("✅ Created user ID {}", user.user_id);
        Ok(user)
    }

    async fn find_all(&self) -> Result<Vec<User>, RepositoryError> {
        let mut users: Vec<User> = self.db.users().read().await.values().cloned().collect();
        users.sort_by_key(|u| u.user_id);
        Ok(users)
    }

    async fn find_by_id(&self, user_id: i32) -> Result<Option<User>, RepositoryError> {
        Ok(self.db.users().read().await.get(&user_id).cloned())
    }

    async fn delete_user(&self, user_id: i32) -> Result<(), RepositoryError> {
        self.db
            .users()
            .write()
            .await
            .remove(&user_id)
            .map(|_| ())
            .ok_or(RepositoryError::NotFound)
    }
}
