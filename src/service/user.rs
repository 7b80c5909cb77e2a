use crate::{
    abstract_trait::{DynUserRepository, UserServiceTrait},
    domain::{
        requests::CreateUserRequest,
        responses::{ApiResponse, UserResponse},
    },
    errors::{RepositoryError, ServiceError},
    utils::format_validation_errors,
};
use async_trait::async_trait;
use tracing::{error, info};
use validator::Validate;

pub struct UserService {
    repository: DynUserRepository,
}

impl UserService {
    pub fn new(repository: DynUserRepository) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl UserServiceTrait for UserService {
    async fn create_user(
        &self,
        req: &CreateUserRequest,
    ) -> Result<ApiResponse<UserResponse>, ServiceError> {
        info!("👤 Creating user: {}", req.email);

        req.validate()
            .map_err(|e| ServiceError::Validation(format_validation_errors(&e)))?;

        let user = self.repository.create_user(req).await?;

        info!("✅ User created with ID={}", user.user_id);

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "User created successfully".to_string(),
            data: UserResponse::from(user),
        })
    }

    async fn find_all(&self) -> Result<ApiResponse<Vec<UserResponse>>, ServiceError> {
        let users = self.repository.find_all().await?;

        info!("📋 Fetched {} user(s)", users.len());

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Users fetched successfully".to_string(),
            data: users.into_iter().map(UserResponse::from).collect(),
        })
    }

    async fn find_by_id(&self, user_id: i32) -> Result<ApiResponse<UserResponse>, ServiceError> {
        let user = match self.repository.find_by_id(user_id).await? {
            Some(user) => user,
            None => {
                error!("❌ User not found with ID={user_id}");
                return Err(ServiceError::Repo(RepositoryError::NotFound));
            }
        };

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "User fetched successfully".to_string(),
            data: UserResponse::from(user),
        })
    }

    async fn delete_user(&self, user_id: i32) -> Result<ApiResponse<()>, ServiceError> {
        info!("🗑️ Deleting user ID={user_id}");

        self.repository.delete_user(user_id).await?;

        info!("✅ User deleted with ID={user_id}");

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "User deleted successfully".to_string(),
            data: (),
        })
    }
}
