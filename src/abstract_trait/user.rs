use crate::{
    domain::{requests::CreateUserRequest, responses::{ApiResponse, UserResponse}},
    errors::{RepositoryError, ServiceError},
    model::User,
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynUserRepository = Arc<dyn UserRepositoryTrait + Send + Sync>;
pub type DynUserService = Arc<dyn UserServiceTrait + Send + Sync>;

#[async_trait]
pub trait UserRepositoryTrait {
    async fn create_user(&self, req: &CreateUserRequest) -> Result<User, RepositoryError>;
    async fn find_all(&self) -> Result<Vec<User>, RepositoryError>;
    async fn find_by_id(&self, user_id: i32) -> Result<Option<User>, RepositoryError>;
    async fn delete_user(&self, user_id: i32) -> Result<(), RepositoryError>;
}

#[async_trait]
pub trait UserServiceTrait {
    async fn create_user(
        &self,
        req: &CreateUserRequest,
    ) -> Result<ApiResponse<UserResponse>, ServiceError>;
    async fn find_all(&self) -> Result<ApiResponse<Vec<UserResponse>>, ServiceError>;
    async fn find_by_id(&self, user_id: i32) -> Result<ApiResponse<UserResponse>, ServiceError>;
    async fn delete_user(&self, user_id: i32) -> Result<ApiResponse<()>, ServiceError>;
}
