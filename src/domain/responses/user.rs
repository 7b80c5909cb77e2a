use crate::model::User;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: i32,
    pub full_name: String,
    pub email: String,
    #[serde(rename = "created_at")]
    pub created_at: String,
}

impl From<User> for UserResponse {
    fn from(value: User) -> Self {
        UserResponse {
            id: value.user_id,
            full_name: value.full_name,
            email: value.email,
            created_at: value.created_at.to_string(),
        }
    }
}
