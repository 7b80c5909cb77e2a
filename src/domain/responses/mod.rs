mod api;
mod category;
mod order;
mod product;
mod review;
mod user;

pub use self::api::ApiResponse;
pub use self::category::CategoryResponse;
pub use self::order::{OrderItemResponse, OrderResponse};
pub use self::product::ProductResponse;
pub use self::review::ReviewResponse;
pub use self::user::UserResponse;
