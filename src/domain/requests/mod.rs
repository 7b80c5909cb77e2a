mod category;
mod order;
mod product;
mod review;
mod user;

pub use self::category::CreateCategoryRequest;
pub use self::order::{CreateOrderRequest, OrderItemRequest, UpdateOrderStatusRequest};
pub use self::product::{CreateProductRequest, UpdateProductRequest};
pub use self::review::CreateReviewRequest;
pub use self::user::CreateUserRequest;
