mod category;
mod order;
mod product;
mod review;
mod user;

pub use self::category::CategoryService;
pub use self::order::{OrderService, OrderServiceDeps};
pub use self::product::{ProductService, ProductServiceDeps};
pub use self::review::{ReviewService, ReviewServiceDeps};
pub use self::user::UserService;
