mod category;
mod inventory;
mod order;
mod product;
mod review;
mod user;

pub use self::category::Category;
pub use self::inventory::InventoryRecord;
pub use self::order::{Order, OrderItem, OrderStatus};
pub use self::product::Product;
pub use self::review::Review;
pub use self::user::User;
