mod category;
mod inventory;
mod order;
mod product;
mod review;
mod user;

pub use self::category::CategoryRepository;
pub use self::inventory::{InventoryLedger, InventoryTxn};
pub use self::order::OrderRepository;
pub use self::product::ProductRepository;
pub use self::review::ReviewRepository;
pub use self::user::UserRepository;
