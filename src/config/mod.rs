mod database;
mod myconfig;

pub use self::database::{Database, InventoryTable};
pub use self::myconfig::Config;
