use serde::{Deserialize, Serialize};

/// Per-product stock record guarded by an optimistic version stamp.
///
/// `version` strictly increases on every successful reserve or release, and
/// changes if and only if `quantity` changes. A writer that presents a stale
/// version is rejected with a conflict instead of silently overwriting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryRecord {
    pub product_id: i32,
    pub quantity: i32,
    pub version: i64,
}
