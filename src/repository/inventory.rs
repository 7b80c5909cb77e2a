use crate::{
    config::InventoryTable,
    errors::RepositoryError,
    model::InventoryRecord,
};
use std::collections::HashMap;
use tokio::sync::OwnedRwLockWriteGuard;
use tracing::{error, info};

/// Single source of truth for available stock.
///
/// Every mutation goes through an [`InventoryTxn`] and carries the version the
/// caller last observed; a stale version is rejected with
/// [`RepositoryError::VersionConflict`] instead of overwriting a concurrent
/// purchase. The ledger never retries on the caller's behalf.
#[derive(Clone)]
pub struct InventoryLedger {
    records: InventoryTable,
}

impl InventoryLedger {
    pub fn new(records: InventoryTable) -> Self {
        Self { records }
    }

    /// Creates the stock record for a newly registered product.
    pub async fn register(
        &self,
        product_id: i32,
        initial_quantity: i32,
    ) -> Result<InventoryRecord, RepositoryError> {
        let mut records = self.records.write().await;

        if records.contains_key(&product_id) {
            error!("❌ Inventory already registered for product {product_id}");
            return Err(RepositoryError::AlreadyExists(format!(
                "inventory record for product {product_id}"
            )));
        }

        let record = InventoryRecord {
            product_id,
            quantity: initial_quantity,
            version: 1,
        };
        records.insert(product_id, record.clone());

        info!("📦 Registered inventory for product {product_id}: stock={initial_quantity}");
        Ok(record)
    }

    /// Current committed state of one product. Never blocks on other readers;
    /// the returned version goes stale the moment another unit of work
    /// commits, which is exactly what `reserve` detects.
    pub async fn snapshot(&self, product_id: i32) -> Result<InventoryRecord, RepositoryError> {
        self.records
            .read()
            .await
            .get(&product_id)
            .cloned()
            .ok_or(RepositoryError::NotFound)
    }

    /// Removes the record when its product leaves the catalog. Callers must
    /// have established that no order references the product.
    pub async fn remove(&self, product_id: i32) -> Result<(), RepositoryError> {
        self.records
            .write()
            .await
            .remove(&product_id)
            .map(|_| ())
            .ok_or(RepositoryError::NotFound)
    }

    /// Opens a unit of work over the inventory table. The write guard admits
    /// one committer at a time, so for any single product the sequence of
    /// committed versions is totally ordered.
    pub async fn begin(&self) -> InventoryTxn {
        InventoryTxn {
            guard: self.records.clone().write_owned().await,
            staged: HashMap::new(),
        }
    }
}

/// Staged-apply-then-commit unit of work.
///
/// `reserve` and `release` mutate a private overlay; `commit` folds the
/// overlay into the table in one step. Dropping the transaction without
/// committing discards the overlay, so no partial write from a failed unit of
/// work is ever observable.
pub struct InventoryTxn {
    guard: OwnedRwLockWriteGuard<HashMap<i32, InventoryRecord>>,
    staged: HashMap<i32, InventoryRecord>,
}

impl InventoryTxn {
    /// Reads one record through the overlay, so a transaction sees its own
    /// uncommitted writes.
    pub fn record(&self, product_id: i32) -> Result<InventoryRecord, RepositoryError> {
        self.staged
            .get(&product_id)
            .or_else(|| self.guard.get(&product_id))
            .cloned()
            .ok_or(RepositoryError::NotFound)
    }

    /// Decrements stock iff the stored version equals `expected_version` and
    /// enough stock remains. The stock check comes first: a short quantity is
    /// reported as `InsufficientStock` regardless of the version check.
    pub fn reserve(
        &mut self,
        product_id: i32,
        quantity: i32,
        expected_version: i64,
    ) -> Result<i64, RepositoryError> {
        let mut record = self.record(product_id)?;

        if record.quantity < quantity {
            error!(
                "❌ Not enough stock for product {product_id}: requested={quantity}, available={}",
                record.quantity
            );
            return Err(RepositoryError::InsufficientStock {
                product_id,
                requested: quantity,
                available: record.quantity,
            });
        }

        if record.version != expected_version {
            error!(
                "❌ Version conflict on product {product_id}: expected={expected_version}, stored={}",
                record.version
            );
            return Err(RepositoryError::VersionConflict { product_id });
        }

        record.quantity -= quantity;
        record.version += 1;
        let new_version = record.version;
        self.staged.insert(product_id, record);

        info!("🔒 Reserved {quantity} of product {product_id} (version {new_version})");
        Ok(new_version)
    }

    /// Symmetric increment, used to restore stock on cancellation. An
    /// increment is always valid, so only the version check can fail.
    pub fn release(
        &mut self,
        product_id: i32,
        quantity: i32,
        expected_version: i64,
    ) -> Result<i64, RepositoryError> {
        let mut record = self.record(product_id)?;

        if record.version != expected_version {
            error!(
                "❌ Version conflict on product {product_id}: expected={expected_version}, stored={}",
                record.version
            );
            return Err(RepositoryError::VersionConflict { product_id });
        }

        record.quantity += quantity;
        record.version += 1;
        let new_version = record.version;
        self.staged.insert(product_id, record);

        info!("🔓 Released {quantity} of product {product_id} (version {new_version})");
        Ok(new_version)
    }

    /// Applies every staged mutation atomically and closes the unit of work.
    pub fn commit(mut self) {
        for (product_id, record) in self.staged.drain() {
            self.guard.insert(product_id, record);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Database;

    fn ledger() -> InventoryLedger {
        InventoryLedger::new(Database::new().inventory())
    }

    #[tokio::test]
    async fn reserve_decrements_and_advances_version() {
        let ledger = ledger();
        ledger.register(1, 10).await.unwrap();

        let snap = ledger.snapshot(1).await.unwrap();
        let mut txn = ledger.begin().await;
        let new_version = txn.reserve(1, 4, snap.version).unwrap();
        txn.commit();

        let after = ledger.snapshot(1).await.unwrap();
        assert_eq!(after.quantity, 6);
        assert_eq!(after.version, new_version);
        assert!(after.version > snap.version);
    }

    #[tokio::test]
    async fn stale_version_is_rejected_even_with_stock_to_spare() {
        let ledger = ledger();
        ledger.register(1, 10).await.unwrap();

        let stale = ledger.snapshot(1).await.unwrap();

        let mut txn = ledger.begin().await;
        txn.reserve(1, 1, stale.version).unwrap();
        txn.commit();

        let mut txn = ledger.begin().await;
        let err = txn.reserve(1, 1, stale.version).unwrap_err();
        assert!(matches!(err, RepositoryError::VersionConflict { product_id: 1 }));

        // Nothing committed by the failed attempt.
        drop(txn);
        assert_eq!(ledger.snapshot(1).await.unwrap().quantity, 9);
    }

    #[tokio::test]
    async fn insufficient_stock_wins_over_version_conflict() {
        let ledger = ledger();
        ledger.register(1, 2).await.unwrap();

        let mut txn = ledger.begin().await;
        // Both checks would fail; the stock check is reported.
        let err = txn.reserve(1, 5, 999).unwrap_err();
        assert!(matches!(
            err,
            RepositoryError::InsufficientStock {
                product_id: 1,
                requested: 5,
                available: 2,
            }
        ));
    }

    #[tokio::test]
    async fn release_restores_stock_and_checks_version() {
        let ledger = ledger();
        ledger.register(1, 5).await.unwrap();

        let snap = ledger.snapshot(1).await.unwrap();
        let mut txn = ledger.begin().await;
        txn.reserve(1, 5, snap.version).unwrap();
        txn.commit();

        let current = ledger.snapshot(1).await.unwrap();
        let mut txn = ledger.begin().await;
        assert!(matches!(
            txn.release(1, 5, current.version - 1),
            Err(RepositoryError::VersionConflict { .. })
        ));
        txn.release(1, 5, current.version).unwrap();
        txn.commit();

        assert_eq!(ledger.snapshot(1).await.unwrap().quantity, 5);
    }

    #[tokio::test]
    async fn dropped_txn_leaves_no_trace() {
        let ledger = ledger();
        ledger.register(1, 10).await.unwrap();
        ledger.register(2, 10).await.unwrap();

        let before_1 = ledger.snapshot(1).await.unwrap();
        let before_2 = ledger.snapshot(2).await.unwrap();

        let mut txn = ledger.begin().await;
        txn.reserve(1, 3, before_1.version).unwrap();
        txn.reserve(2, 3, before_2.version).unwrap();
        drop(txn);

        assert_eq!(ledger.snapshot(1).await.unwrap(), before_1);
        assert_eq!(ledger.snapshot(2).await.unwrap(), before_2);
    }

    #[tokio::test]
    async fn txn_sees_its_own_writes() {
        let ledger = ledger();
        ledger.register(1, 10).await.unwrap();

        let snap = ledger.snapshot(1).await.unwrap();
        let mut txn = ledger.begin().await;
        let v1 = txn.reserve(1, 2, snap.version).unwrap();
        assert_eq!(txn.record(1).unwrap().quantity, 8);
        let v2 = txn.reserve(1, 2, v1).unwrap();
        assert!(v2 > v1);
        txn.commit();

        assert_eq!(ledger.snapshot(1).await.unwrap().quantity, 6);
    }
}
