use crate::model::{Category, InventoryRecord, Order, Product, Review, User};
use std::{
    collections::HashMap,
    sync::{
        Arc,
        atomic::{AtomicI32, Ordering},
    },
};
use tokio::sync::RwLock;

pub type InventoryTable = Arc<RwLock<HashMap<i32, InventoryRecord>>>;

/// In-memory record store handed to every repository, playing the role a
/// connection pool would against a real database. Each table has its own
/// lock; the inventory table is additionally shared with the ledger, whose
/// write guard is the commit point for every stock mutation.
#[derive(Clone, Default)]
pub struct Database {
    inner: Arc<Tables>,
}

#[derive(Default)]
struct Tables {
    users: RwLock<HashMap<i32, User>>,
    categories: RwLock<HashMap<i32, Category>>,
    products: RwLock<HashMap<i32, Product>>,
    reviews: RwLock<HashMap<i32, Review>>,
    orders: RwLock<HashMap<i32, Order>>,
    inventory: InventoryTable,

    user_seq: AtomicI32,
    category_seq: AtomicI32,
    product_seq: AtomicI32,
    review_seq: AtomicI32,
    order_seq: AtomicI32,
}

impl Database {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn users(&self) -> &RwLock<HashMap<i32, User>> {
        &self.inner.users
    }

    pub fn categories(&self) -> &RwLock<HashMap<i32, Category>> {
        &self.inner.categories
    }

    pub fn products(&self) -> &RwLock<HashMap<i32, Product>> {
        &self.inner.products
    }

    pub fn reviews(&self) -> &RwLock<HashMap<i32, Review>> {
        &self.inner.reviews
    }

    pub fn orders(&self) -> &RwLock<HashMap<i32, Order>> {
        &self.inner.orders
    }

    pub fn inventory(&self) -> InventoryTable {
        Arc::clone(&self.inner.inventory)
    }

    pub fn next_user_id(&self) -> i32 {
        self.inner.user_seq.fetch_add(1, Ordering::Relaxed) + 1
    }

    pub fn next_category_id(&self) -> i32 {
        self.inner.category_seq.fetch_add(1, Ordering::Relaxed) + 1
    }

    pub fn next_product_id(&self) -> i32 {
        self.inner.product_seq.fetch_add(1, Ordering::Relaxed) + 1
    }

    pub fn next_review_id(&self) -> i32 {
        self.inner.review_seq.fetch_add(1, Ordering::Relaxed) + 1
    }

    pub fn next_order_id(&self) -> i32 {
        self.inner.order_seq.fetch_add(1, Ordering::Relaxed) + 1
    }
}
