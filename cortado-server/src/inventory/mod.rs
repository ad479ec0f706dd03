//! 库存账本 - check-and-deduct 的原子性就在这里
//!
//! 整个库存集合只有一个互斥域：订单扣减和直接库存编辑都必须拿到同一把
//! 锁，两个并发订单不可能都用过期的余量通过检查。
//!
//! 扣减协议 (锁内执行):
//!
//! 1. 按需求顺序逐项检查 `required <= available` (缺失原料按 0 计);
//! 2. 任何一项不满足 -> 整体失败，不做任何扣减，报告第一个不满足的原料;
//! 3. 全部满足 -> 在副本上扣减，先落盘再替换内存视图;
//! 4. 落盘失败 -> 内存视图保持不变，错误上报调用方。

use std::sync::Arc;

use parking_lot::Mutex;

use crate::models::{InventoryItem, InventoryItemUpdate};
use crate::store::{CollectionStore, StoreError};

/// One ingredient's share of an order's demand vector.
///
/// Demand is ordered (recipe-line order); the first entry that fails the
/// availability check is the one reported.
#[derive(Debug, Clone, PartialEq)]
pub struct Demand {
    pub ingredient_id: String,
    pub quantity: f64,
}

#[derive(Debug, thiserror::Error)]
pub enum InventoryError {
    /// The demand exceeded what is on hand. `available` is the quantity at
    /// the moment of the failed check; nothing was deducted.
    #[error("Insufficient inventory for '{name}': required {required} {unit}, available {available} {unit}")]
    Insufficient {
        ingredient_id: String,
        name: String,
        required: f64,
        available: f64,
        unit: String,
    },

    #[error("Ingredient not found: {0}")]
    NotFound(String),

    #[error("Ingredient already exists: {0}")]
    AlreadyExists(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Read-write view over the inventory collection.
///
/// All mutation goes through one [`Mutex`] held for the duration of each
/// call, including the durable write, so check-and-deduct is atomic with
/// respect to every other inventory mutation.
pub struct InventoryLedger {
    store: Arc<dyn CollectionStore<InventoryItem>>,
    items: Mutex<Vec<InventoryItem>>,
}

impl InventoryLedger {
    /// Load the persisted collection and wrap it in a ledger.
    pub fn open(store: Arc<dyn CollectionStore<InventoryItem>>) -> Result<Self, StoreError> {
        let items = store.load()?;
        Ok(Self {
            store,
            items: Mutex::new(items),
        })
    }

    /// Non-authoritative read of one ingredient's quantity.
    pub fn peek(&self, ingredient_id: &str) -> Option<f64> {
        self.items
            .lock()
            .iter()
            .find(|i| i.id == ingredient_id)
            .map(|i| i.quantity)
    }

    pub fn list(&self) -> Vec<InventoryItem> {
        self.items.lock().clone()
    }

    pub fn get(&self, ingredient_id: &str) -> Option<InventoryItem> {
        self.items
            .lock()
            .iter()
            .find(|i| i.id == ingredient_id)
            .cloned()
    }

    /// Atomically verify the whole demand vector and deduct it.
    ///
    /// All ingredients are validated before any is mutated; equality at
    /// the boundary (`required == available`) passes. On success the full
    /// updated collection is durably written before the in-memory view is
    /// replaced.
    pub fn check_and_deduct(&self, demand: &[Demand]) -> Result<(), InventoryError> {
        let mut guard = self.items.lock();

        for d in demand {
            let (available, name, unit) = match guard.iter().find(|i| i.id == d.ingredient_id) {
                Some(item) => (item.quantity, item.name.clone(), item.unit.clone()),
                // Absent ingredient counts as zero on hand; it has no unit
                // label of its own, so the message gets a neutral one
                None => (0.0, d.ingredient_id.clone(), "units".to_string()),
            };
            if d.quantity > available {
                return Err(InventoryError::Insufficient {
                    ingredient_id: d.ingredient_id.clone(),
                    name,
                    required: d.quantity,
                    available,
                    unit,
                });
            }
        }

        let mut next = guard.clone();
        for d in demand {
            if let Some(item) = next.iter_mut().find(|i| i.id == d.ingredient_id) {
                item.quantity -= d.quantity;
            }
        }

        // Durable write first; a failed save leaves the in-memory view and
        // the persisted document both on the pre-deduction state.
        self.store.save(&next)?;
        *guard = next;
        Ok(())
    }

    pub fn create(&self, item: InventoryItem) -> Result<InventoryItem, InventoryError> {
        let mut guard = self.items.lock();
        if guard.iter().any(|i| i.id == item.id) {
            return Err(InventoryError::AlreadyExists(item.id));
        }

        let mut next = guard.clone();
        next.push(item.clone());
        self.store.save(&next)?;
        *guard = next;
        Ok(item)
    }

    pub fn update(
        &self,
        ingredient_id: &str,
        changes: InventoryItemUpdate,
    ) -> Result<InventoryItem, InventoryError> {
        let mut guard = self.items.lock();
        let mut next = guard.clone();
        let item = next
            .iter_mut()
            .find(|i| i.id == ingredient_id)
            .ok_or_else(|| InventoryError::NotFound(ingredient_id.to_string()))?;

        item.name = changes.name;
        item.quantity = changes.quantity;
        item.unit = changes.unit;
        let updated = item.clone();

        self.store.save(&next)?;
        *guard = next;
        Ok(updated)
    }

    pub fn delete(&self, ingredient_id: &str) -> Result<bool, InventoryError> {
        let mut guard = self.items.lock();
        let mut next = guard.clone();
        let before = next.len();
        next.retain(|i| i.id != ingredient_id);
        if next.len() == before {
            return Ok(false);
        }

        self.store.save(&next)?;
        *guard = next;
        Ok(true)
    }
}
