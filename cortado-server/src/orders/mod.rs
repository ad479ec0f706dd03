//! 订单模块 - 下单编排与订单仓库
//!
//! - [`OrderProcessor`] - 解析配方、聚合需求、原子扣减、落单
//! - [`OrderRepository`] - 订单集合的持久化仓库

mod processor;
mod repository;

pub use processor::OrderProcessor;
pub use repository::OrderRepository;

use crate::inventory::InventoryError;
use crate::store::StoreError;

#[derive(Debug, thiserror::Error)]
pub enum OrderError {
    #[error("Validation failed: {0}")]
    Validation(String),

    /// An ordered product id has no menu item. Inventory is never
    /// consulted for a partially-resolved order.
    #[error("Unknown product: {0}")]
    UnknownProduct(String),

    /// Propagated verbatim from the inventory ledger (insufficient stock
    /// or a failed deduction write).
    #[error(transparent)]
    Inventory(#[from] InventoryError),

    #[error("Order not found: {0}")]
    NotFound(String),

    #[error("Order already closed: {0}")]
    AlreadyClosed(String),

    /// The order write failed AFTER the deduction was durably applied.
    /// Reported distinctly so operators can reconcile; the order
    /// collection itself is unchanged in memory and on disk.
    #[error("Order persistence failed: {0}")]
    Persistence(StoreError),

    #[error(transparent)]
    Store(#[from] StoreError),
}
