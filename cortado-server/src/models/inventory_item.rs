//! Inventory item model

use serde::{Deserialize, Serialize};

/// 库存原料
///
/// `quantity` 永远 >= 0，由 [`crate::inventory::InventoryLedger`] 的
/// check-and-deduct 协议保证，不做事后修正。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryItem {
    /// 原料 ID (如 "milk", "espresso_shot")
    pub id: String,
    /// 显示名称
    pub name: String,
    /// 当前库存量 (允许小数, 如 150.5)
    pub quantity: f64,
    /// 计量单位 (如 "ml", "g", "unit")
    pub unit: String,
}

/// Replacement payload for the mutable fields of an inventory item.
///
/// Direct stock edits go through the same exclusive-access domain as
/// order deductions, but are otherwise unconstrained by order logic.
#[derive(Debug, Clone, Deserialize)]
pub struct InventoryItemUpdate {
    pub name: String,
    pub quantity: f64,
    pub unit: String,
}
