//! Order model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 订单状态
///
/// 生命周期: open -> closed (显式 close 操作, 不回滚库存)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Open,
    Closed,
}

/// 订单行 - 商品 ID + 数量
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLine {
    pub product_id: String,
    /// 数量 (> 0, 允许小数)
    pub quantity: f64,
}

/// 订单
///
/// 仅在库存扣减成功之后由 [`crate::orders::OrderProcessor`] 创建。
/// 原料需求在创建时一次性解析，之后不再重算。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// 订单 ID (系统生成, uuid v4)
    pub id: String,
    /// 顾客姓名
    pub customer_name: String,
    /// 订单行
    pub lines: Vec<OrderLine>,
    /// 状态: open | closed
    pub status: OrderStatus,
    /// 创建时间
    pub created_at: DateTime<Utc>,
}

/// Replacement payload for the mutable fields of an order.
///
/// Updating an order does NOT recompute or reverse its inventory
/// deduction. That is a documented contract, not an oversight.
#[derive(Debug, Clone, Deserialize)]
pub struct OrderUpdate {
    pub customer_name: String,
    pub lines: Vec<OrderLine>,
}
