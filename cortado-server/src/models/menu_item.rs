//! Menu item model

use serde::{Deserialize, Serialize};

/// 配方行 - (原料 ID, 单份用量)
///
/// 配方是有序的；不足库存报告时按配方行顺序取第一个不满足的原料。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeLine {
    /// 原料 ID，下单时才做引用检查 (编辑菜单时允许不存在)
    pub ingredient_id: String,
    /// 每份商品消耗的原料量
    pub quantity: f64,
}

/// 菜单商品
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    /// 商品 ID (如 "latte")
    pub id: String,
    /// 商品名称
    pub name: String,
    /// 商品描述
    #[serde(default)]
    pub description: String,
    /// 单价 (>= 0)
    pub price: f64,
    /// 配方 - 有序的 (原料, 用量) 列表
    #[serde(default)]
    pub recipe: Vec<RecipeLine>,
}

/// Replacement payload for the mutable fields of a menu item.
#[derive(Debug, Clone, Deserialize)]
pub struct MenuItemUpdate {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    #[serde(default)]
    pub recipe: Vec<RecipeLine>,
}
