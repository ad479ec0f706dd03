//! 数据模型 - 三个持久化集合的记录类型
//!
//! # 模块结构
//!
//! - [`InventoryItem`] - 库存原料 (ingredient)
//! - [`MenuItem`] / [`RecipeLine`] - 菜单商品及其配方
//! - [`Order`] / [`OrderLine`] / [`OrderStatus`] - 订单

pub mod inventory_item;
pub mod menu_item;
pub mod order;

pub use inventory_item::{InventoryItem, InventoryItemUpdate};
pub use menu_item::{MenuItem, MenuItemUpdate, RecipeLine};
pub use order::{Order, OrderLine, OrderStatus, OrderUpdate};
