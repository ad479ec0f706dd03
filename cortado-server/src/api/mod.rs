//! API 路由模块
//!
//! # 结构
//!
//! - [`health`] - 健康检查
//! - [`menu`] - 菜单管理接口
//! - [`inventory`] - 库存管理接口
//! - [`orders`] - 订单接口 (下单走核心引擎)
//! - [`reports`] - 报表接口

pub mod health;
pub mod inventory;
pub mod menu;
pub mod orders;
pub mod reports;

// Re-export common types for handlers
pub use crate::utils::{AppError, AppResult};
