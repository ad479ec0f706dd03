//! 统一错误处理
//!
//! 提供应用级错误类型和响应结构：
//! - [`AppError`] - 应用错误枚举 (HTTP 边界)
//! - [`AppResponse`] - API 错误响应结构
//!
//! # 错误码规范
//!
//! | 错误码 | 状态码 | 分类 |
//! |--------|--------|------|
//! | E0002 | 400 | 验证失败 |
//! | E0003 | 404 | 资源不存在 |
//! | E0004 | 409 | 资源冲突 |
//! | E0005 | 422 | 库存不足 |
//! | E9002 | 500 | 存储错误 |
//!
//! 所有领域错误都在此处收敛为结构化响应，绝不让进程崩溃。

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tracing::error;

use crate::catalog::CatalogError;
use crate::inventory::InventoryError;
use crate::orders::OrderError;
use crate::store::StoreError;

/// API 错误响应结构
///
/// ```json
/// {
///   "code": "E0005",
///   "message": "Insufficient inventory for 'Whole milk': ...",
///   "details": { "ingredient_id": "milk", "required": 300.0, ... }
/// }
/// ```
#[derive(Debug, Serialize)]
pub struct AppResponse {
    /// 错误码
    pub code: String,
    /// 消息
    pub message: String,
    /// 结构化细节 (可选)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

/// 应用错误枚举
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Validation failed: {0}")]
    /// 验证失败 (400)
    Validation(String),

    #[error("Resource not found: {0}")]
    /// 资源不存在 (404)
    NotFound(String),

    #[error("Resource conflict: {0}")]
    /// 资源冲突 (409)
    Conflict(String),

    #[error("Insufficient inventory for '{name}': required {required} {unit}, available {available} {unit}")]
    /// 库存不足 (422) - 携带确切缺口
    InsufficientInventory {
        ingredient_id: String,
        name: String,
        required: f64,
        available: f64,
        unit: String,
    },

    #[error("Storage error: {0}")]
    /// 存储错误 (500)
    Storage(String),
}

pub type AppResult<T> = Result<T, AppError>;

// ========== Helper Constructors ==========

impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message, details) = match &self {
            AppError::Validation(msg) => {
                (StatusCode::BAD_REQUEST, "E0002", msg.clone(), None)
            }
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "E0003", msg.clone(), None),
            AppError::Conflict(msg) => (StatusCode::CONFLICT, "E0004", msg.clone(), None),
            AppError::InsufficientInventory {
                ingredient_id,
                required,
                available,
                unit,
                ..
            } => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "E0005",
                self.to_string(),
                Some(serde_json::json!({
                    "ingredient_id": ingredient_id,
                    "required": required,
                    "available": available,
                    "unit": unit,
                })),
            ),
            AppError::Storage(msg) => {
                error!(target: "storage", error = %msg, "Storage error occurred");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "E9002",
                    "Storage error".to_string(),
                    None,
                )
            }
        };

        let body = Json(AppResponse {
            code: code.to_string(),
            message,
            details,
        });

        (status, body).into_response()
    }
}

// ========== Domain error lifting ==========

impl From<StoreError> for AppError {
    fn from(e: StoreError) -> Self {
        AppError::Storage(e.to_string())
    }
}

impl From<InventoryError> for AppError {
    fn from(e: InventoryError) -> Self {
        match e {
            InventoryError::Insufficient {
                ingredient_id,
                name,
                required,
                available,
                unit,
            } => AppError::InsufficientInventory {
                ingredient_id,
                name,
                required,
                available,
                unit,
            },
            InventoryError::NotFound(id) => {
                AppError::NotFound(format!("Ingredient {id} not found"))
            }
            InventoryError::AlreadyExists(id) => {
                AppError::Conflict(format!("Ingredient {id} already exists"))
            }
            InventoryError::Store(e) => AppError::Storage(e.to_string()),
        }
    }
}

impl From<CatalogError> for AppError {
    fn from(e: CatalogError) -> Self {
        match e {
            CatalogError::NotFound(id) => AppError::NotFound(format!("Menu item {id} not found")),
            CatalogError::AlreadyExists(id) => {
                AppError::Conflict(format!("Menu item {id} already exists"))
            }
            CatalogError::Store(e) => AppError::Storage(e.to_string()),
        }
    }
}

impl From<OrderError> for AppError {
    fn from(e: OrderError) -> Self {
        match e {
            OrderError::Validation(msg) => AppError::Validation(msg),
            OrderError::UnknownProduct(id) => {
                AppError::NotFound(format!("Menu item {id} not found"))
            }
            OrderError::Inventory(inner) => inner.into(),
            OrderError::NotFound(id) => AppError::NotFound(format!("Order {id} not found")),
            OrderError::AlreadyClosed(id) => {
                AppError::Conflict(format!("Order {id} is already closed"))
            }
            OrderError::Persistence(e) => AppError::Storage(format!(
                "order persistence failed after inventory deduction: {e}"
            )),
            OrderError::Store(e) => AppError::Storage(e.to_string()),
        }
    }
}
