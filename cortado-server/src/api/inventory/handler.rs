//! Inventory API Handlers
//!
//! 直接库存编辑与订单扣减共享同一个互斥域，不会与 check-and-deduct
//! 交错执行。

use axum::{
    Json,
    extract::{Path, State},
};

use crate::core::ServerState;
use crate::models::{InventoryItem, InventoryItemUpdate};
use crate::utils::validation::{
    MAX_NAME_LEN, MAX_SHORT_TEXT_LEN, validate_non_negative, validate_required_text,
};
use crate::utils::{AppError, AppResult};

/// GET /api/inventory - 获取所有原料
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<InventoryItem>>> {
    Ok(Json(state.inventory.list()))
}

/// GET /api/inventory/:id - 获取单个原料
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<InventoryItem>> {
    let item = state
        .inventory
        .get(&id)
        .ok_or_else(|| AppError::not_found(format!("Ingredient {id} not found")))?;
    Ok(Json(item))
}

/// POST /api/inventory - 创建原料
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<InventoryItem>,
) -> AppResult<Json<InventoryItem>> {
    validate_required_text(&payload.id, "id", MAX_SHORT_TEXT_LEN)?;
    validate_required_text(&payload.name, "name", MAX_NAME_LEN)?;
    validate_required_text(&payload.unit, "unit", MAX_SHORT_TEXT_LEN)?;
    validate_non_negative(payload.quantity, "quantity")?;

    let item = state.inventory.create(payload)?;
    Ok(Json(item))
}

/// PUT /api/inventory/:id - 更新原料 (整体替换可变字段)
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<InventoryItemUpdate>,
) -> AppResult<Json<InventoryItem>> {
    validate_required_text(&payload.name, "name", MAX_NAME_LEN)?;
    validate_required_text(&payload.unit, "unit", MAX_SHORT_TEXT_LEN)?;
    validate_non_negative(payload.quantity, "quantity")?;

    let item = state.inventory.update(&id, payload)?;
    Ok(Json(item))
}

/// DELETE /api/inventory/:id - 删除原料
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<bool>> {
    let deleted = state.inventory.delete(&id)?;
    if !deleted {
        return Err(AppError::not_found(format!("Ingredient {id} not found")));
    }
    Ok(Json(true))
}
