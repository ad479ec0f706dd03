//! Menu API Handlers
//!
//! 纯 CRUD；配方里的原料 ID 此处不做引用检查，下单时才检查。

use axum::{
    Json,
    extract::{Path, State},
};

use crate::core::ServerState;
use crate::models::{MenuItem, MenuItemUpdate, RecipeLine};
use crate::utils::validation::{
    MAX_NAME_LEN, MAX_NOTE_LEN, MAX_SHORT_TEXT_LEN, validate_non_negative, validate_positive,
    validate_required_text,
};
use crate::utils::{AppError, AppResult};

fn validate_recipe(recipe: &[RecipeLine]) -> Result<(), AppError> {
    for line in recipe {
        validate_required_text(&line.ingredient_id, "recipe.ingredient_id", MAX_SHORT_TEXT_LEN)?;
        validate_positive(line.quantity, "recipe.quantity")?;
    }
    Ok(())
}

/// GET /api/menu - 获取所有商品
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<MenuItem>>> {
    Ok(Json(state.catalog.list()))
}

/// GET /api/menu/:id - 获取单个商品
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<MenuItem>> {
    let item = state
        .catalog
        .get(&id)
        .ok_or_else(|| AppError::not_found(format!("Menu item {id} not found")))?;
    Ok(Json(item))
}

/// POST /api/menu - 创建商品
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<MenuItem>,
) -> AppResult<Json<MenuItem>> {
    validate_required_text(&payload.id, "id", MAX_SHORT_TEXT_LEN)?;
    validate_required_text(&payload.name, "name", MAX_NAME_LEN)?;
    if payload.description.len() > MAX_NOTE_LEN {
        return Err(AppError::validation("description is too long"));
    }
    validate_non_negative(payload.price, "price")?;
    validate_recipe(&payload.recipe)?;

    let item = state.catalog.create(payload)?;
    Ok(Json(item))
}

/// PUT /api/menu/:id - 更新商品 (整体替换可变字段)
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<MenuItemUpdate>,
) -> AppResult<Json<MenuItem>> {
    validate_required_text(&payload.name, "name", MAX_NAME_LEN)?;
    if payload.description.len() > MAX_NOTE_LEN {
        return Err(AppError::validation("description is too long"));
    }
    validate_non_negative(payload.price, "price")?;
    validate_recipe(&payload.recipe)?;

    let item = state.catalog.update(&id, payload)?;
    Ok(Json(item))
}

/// DELETE /api/menu/:id - 删除商品
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<bool>> {
    let deleted = state.catalog.delete(&id)?;
    if !deleted {
        return Err(AppError::not_found(format!("Menu item {id} not found")));
    }
    Ok(Json(true))
}
