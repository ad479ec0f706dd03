//! Orders API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use serde::Deserialize;

use crate::core::ServerState;
use crate::models::{Order, OrderLine, OrderUpdate};
use crate::utils::validation::{
    MAX_NAME_LEN, MAX_SHORT_TEXT_LEN, validate_positive, validate_required_text,
};
use crate::utils::{AppError, AppResult};

fn validate_lines(lines: &[OrderLine]) -> Result<(), AppError> {
    if lines.is_empty() {
        return Err(AppError::validation("order must contain at least one line"));
    }
    for line in lines {
        validate_required_text(&line.product_id, "lines.product_id", MAX_SHORT_TEXT_LEN)?;
        validate_positive(line.quantity, "lines.quantity")?;
    }
    Ok(())
}

/// 下单请求
#[derive(Debug, Deserialize)]
pub struct CreateOrderRequest {
    pub customer_name: String,
    pub lines: Vec<OrderLine>,
}

/// POST /api/orders - 下单 (核心路径)
///
/// 库存扣减成功后订单才会被写入；任何失败都不留下部分状态。
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<CreateOrderRequest>,
) -> AppResult<Json<Order>> {
    validate_required_text(&payload.customer_name, "customer_name", MAX_NAME_LEN)?;

    let order = state
        .processor
        .create_order(&payload.customer_name, &payload.lines)?;
    Ok(Json(order))
}

/// GET /api/orders - 获取所有订单
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Order>>> {
    Ok(Json(state.orders.list()))
}

/// GET /api/orders/:id - 获取单个订单
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Order>> {
    let order = state
        .orders
        .get(&id)
        .ok_or_else(|| AppError::not_found(format!("Order {id} not found")))?;
    Ok(Json(order))
}

/// PUT /api/orders/:id - 更新订单
///
/// 合同约定: 更新不重算也不回滚库存扣减。
/// 替换后的订单行仍须满足模型不变量 (非空, 数量 > 0)。
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<OrderUpdate>,
) -> AppResult<Json<Order>> {
    validate_required_text(&payload.customer_name, "customer_name", MAX_NAME_LEN)?;
    validate_lines(&payload.lines)?;

    let order = state.orders.update(&id, payload)?;
    Ok(Json(order))
}

/// DELETE /api/orders/:id - 删除订单
///
/// 合同约定: 删除不恢复库存。
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<bool>> {
    let deleted = state.orders.delete(&id)?;
    if !deleted {
        return Err(AppError::not_found(format!("Order {id} not found")));
    }
    Ok(Json(true))
}

/// POST /api/orders/:id/close - 关闭订单 (open -> closed)
pub async fn close(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Order>> {
    let order = state.processor.close_order(&id)?;
    Ok(Json(order))
}
