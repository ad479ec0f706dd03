//! Reports API Handlers
//!
//! 只读聚合，每次调用基于当前订单 + 菜单状态重算，不缓存。

use axum::{Json, extract::State};

use crate::core::ServerState;
use crate::reports::{self, PopularItem, SalesSummary};
use crate::utils::AppResult;

/// GET /api/reports/total-sales - 总销售额
pub async fn total_sales(State(state): State<ServerState>) -> AppResult<Json<SalesSummary>> {
    Ok(Json(reports::total_sales(&state.orders, &state.catalog)))
}

/// GET /api/reports/popular-items - 热门商品 (按订单行计数降序)
pub async fn popular_items(State(state): State<ServerState>) -> AppResult<Json<Vec<PopularItem>>> {
    Ok(Json(reports::popular_items(&state.orders)))
}
