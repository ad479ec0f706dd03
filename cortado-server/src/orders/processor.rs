//! Order processor - the orchestrator
//!
//! 下单流程 (副作用严格有序, 库存扣减 happens-before 订单落盘):
//!
//! 1. 校验输入 (非空行, 数量 > 0 且有限, 顾客姓名非空);
//! 2. 逐行解析商品配方, 任何缺失立即失败, 不碰库存;
//! 3. 聚合需求向量 (按首次出现顺序分组求和);
//! 4. 提交 check-and-deduct, 失败原样上抛;
//! 5. 扣减成功后生成订单 (uuid, open, now) 并落盘;
//! 6. 订单落盘失败是需要人工对账的严重事件, 以独立错误上报并记录
//!    足够的上下文。

use std::sync::Arc;

use uuid::Uuid;

use crate::catalog::MenuCatalog;
use crate::inventory::{Demand, InventoryLedger};
use crate::models::{Order, OrderLine, OrderStatus, RecipeLine};

use super::{OrderError, OrderRepository};

pub struct OrderProcessor {
    catalog: Arc<MenuCatalog>,
    inventory: Arc<InventoryLedger>,
    repository: Arc<OrderRepository>,
}

impl OrderProcessor {
    pub fn new(
        catalog: Arc<MenuCatalog>,
        inventory: Arc<InventoryLedger>,
        repository: Arc<OrderRepository>,
    ) -> Self {
        Self {
            catalog,
            inventory,
            repository,
        }
    }

    /// Create an order, deducting its ingredient demand atomically.
    ///
    /// The order record is written only after the deduction succeeded; on
    /// any failure before that, every collection is left byte-for-byte
    /// unchanged.
    pub fn create_order(&self, customer_name: &str, lines: &[OrderLine]) -> Result<Order, OrderError> {
        if customer_name.trim().is_empty() {
            return Err(OrderError::Validation("customer_name must not be empty".into()));
        }
        if lines.is_empty() {
            return Err(OrderError::Validation("order must contain at least one line".into()));
        }
        for line in lines {
            if !line.quantity.is_finite() || line.quantity <= 0.0 {
                return Err(OrderError::Validation(format!(
                    "line quantity for '{}' must be a positive number",
                    line.product_id
                )));
            }
        }

        // Resolve every product before touching inventory
        let mut recipes: Vec<(&OrderLine, Vec<RecipeLine>)> = Vec::with_capacity(lines.len());
        for line in lines {
            let recipe = self
                .catalog
                .resolve(&line.product_id)
                .ok_or_else(|| OrderError::UnknownProduct(line.product_id.clone()))?;
            recipes.push((line, recipe));
        }

        let demand = aggregate_demand(&recipes);
        self.inventory.check_and_deduct(&demand)?;

        let order = Order {
            id: Uuid::new_v4().to_string(),
            customer_name: customer_name.trim().to_string(),
            lines: lines.to_vec(),
            status: OrderStatus::Open,
            created_at: chrono::Utc::now(),
        };

        match self.repository.create(order) {
            Ok(order) => {
                tracing::info!(
                    order_id = %order.id,
                    customer = %order.customer_name,
                    lines = order.lines.len(),
                    "order created"
                );
                Ok(order)
            }
            Err(e) => {
                // Inventory was already deducted and durably written. The
                // operator needs the full picture to reconcile.
                tracing::error!(
                    customer = %customer_name,
                    demand = ?demand,
                    error = %e,
                    "order persistence failed after inventory deduction"
                );
                Err(OrderError::Persistence(e))
            }
        }
    }

    /// open -> closed; no inventory effect.
    pub fn close_order(&self, id: &str) -> Result<Order, OrderError> {
        let order = self.repository.close(id)?;
        tracing::info!(order_id = %order.id, "order closed");
        Ok(order)
    }
}

/// Sum `line.quantity × recipe_line.quantity` per ingredient, grouped in
/// first-encounter (recipe-line) order.
fn aggregate_demand(recipes: &[(&OrderLine, Vec<RecipeLine>)]) -> Vec<Demand> {
    let mut demand: Vec<Demand> = Vec::new();
    for (line, recipe) in recipes {
        for entry in recipe {
            let required = line.quantity * entry.quantity;
            match demand.iter_mut().find(|d| d.ingredient_id == entry.ingredient_id) {
                Some(d) => d.quantity += required,
                None => demand.push(Demand {
                    ingredient_id: entry.ingredient_id.clone(),
                    quantity: required,
                }),
            }
        }
    }
    demand
}
