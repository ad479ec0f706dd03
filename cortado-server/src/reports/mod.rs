//! Reporting - read-only aggregation over the order log
//!
//! Both reports are recomputed from the current order + menu state on
//! every call, never cached, so repeated calls with no intervening
//! mutation return identical results.

use serde::Serialize;

use crate::catalog::MenuCatalog;
use crate::orders::OrderRepository;

#[derive(Debug, Serialize, PartialEq)]
pub struct SalesSummary {
    /// Σ price × quantity over all order lines across all persisted
    /// orders. Lines whose product no longer exists on the menu
    /// contribute nothing.
    pub total_sales: f64,
    pub order_count: usize,
}

#[derive(Debug, Serialize, PartialEq)]
pub struct PopularItem {
    pub product_id: String,
    /// Number of order lines referencing the product.
    pub order_count: u64,
}

pub fn total_sales(orders: &OrderRepository, catalog: &MenuCatalog) -> SalesSummary {
    let all = orders.list();
    let total = all
        .iter()
        .flat_map(|o| o.lines.iter())
        .filter_map(|line| catalog.price_of(&line.product_id).map(|p| p * line.quantity))
        .sum();
    SalesSummary {
        total_sales: total,
        order_count: all.len(),
    }
}

/// Per-product order-line counts, descending; ties break on product id so
/// the ordering is deterministic.
pub fn popular_items(orders: &OrderRepository) -> Vec<PopularItem> {
    let mut counts: Vec<PopularItem> = Vec::new();
    for order in orders.list() {
        for line in &order.lines {
            match counts.iter_mut().find(|c| c.product_id == line.product_id) {
                Some(c) => c.order_count += 1,
                None => counts.push(PopularItem {
                    product_id: line.product_id.clone(),
                    order_count: 1,
                }),
            }
        }
    }
    counts.sort_by(|a, b| {
        b.order_count
            .cmp(&a.order_count)
            .then_with(|| a.product_id.cmp(&b.product_id))
    });
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{MenuItem, Order, OrderLine, OrderStatus};
    use crate::store::MemoryStore;
    use chrono::Utc;
    use std::sync::Arc;

    fn product(id: &str, price: f64) -> MenuItem {
        MenuItem {
            id: id.into(),
            name: id.into(),
            description: String::new(),
            price,
            recipe: vec![],
        }
    }

    fn order(lines: &[(&str, f64)]) -> Order {
        Order {
            id: uuid::Uuid::new_v4().to_string(),
            customer_name: "Ada".into(),
            lines: lines
                .iter()
                .map(|(p, q)| OrderLine {
                    product_id: p.to_string(),
                    quantity: *q,
                })
                .collect(),
            status: OrderStatus::Open,
            created_at: Utc::now(),
        }
    }

    fn setup(orders: Vec<Order>, menu: Vec<MenuItem>) -> (OrderRepository, MenuCatalog) {
        let repo = OrderRepository::open(Arc::new(MemoryStore::with_items(orders))).unwrap();
        let catalog = MenuCatalog::open(Arc::new(MemoryStore::with_items(menu))).unwrap();
        (repo, catalog)
    }

    #[test]
    fn total_sales_sums_price_times_quantity() {
        let (repo, catalog) = setup(
            vec![order(&[("latte", 2.0)]), order(&[("espresso", 1.0), ("latte", 1.0)])],
            vec![product("latte", 4.5), product("espresso", 2.0)],
        );

        let summary = total_sales(&repo, &catalog);
        assert_eq!(summary.total_sales, 4.5 * 3.0 + 2.0);
        assert_eq!(summary.order_count, 2);
    }

    #[test]
    fn deleted_products_contribute_nothing() {
        let (repo, catalog) = setup(vec![order(&[("ghost", 2.0)])], vec![]);
        assert_eq!(total_sales(&repo, &catalog).total_sales, 0.0);
    }

    #[test]
    fn popular_items_sorted_descending_with_deterministic_ties() {
        let (repo, _) = setup(
            vec![
                order(&[("latte", 1.0), ("espresso", 1.0)]),
                order(&[("latte", 3.0)]),
                order(&[("mocha", 1.0)]),
            ],
            vec![],
        );

        let items = popular_items(&repo);
        assert_eq!(items[0].product_id, "latte");
        assert_eq!(items[0].order_count, 2);
        // espresso and mocha tie at 1; id order breaks the tie
        assert_eq!(items[1].product_id, "espresso");
        assert_eq!(items[2].product_id, "mocha");
    }

    #[test]
    fn repeated_reads_are_identical() {
        let (repo, catalog) = setup(vec![order(&[("latte", 2.0)])], vec![product("latte", 4.5)]);
        assert_eq!(total_sales(&repo, &catalog), total_sales(&repo, &catalog));
        assert_eq!(popular_items(&repo), popular_items(&repo));
    }
}
