//! 端到端订单流程测试 - 走真实的磁盘存储
//!
//! 覆盖: 正常下单扣减、库存不足拒单、未知商品拒单、重启后状态一致、
//! 报表读取幂等。

use cortado_server::models::{InventoryItem, MenuItem, OrderLine, OrderStatus, RecipeLine};
use cortado_server::reports;
use cortado_server::utils::AppError;
use cortado_server::{Config, ServerState};

fn test_state(dir: &std::path::Path) -> ServerState {
    let config = Config::with_overrides(dir.to_str().unwrap(), 0);
    ServerState::initialize(&config).unwrap()
}

fn latte() -> MenuItem {
    MenuItem {
        id: "latte".into(),
        name: "Latte".into(),
        description: "Espresso with steamed milk".into(),
        price: 4.5,
        recipe: vec![
            RecipeLine {
                ingredient_id: "espresso_shot".into(),
                quantity: 2.0,
            },
            RecipeLine {
                ingredient_id: "milk".into(),
                quantity: 150.0,
            },
        ],
    }
}

fn stock(id: &str, name: &str, quantity: f64, unit: &str) -> InventoryItem {
    InventoryItem {
        id: id.into(),
        name: name.into(),
        quantity,
        unit: unit.into(),
    }
}

fn lines(pairs: &[(&str, f64)]) -> Vec<OrderLine> {
    pairs
        .iter()
        .map(|(p, q)| OrderLine {
            product_id: p.to_string(),
            quantity: *q,
        })
        .collect()
}

#[test]
fn successful_order_deducts_and_persists() {
    // Scenario C: 2 latte units -> demand {espresso_shot: 4, milk: 300}
    let dir = tempfile::tempdir().unwrap();
    let state = test_state(dir.path());

    state.catalog.create(latte()).unwrap();
    state
        .inventory
        .create(stock("espresso_shot", "Espresso shot", 500.0, "unit"))
        .unwrap();
    state
        .inventory
        .create(stock("milk", "Whole milk", 5000.0, "ml"))
        .unwrap();

    let order = state
        .processor
        .create_order("Ada", &lines(&[("latte", 2.0)]))
        .unwrap();

    assert_eq!(order.status, OrderStatus::Open);
    assert_eq!(order.lines, lines(&[("latte", 2.0)]));
    assert!(!order.id.is_empty());

    assert_eq!(state.inventory.peek("espresso_shot"), Some(496.0));
    assert_eq!(state.inventory.peek("milk"), Some(4700.0));
}

#[test]
fn insufficient_stock_rejects_and_leaves_inventory_unchanged() {
    // Scenario A: 150 ml milk on hand, recipe needs 300 ml
    let dir = tempfile::tempdir().unwrap();
    let state = test_state(dir.path());

    let mut mocha = latte();
    mocha.id = "mocha".into();
    mocha.recipe = vec![RecipeLine {
        ingredient_id: "milk".into(),
        quantity: 300.0,
    }];
    state.catalog.create(mocha).unwrap();
    state
        .inventory
        .create(stock("milk", "Whole milk", 150.0, "ml"))
        .unwrap();

    let err = state
        .processor
        .create_order("Ada", &lines(&[("mocha", 1.0)]))
        .unwrap_err();

    let app: AppError = err.into();
    let msg = app.to_string();
    assert!(msg.contains("Whole milk"), "message was: {msg}");
    assert!(msg.contains("300"), "message was: {msg}");
    assert!(msg.contains("150"), "message was: {msg}");

    assert_eq!(state.inventory.peek("milk"), Some(150.0));
    assert!(state.orders.list().is_empty());
}

#[test]
fn unknown_product_rejects_without_any_mutation() {
    // Scenario D
    let dir = tempfile::tempdir().unwrap();
    let state = test_state(dir.path());

    state
        .inventory
        .create(stock("milk", "Whole milk", 150.0, "ml"))
        .unwrap();

    let err = state
        .processor
        .create_order("Ada", &lines(&[("unicorn-latte", 1.0)]))
        .unwrap_err();
    assert!(err.to_string().contains("unicorn-latte"));

    assert_eq!(state.inventory.peek("milk"), Some(150.0));
    assert!(state.orders.list().is_empty());
}

#[test]
fn state_survives_restart() {
    let dir = tempfile::tempdir().unwrap();
    let order_id;
    {
        let state = test_state(dir.path());
        state.catalog.create(latte()).unwrap();
        state
            .inventory
            .create(stock("espresso_shot", "Espresso shot", 500.0, "unit"))
            .unwrap();
        state
            .inventory
            .create(stock("milk", "Whole milk", 5000.0, "ml"))
            .unwrap();

        let order = state
            .processor
            .create_order("Ada", &lines(&[("latte", 2.0)]))
            .unwrap();
        order_id = order.id;
    }

    // Fresh state from the same work dir simulates a process restart
    let reloaded = test_state(dir.path());
    let order = reloaded.orders.get(&order_id).expect("order survived reload");
    assert_eq!(order.customer_name, "Ada");
    assert_eq!(order.status, OrderStatus::Open);
    assert_eq!(reloaded.inventory.peek("espresso_shot"), Some(496.0));
    assert_eq!(reloaded.inventory.peek("milk"), Some(4700.0));
}

#[test]
fn close_is_explicit_and_does_not_touch_inventory() {
    let dir = tempfile::tempdir().unwrap();
    let state = test_state(dir.path());

    state.catalog.create(latte()).unwrap();
    state
        .inventory
        .create(stock("espresso_shot", "Espresso shot", 10.0, "unit"))
        .unwrap();
    state
        .inventory
        .create(stock("milk", "Whole milk", 1000.0, "ml"))
        .unwrap();

    let order = state
        .processor
        .create_order("Ada", &lines(&[("latte", 1.0)]))
        .unwrap();
    let milk_after_create = state.inventory.peek("milk");

    let closed = state.processor.close_order(&order.id).unwrap();
    assert_eq!(closed.status, OrderStatus::Closed);
    assert_eq!(state.inventory.peek("milk"), milk_after_create);

    // Closing twice conflicts
    assert!(state.processor.close_order(&order.id).is_err());
}

#[test]
fn reports_recompute_identically_without_mutation() {
    let dir = tempfile::tempdir().unwrap();
    let state = test_state(dir.path());

    state.catalog.create(latte()).unwrap();
    state
        .inventory
        .create(stock("espresso_shot", "Espresso shot", 100.0, "unit"))
        .unwrap();
    state
        .inventory
        .create(stock("milk", "Whole milk", 10_000.0, "ml"))
        .unwrap();

    state
        .processor
        .create_order("Ada", &lines(&[("latte", 2.0)]))
        .unwrap();
    state
        .processor
        .create_order("Grace", &lines(&[("latte", 1.0)]))
        .unwrap();

    let first = reports::total_sales(&state.orders, &state.catalog);
    let second = reports::total_sales(&state.orders, &state.catalog);
    assert_eq!(first, second);
    assert_eq!(first.total_sales, 4.5 * 3.0);

    let popular = reports::popular_items(&state.orders);
    assert_eq!(popular, reports::popular_items(&state.orders));
    assert_eq!(popular[0].product_id, "latte");
    assert_eq!(popular[0].order_count, 2);
}
