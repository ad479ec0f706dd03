use std::sync::Arc;

use crate::catalog::MenuCatalog;
use crate::core::Config;
use crate::inventory::InventoryLedger;
use crate::models::{InventoryItem, MenuItem, Order};
use crate::orders::{OrderProcessor, OrderRepository};
use crate::store::{CollectionStore, JsonStore, StoreError};

/// 服务器状态 - 持有三个集合视图和订单处理器的共享引用
///
/// ServerState 是整个服务的核心数据结构。使用 Arc 实现浅拷贝，
/// 每个请求处理器拿到的都是同一份集合视图。
///
/// # 组件
///
/// | 字段 | 类型 | 说明 |
/// |------|------|------|
/// | config | Config | 配置项 (不可变) |
/// | catalog | Arc<MenuCatalog> | 菜单目录 (读写锁) |
/// | inventory | Arc<InventoryLedger> | 库存账本 (互斥域) |
/// | orders | Arc<OrderRepository> | 订单仓库 (读写锁) |
/// | processor | Arc<OrderProcessor> | 下单编排器 |
#[derive(Clone)]
pub struct ServerState {
    /// 服务器配置
    pub config: Config,
    /// 菜单目录
    pub catalog: Arc<MenuCatalog>,
    /// 库存账本
    pub inventory: Arc<InventoryLedger>,
    /// 订单仓库
    pub orders: Arc<OrderRepository>,
    /// 订单处理器
    pub processor: Arc<OrderProcessor>,
}

impl ServerState {
    /// 从工作目录下的三个 JSON 文档初始化
    ///
    /// 文件缺失按空集合处理；损坏的文档是错误，不会被静默清空。
    pub fn initialize(config: &Config) -> Result<Self, StoreError> {
        config.ensure_work_dir_structure()?;
        let data_dir = config.data_dir();

        let menu_store: Arc<dyn CollectionStore<MenuItem>> =
            Arc::new(JsonStore::new(data_dir.join("menu.json")));
        let inventory_store: Arc<dyn CollectionStore<InventoryItem>> =
            Arc::new(JsonStore::new(data_dir.join("inventory.json")));
        let order_store: Arc<dyn CollectionStore<Order>> =
            Arc::new(JsonStore::new(data_dir.join("orders.json")));

        Self::with_stores(config.clone(), menu_store, inventory_store, order_store)
    }

    /// 用任意存储实现构建状态
    ///
    /// 测试场景用 [`crate::store::MemoryStore`] 替换磁盘存储。
    pub fn with_stores(
        config: Config,
        menu_store: Arc<dyn CollectionStore<MenuItem>>,
        inventory_store: Arc<dyn CollectionStore<InventoryItem>>,
        order_store: Arc<dyn CollectionStore<Order>>,
    ) -> Result<Self, StoreError> {
        let catalog = Arc::new(MenuCatalog::open(menu_store)?);
        let inventory = Arc::new(InventoryLedger::open(inventory_store)?);
        let orders = Arc::new(OrderRepository::open(order_store)?);
        let processor = Arc::new(OrderProcessor::new(
            catalog.clone(),
            inventory.clone(),
            orders.clone(),
        ));

        tracing::info!(
            menu_items = catalog.list().len(),
            inventory_items = inventory.list().len(),
            orders = orders.list().len(),
            "server state initialized"
        );

        Ok(Self {
            config,
            catalog,
            inventory,
            orders,
            processor,
        })
    }
}
