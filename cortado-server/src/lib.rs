//! Cortado Server - 咖啡店后台
//!
//! # 架构概述
//!
//! 核心是订单处理与库存一致性引擎：给定一笔订单，解析每个商品的配方，
//! 聚合原料需求，对库存做原子的 check-and-deduct，成功后才落单。
//! 三个集合 (菜单、库存、订单) 各自持久化为一个 JSON 文档，
//! 用临时文件 + 原子替换保证崩溃安全。
//!
//! # 模块结构
//!
//! ```text
//! cortado-server/src/
//! ├── core/          # 配置、状态、HTTP 服务器
//! ├── models/        # 三个集合的记录类型
//! ├── store/         # Ledger Store - 崩溃安全的全集合持久化
//! ├── catalog/       # 菜单目录 (resolve 商品 -> 配方)
//! ├── inventory/     # 库存账本 (原子 check-and-deduct)
//! ├── orders/        # 订单编排器与订单仓库
//! ├── reports/       # 只读报表聚合
//! ├── api/           # HTTP 路由和处理器
//! └── utils/         # 错误、日志、校验
//! ```

pub mod api;
pub mod catalog;
pub mod core;
pub mod inventory;
pub mod models;
pub mod orders;
pub mod reports;
pub mod store;
pub mod utils;

// Re-export 公共类型
pub use crate::core::{Config, Server, ServerState, build_app};
pub use utils::{AppError, AppResult};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

/// 设置运行环境: dotenv, 工作目录, 日志
pub fn setup_environment() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();

    let config = Config::from_env();
    config.ensure_work_dir_structure()?;

    let logs_dir = config.logs_dir();
    init_logger_with_file(Some(config.log_level.as_str()), logs_dir.to_str());

    Ok(())
}

pub fn print_banner() {
    println!(
        r#"
   ______           __            __
  / ____/___  _____/ /_____ _____/ /___
 / /   / __ \/ ___/ __/ __ `/ __  / __ \
/ /___/ /_/ / /  / /_/ /_/ / /_/ / /_/ /
\____/\____/_/   \__/\__,_/\__,_/\____/
    "#
    );
}
