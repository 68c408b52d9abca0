//! Dine Server - 餐厅扫码点餐后端
//!
//! # 架构概述
//!
//! - **订单** (`orders`): 每桌一个活动订单，追加下单自动合并，行状态推导整单状态
//! - **数据库** (`db`): 嵌入式 SurrealDB 存储，以及同语义的内存存储
//! - **HTTP API** (`api`): RESTful API 接口 (订单、桌台、菜单、顾客)
//!
//! # 模块结构
//!
//! ```text
//! dine-server/src/
//! ├── core/          # 配置、状态、错误、服务器
//! ├── api/           # HTTP 路由和处理器
//! ├── orders/        # 下单合并、状态机、结账、会话
//! ├── db/            # 存储 trait、SurrealDB 仓储、内存实现、菜单种子
//! └── utils/         # 日志、校验、ID 解析
//! ```

pub mod api;
pub mod core;
pub mod db;
pub mod orders;
pub mod utils;

// Re-export 公共类型
pub use core::{Config, Server, ServerState};
pub use orders::OrdersManager;
pub use utils::{AppError, AppResult};

// Re-export unified error types from shared
pub use utils::{ApiResponse, ErrorCategory, ErrorCode};

// Re-export logger functions
pub use utils::logger::init_logger_with_file;

/// 设置进程环境: 加载 `.env`，初始化日志
pub fn setup_environment() -> Config {
    // .env 不存在时忽略
    let _ = dotenv::dotenv();
    let config = Config::from_env();
    init_logger_with_file(Some(&config.log_level), config.log_dir.as_deref());
    config
}

pub fn print_banner() {
    println!(
        r#"
    ____  _               _____
   / __ \(_)___  ___     / ___/___  ______   _____  _____
  / / / / / __ \/ _ \    \__ \/ _ \/ ___/ | / / _ \/ ___/
 / /_/ / / / / /  __/   ___/ /  __/ /   | |/ /  __/ /
/_____/_/_/ /_/\___/   /____/\___/_/    |___/\___/_/
    "#
    );
}
