use std::sync::Arc;

use crate::core::{Config, Result};
use crate::db::memory::{MemoryMenuStore, MemoryOrderStore, MemoryUserStore};
use crate::db::repository::{MenuItemRepository, OrderRepository, UserRepository};
use crate::db::seed::seed_menu_if_empty;
use crate::db::{DbService, MenuStore, OrderStore, UserStore};
use crate::orders::OrdersManager;

/// 服务器状态 - 持有所有服务的共享引用
///
/// 使用 Arc 实现浅拷贝，所有权成本极低。
///
/// | 字段 | 类型 | 说明 |
/// |------|------|------|
/// | config | Config | 配置项 (不可变) |
/// | orders | OrdersManager | 订单服务 |
/// | menu | Arc<dyn MenuStore> | 菜单存储 |
/// | users | Arc<dyn UserStore> | 顾客档案存储 |
#[derive(Clone)]
pub struct ServerState {
    pub config: Config,
    pub orders: OrdersManager,
    pub menu: Arc<dyn MenuStore>,
    pub users: Arc<dyn UserStore>,
}

impl std::fmt::Debug for ServerState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServerState")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl ServerState {
    /// 由已构造的存储组装状态
    pub fn with_stores(
        config: Config,
        orders: Arc<dyn OrderStore>,
        menu: Arc<dyn MenuStore>,
        users: Arc<dyn UserStore>,
    ) -> Self {
        Self {
            config,
            orders: OrdersManager::new(orders),
            menu,
            users,
        }
    }

    /// 纯内存状态 (测试 / 临时运行)
    pub fn in_memory(config: Config) -> Self {
        Self::with_stores(
            config,
            Arc::new(MemoryOrderStore::new()),
            Arc::new(MemoryMenuStore::new()),
            Arc::new(MemoryUserStore::new()),
        )
    }

    /// 初始化服务器状态
    ///
    /// 1. 打开嵌入式 SurrealDB
    /// 2. 创建各仓储
    /// 3. 按配置写入招牌菜
    pub async fn initialize(config: &Config) -> Result<Self> {
        let db_service = DbService::new(&config.database_path).await?;
        let db = db_service.db;

        let state = Self::with_stores(
            config.clone(),
            Arc::new(OrderRepository::new(db.clone())),
            Arc::new(MenuItemRepository::new(db.clone())),
            Arc::new(UserRepository::new(db)),
        );

        if config.seed_menu {
            seed_menu_if_empty(state.menu.as_ref()).await?;
        }

        Ok(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_initialize_in_memory_engine_seeds_menu() {
        let mut config = Config::for_tests();
        config.seed_menu = true;
        let state = ServerState::initialize(&config).await.unwrap();
        assert_eq!(state.menu.count().await.unwrap(), 7);
        assert!(!state.orders.get_session(1).await.unwrap().active);
    }
}
