//! 工具模块 - 通用工具函数和类型
//!
//! # 内容
//!
//! - [`AppError`] - 应用错误类型 (from shared::error)
//! - [`ids`] - 边界 ID 解析 (订单/菜品/用户 UUID, 桌号)
//! - [`validation`] - 字段级校验
//! - 日志初始化

pub mod ids;
pub mod logger;
pub mod validation;

// Re-export unified error types from shared
pub use shared::error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
