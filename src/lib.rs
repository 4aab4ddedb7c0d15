//! # Product API
//!
//! 单一 Product 资源的 CRUD HTTP 服务：
//! - `app`: 路由、处理器、业务服务与数据访问
//! - `core`: 错误类型与中间件
//! - `infrastructure`: 数据库连接池、日志、停机信号
//! - `config`: 配置加载与验证

pub mod app;
pub mod config;
pub mod core;
pub mod infrastructure;

pub use app::{build_router, AppState};
pub use config::{AppConfig, ConfigError};
