//! 应用层：路由组装与共享状态

pub mod docs;
pub mod health;
pub mod products;

use axum::{middleware, Router};
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;

use crate::config::{AppConfig, ConfigError};
use crate::core::middleware::request_logging_middleware;
use products::{ProductService, ProductStore};

/// 每个请求通过 `State` 获得的依赖
#[derive(Clone)]
pub struct AppState {
    pub product_service: ProductService,
}

impl AppState {
    pub fn new(store: Arc<dyn ProductStore>) -> Self {
        Self {
            product_service: ProductService::new(store),
        }
    }
}

/// 跨域策略：一个来源，任意方法与请求头
pub fn cors_layer(config: &AppConfig) -> Result<CorsLayer, ConfigError> {
    Ok(CorsLayer::new()
        .allow_origin(config.allowed_origin()?)
        .allow_methods(Any)
        .allow_headers(Any))
}

/// 组装完整路由
pub fn build_router(state: AppState, config: &AppConfig) -> Result<Router, ConfigError> {
    let mut router = Router::new()
        .merge(products::handler::router())
        .merge(health::router());

    if config.is_production() {
        info!("生产环境，不挂载 API 文档");
    } else {
        router = router.merge(docs::router());
    }

    Ok(router
        .layer(middleware::from_fn(request_logging_middleware))
        .layer(cors_layer(config)?)
        .layer(TraceLayer::new_for_http())
        .with_state(state))
}
