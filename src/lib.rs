//! # 用户 CRUD 服务
//!
//! 基于 Axum + SQLx 的 PostgreSQL 用户增删改查服务：
//! - `app`：用户模型、处理器、路由与存储实现
//! - `core`：统一错误处理、响应结构与请求日志中间件
//! - `infrastructure`：配置、数据库连接池与日志初始化

pub mod app;
pub mod core;
pub mod infrastructure;

use axum::{
    http::{header, Method},
    middleware, Router,
};
use tower_http::cors::{Any, CorsLayer};

use crate::app::user::{router, AppState, UserStore};
use crate::core::middleware::request_logging_middleware;

/// 组装完整的应用路由
pub fn build_app<S: UserStore>(user_store: S) -> Router {
    router::routes::<S>()
        .with_state(AppState::new(user_store))
        .layer(middleware::from_fn(request_logging_middleware))
        .layer(cors_layer())
}

/// 浏览器预检请求由 CORS 层直接应答
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE])
}
