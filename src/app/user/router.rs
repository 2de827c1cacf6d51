//! 用户路由

use axum::{
    routing::{get, post},
    Router,
};

use super::{
    handler::{self, AppState},
    service::UserStore,
};

/// 未注册的路径返回 404，已注册路径上的其他方法返回 405
pub fn routes<S: UserStore>() -> Router<AppState<S>> {
    Router::new()
        .route(
            "/api/user/:id",
            get(handler::get_user::<S>)
                .put(handler::update_user::<S>)
                .delete(handler::delete_user::<S>),
        )
        .route("/api/users", get(handler::get_all_users::<S>))
        .route("/api/newuser", post(handler::create_user::<S>))
}
