//! 用户处理器
//!
//! 提取路径参数或解析 JSON 请求体，调用存储层，并把结果编码为 JSON。
//! 请求体按原始字节解析，不检查 `Content-Type`。
//! 解析失败返回 400，存储失败返回 500，都只影响当前请求。

use axum::{
    body::Bytes,
    extract::{rejection::PathRejection, Path, State},
    response::Json,
};
use uuid::Uuid;

use super::{
    model::{User, UserChanges},
    service::UserStore,
};
use crate::core::{error::CoreError, response::MessageResponse};

#[derive(Clone)]
pub struct AppState<S> {
    pub user_store: S,
}

impl<S: UserStore> AppState<S> {
    pub fn new(user_store: S) -> Self {
        Self { user_store }
    }
}

pub async fn get_user<S: UserStore>(
    State(state): State<AppState<S>>,
    path: Result<Path<Uuid>, PathRejection>,
) -> Result<Json<User>, CoreError> {
    let Path(id) = path?;
    let user = state.user_store.get_user(id).await?;
    Ok(Json(user))
}

pub async fn get_all_users<S: UserStore>(
    State(state): State<AppState<S>>,
) -> Result<Json<Vec<User>>, CoreError> {
    let users = state.user_store.get_all_users().await?;
    Ok(Json(users))
}

pub async fn create_user<S: UserStore>(
    State(state): State<AppState<S>>,
    body: Bytes,
) -> Result<Json<MessageResponse>, CoreError> {
    let user: User = serde_json::from_slice(&body)?;
    let id = state.user_store.create_user(user).await?;
    Ok(Json(MessageResponse::inserted(id)))
}

pub async fn update_user<S: UserStore>(
    State(state): State<AppState<S>>,
    path: Result<Path<Uuid>, PathRejection>,
    body: Bytes,
) -> Result<Json<MessageResponse>, CoreError> {
    let Path(id) = path?;
    let changes: UserChanges = serde_json::from_slice(&body)?;
    let rows_affected = state.user_store.update_user(id, changes).await?;
    Ok(Json(MessageResponse::updated(id, rows_affected)))
}

pub async fn delete_user<S: UserStore>(
    State(state): State<AppState<S>>,
    path: Result<Path<Uuid>, PathRejection>,
) -> Result<Json<MessageResponse>, CoreError> {
    let Path(id) = path?;
    let rows_affected = state.user_store.delete_user(id).await?;
    Ok(Json(MessageResponse::deleted(id, rows_affected)))
}
