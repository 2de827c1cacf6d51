//! 用户数据访问接口
//!
//! 处理器只依赖 [`UserStore`]，具体实现见 `postgres` 与 `memory` 模块。

use std::future::Future;

use uuid::Uuid;

use super::model::{User, UserChanges};
use crate::core::error::CoreError;

pub trait UserStore: Clone + Send + Sync + 'static {
    /// 按 id 查询用户，没有匹配行时返回 `User::default()` 而不是错误
    fn get_user(&self, id: Uuid) -> impl Future<Output = Result<User, CoreError>> + Send;

    /// 查询全部用户，顺序不保证
    fn get_all_users(&self) -> impl Future<Output = Result<Vec<User>, CoreError>> + Send;

    /// 插入用户（id 由调用方指定），返回插入的 id
    fn create_user(&self, user: User) -> impl Future<Output = Result<Uuid, CoreError>> + Send;

    /// 更新 name 与 age，返回受影响行数
    fn update_user(
        &self,
        id: Uuid,
        changes: UserChanges,
    ) -> impl Future<Output = Result<u64, CoreError>> + Send;

    /// 删除用户，返回受影响行数
    fn delete_user(&self, id: Uuid) -> impl Future<Output = Result<u64, CoreError>> + Send;
}
