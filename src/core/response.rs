//! 核心响应处理模块

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 写操作（创建、更新、删除）的确认响应
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub id: Uuid,
    pub message: String,
}

impl MessageResponse {
    pub fn inserted(id: Uuid) -> Self {
        Self {
            id,
            message: "User inserted successfully!".to_string(),
        }
    }

    pub fn updated(id: Uuid, rows_affected: u64) -> Self {
        Self {
            id,
            message: format!("Updated rows successfully: {}", rows_affected),
        }
    }

    pub fn deleted(id: Uuid, rows_affected: u64) -> Self {
        Self {
            id,
            message: format!("Deleted rows successfully: {}", rows_affected),
        }
    }
}
