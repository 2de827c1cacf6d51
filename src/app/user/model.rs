//! 用户数据模型

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 用户实体，`Default` 即查询无结果时返回的空用户
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "database", derive(sqlx::FromRow))]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub age: i64,
}

/// 更新请求体，只包含可修改的字段，`id` 来自路径
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UserChanges {
    pub name: String,
    pub age: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_user_json_fields() {
        let user: User = serde_json::from_value(json!({
            "id": "11111111-1111-1111-1111-111111111111",
            "name": "Ada",
            "age": 30
        }))
        .unwrap();
        assert_eq!(user.name, "Ada");
        assert_eq!(user.age, 30);
        assert_eq!(
            serde_json::to_value(&user).unwrap(),
            json!({
                "id": "11111111-1111-1111-1111-111111111111",
                "name": "Ada",
                "age": 30
            })
        );
    }

    #[test]
    fn test_empty_user() {
        let user = User::default();
        assert!(user.id.is_nil());
        assert!(user.name.is_empty());
        assert_eq!(user.age, 0);
    }

    #[test]
    fn test_changes_ignore_body_id() {
        let changes: UserChanges = serde_json::from_value(json!({
            "id": "22222222-2222-2222-2222-222222222222",
            "name": "Grace",
            "age": 45
        }))
        .unwrap();
        assert_eq!(
            changes,
            UserChanges {
                name: "Grace".to_string(),
                age: 45
            }
        );
    }

    #[test]
    fn test_changes_require_both_fields() {
        assert!(serde_json::from_value::<UserChanges>(json!({ "name": "Grace" })).is_err());
    }
}
