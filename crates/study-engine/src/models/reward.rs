//! 奖励目录实体

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 奖励附带效果
///
/// 兑换成功后对用户状态施加的额外效果。用显式字段标记，
/// 不通过名称匹配推断。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(type_name = "varchar", rename_all = "snake_case")]
pub enum RewardEffect {
    /// 无额外效果
    #[default]
    None,
    /// 兑换后获得一张连胜冻结
    GrantFreeze,
}

/// 奖励目录条目
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct RewardItem {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    /// 兑换所需能量，恒为正
    pub cost: i64,
    /// 剩余库存（None 表示不限量）
    pub stock: Option<i32>,
    pub effect: RewardEffect,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl RewardItem {
    /// 检查是否有库存
    pub fn has_stock(&self) -> bool {
        match self.stock {
            Some(remaining) => remaining > 0,
            None => true, // 不限量
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_reward(stock: Option<i32>) -> RewardItem {
        RewardItem {
            id: 1,
            name: "连胜冻结卡".to_string(),
            description: Some("自动消耗以保护连胜记录不被清零".to_string()),
            cost: 30,
            stock,
            effect: RewardEffect::GrantFreeze,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_has_stock_unlimited() {
        assert!(create_test_reward(None).has_stock());
    }

    #[test]
    fn test_has_stock_finite() {
        assert!(create_test_reward(Some(3)).has_stock());
        assert!(!create_test_reward(Some(0)).has_stock());
    }

    #[test]
    fn test_effect_serialization() {
        let json = serde_json::to_value(RewardEffect::GrantFreeze).unwrap();
        assert_eq!(json, "grant_freeze");
        let json = serde_json::to_value(RewardEffect::None).unwrap();
        assert_eq!(json, "none");
    }
}
