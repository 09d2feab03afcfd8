//! 兑换流水实体

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 兑换流水
///
/// 只追加的审计记录，每次成功兑换写入一条，创建后不可修改。
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct RedemptionEvent {
    pub id: i64,
    /// 流水号，格式 RE{yyyyMMddHHmmss}{6位随机数}
    pub event_no: String,
    pub reward_id: i64,
    /// 实际扣减的能量，即兑换时刻的奖励价格
    pub cost_paid: i64,
    pub created_at: DateTime<Utc>,
}

/// 兑换历史条目（关联奖励名称后的查询结果）
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct RedemptionHistoryEntry {
    pub id: i64,
    pub event_no: String,
    pub reward_id: i64,
    pub reward_name: String,
    pub cost_paid: i64,
    pub created_at: DateTime<Utc>,
}
