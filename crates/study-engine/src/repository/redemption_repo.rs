//! 兑换流水仓储

use sqlx::{PgConnection, PgPool};

use crate::error::Result;
use crate::models::{RedemptionEvent, RedemptionHistoryEntry};

/// 兑换流水仓储
///
/// 流水只追加，作为兑换操作的审计记录。
pub struct RedemptionRepository {
    pool: PgPool,
}

impl RedemptionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// 查询最近的兑换历史（关联奖励名称），按时间倒序
    pub async fn list_history(&self, limit: i64) -> Result<Vec<RedemptionHistoryEntry>> {
        let entries = sqlx::query_as::<_, RedemptionHistoryEntry>(
            r#"
            SELECT e.id, e.event_no, e.reward_id, r.name AS reward_name,
                   e.cost_paid, e.created_at
            FROM redemption_events e
            JOIN rewards r ON r.id = e.reward_id
            ORDER BY e.id DESC
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(entries)
    }

    /// 在事务内追加一条兑换流水
    pub async fn insert_in_tx(
        tx: &mut PgConnection,
        event_no: &str,
        reward_id: i64,
        cost_paid: i64,
    ) -> Result<RedemptionEvent> {
        let event = sqlx::query_as::<_, RedemptionEvent>(
            r#"
            INSERT INTO redemption_events (event_no, reward_id, cost_paid)
            VALUES ($1, $2, $3)
            RETURNING id, event_no, reward_id, cost_paid, created_at
            "#,
        )
        .bind(event_no)
        .bind(reward_id)
        .bind(cost_paid)
        .fetch_one(tx)
        .await?;

        Ok(event)
    }
}
