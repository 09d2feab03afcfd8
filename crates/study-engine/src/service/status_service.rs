//! 状态聚合服务
//!
//! 组装展示层消费的完整状态视图。纯读操作，
//! 在一个 REPEATABLE READ 事务内取快照，不会读到扣减进行中的余额。

use std::sync::Arc;

use chrono::NaiveDate;
use sqlx::PgPool;
use study_shared::config::EconomyConfig;
use study_shared::retry::{RetryPolicy, retry_with_policy};
use tracing::instrument;

use crate::economy::bonus_multiplier;
use crate::error::{EngineError, Result};
use crate::repository::{StudyLogRepository, UserStateRepository};
use crate::service::dto::StatusSnapshot;

/// 状态聚合服务
pub struct StatusService {
    pool: PgPool,
    user_states: Arc<UserStateRepository>,
    economy: EconomyConfig,
    retry: RetryPolicy,
}

impl StatusService {
    pub fn new(
        pool: PgPool,
        user_states: Arc<UserStateRepository>,
        economy: EconomyConfig,
    ) -> Self {
        Self {
            pool,
            user_states,
            economy,
            retry: RetryPolicy::default(),
        }
    }

    /// 读取聚合状态
    ///
    /// 倍率与学习结算用同一求值函数，展示值与实际结算始终一致。
    #[instrument(skip(self), fields(today = %today))]
    pub async fn get_status(&self, today: NaiveDate) -> Result<StatusSnapshot> {
        retry_with_policy(
            &self.retry,
            "get_status",
            |e: &EngineError| e.is_retryable(),
            || self.get_status_once(today),
        )
        .await
    }

    async fn get_status_once(&self, today: NaiveDate) -> Result<StatusSnapshot> {
        self.user_states
            .ensure_exists(self.economy.daily_goal_hours, today)
            .await?;

        let mut tx = self.pool.begin().await?;

        // 两次读取之间可能有写事务提交，固定快照保证视图一致
        sqlx::query("SET TRANSACTION ISOLATION LEVEL REPEATABLE READ")
            .execute(&mut *tx)
            .await?;

        let state = UserStateRepository::get_in_tx(&mut tx)
            .await?
            .ok_or_else(|| EngineError::Internal("user_state 行缺失".to_string()))?;

        let logs = StudyLogRepository::list_by_date_in_tx(&mut tx, today).await?;

        tx.commit().await?;

        Ok(StatusSnapshot {
            energy: state.energy,
            streak: state.streak,
            freezes: state.freezes,
            multiplier: bonus_multiplier(&self.economy, state.streak),
            today_hours: state.today_hours,
            goal: state.goal_hours,
            logs,
        })
    }
}
