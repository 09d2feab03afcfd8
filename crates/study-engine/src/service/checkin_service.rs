//! 每日打卡服务
//!
//! 处理连胜推进的核心业务逻辑：
//! - 同日幂等（重复打卡不产生任何写入）
//! - 连续打卡推进连胜
//! - 漏打卡时消耗冻结或清零连胜
//!
//! ## 打卡流程
//!
//! 1. 确保状态行存在 -> 2. 事务内锁行 -> 3. 纯函数求值状态转移
//!    -> 4. 非幂等命中时落库 -> 5. 提交

use std::sync::Arc;

use chrono::NaiveDate;
use sqlx::PgPool;
use study_shared::config::EconomyConfig;
use study_shared::retry::{RetryPolicy, retry_with_policy};
use tracing::{info, instrument};

use crate::error::{EngineError, Result};
use crate::repository::UserStateRepository;
use crate::streak::{StreakOutcome, StreakTransition, evaluate_daily_check};

/// 每日打卡服务
pub struct CheckinService {
    pool: PgPool,
    user_states: Arc<UserStateRepository>,
    economy: EconomyConfig,
    retry: RetryPolicy,
}

impl CheckinService {
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

    /// 执行每日打卡（同日幂等）
    ///
    /// 打卡本身幂等，瞬时存储故障时在有限次数内自动重试。
    #[instrument(skip(self), fields(today = %today))]
    pub async fn daily_check(&self, today: NaiveDate) -> Result<StreakTransition> {
        retry_with_policy(
            &self.retry,
            "daily_check",
            |e: &EngineError| e.is_retryable(),
            || self.daily_check_once(today),
        )
        .await
    }

    async fn daily_check_once(&self, today: NaiveDate) -> Result<StreakTransition> {
        self.user_states
            .ensure_exists(self.economy.daily_goal_hours, today)
            .await?;

        let mut tx = self.pool.begin().await?;

        let state = UserStateRepository::get_for_update(&mut tx)
            .await?
            .ok_or_else(|| EngineError::Internal("user_state 行缺失".to_string()))?;

        let transition =
            evaluate_daily_check(state.last_check_date, today, state.streak, state.freezes);

        // 同日重复打卡：不写任何东西，这就是幂等保证
        if transition.is_noop() {
            tx.rollback().await?;
            return Ok(transition);
        }

        UserStateRepository::apply_daily_check_in_tx(
            &mut tx,
            transition.streak,
            transition.freezes,
            today,
        )
        .await?;

        tx.commit().await?;

        match transition.outcome {
            StreakOutcome::Extended => {
                info!(streak = transition.streak, "连胜推进");
            }
            StreakOutcome::Frozen { consumed } => {
                info!(
                    streak = transition.streak,
                    consumed, "冻结保护连胜，消耗冻结"
                );
            }
            StreakOutcome::Reset { consumed } => {
                info!(consumed, "冻结不足，连胜清零");
            }
            StreakOutcome::Unchanged => {}
        }

        Ok(transition)
    }
}
