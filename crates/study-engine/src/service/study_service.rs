//! 学习结算服务
//!
//! 将一段学习时长结算为能量：按当前连胜取加成倍率，
//! 记录学习流水并增加能量余额，三步在同一事务内完成。

use std::sync::Arc;

use chrono::NaiveDate;
use sqlx::PgPool;
use study_shared::config::EconomyConfig;
use tracing::{info, instrument};

use crate::economy::{bonus_multiplier, energy_earned};
use crate::error::{EngineError, Result};
use crate::repository::{StudyLogRepository, UserStateRepository};
use crate::service::dto::LogStudyResult;

/// 学习结算服务
pub struct StudyService {
    pool: PgPool,
    user_states: Arc<UserStateRepository>,
    economy: EconomyConfig,
}

impl StudyService {
    pub fn new(
        pool: PgPool,
        user_states: Arc<UserStateRepository>,
        economy: EconomyConfig,
    ) -> Self {
        Self {
            pool,
            user_states,
            economy,
        }
    }

    /// 记录一次学习并结算能量
    ///
    /// 事务内完成：追加学习记录、增加能量余额、累计当日小时数。
    /// 失败时三者都不发生。写入不幂等，因此不做内部重试，
    /// 由调用方决定是否重新提交。
    #[instrument(skip(self, note), fields(duration_minutes = duration_minutes))]
    pub async fn log_study(
        &self,
        duration_minutes: i32,
        note: Option<&str>,
        today: NaiveDate,
    ) -> Result<LogStudyResult> {
        if duration_minutes <= 0 {
            return Err(EngineError::Validation(format!(
                "学习时长必须为正数: {duration_minutes}"
            )));
        }

        self.user_states
            .ensure_exists(self.economy.daily_goal_hours, today)
            .await?;

        let mut tx = self.pool.begin().await?;

        let state = UserStateRepository::get_for_update(&mut tx)
            .await?
            .ok_or_else(|| EngineError::Internal("user_state 行缺失".to_string()))?;

        // 倍率取打卡后的当前连胜，与状态接口展示的值一致
        let multiplier = bonus_multiplier(&self.economy, state.streak);
        let earned = energy_earned(&self.economy, duration_minutes, multiplier);
        let hours = f64::from(duration_minutes) / 60.0;

        let entry =
            StudyLogRepository::insert_in_tx(&mut tx, today, duration_minutes, note, earned)
                .await?;
        UserStateRepository::credit_energy_in_tx(&mut tx, earned, hours).await?;

        tx.commit().await?;

        info!(
            log_id = entry.id,
            earned_energy = earned,
            multiplier,
            "学习结算完成"
        );

        Ok(LogStudyResult {
            entry,
            total_earned: earned,
            bonus_multiplier: multiplier,
        })
    }
}
