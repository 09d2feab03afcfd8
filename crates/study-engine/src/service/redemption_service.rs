//! 奖励兑换服务
//!
//! 处理能量兑换奖励的核心业务逻辑，包括：
//! - 奖励存在性检查
//! - 库存检查
//! - 能量余额检查
//! - 事务性扣减与流水写入
//!
//! ## 兑换流程
//!
//! 1. 事务内锁定用户状态 -> 2. 锁定奖励 -> 3. 库存 -> 4. 余额
//!    -> 5. 扣减能量 / 扣库存 / 写流水 / 施加附带效果 -> 6. 提交
//!
//! 余额检查与扣减持有同一把行锁，并发兑换串行执行，
//! 不可能基于过期余额完成扣减。

use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use sqlx::PgPool;
use study_shared::config::EconomyConfig;
use study_shared::retry::{RetryPolicy, retry_with_policy};
use tracing::{info, instrument};
use uuid::Uuid;

use crate::error::{EngineError, Result};
use crate::models::{RedemptionEvent, RedemptionHistoryEntry, RewardEffect, RewardItem};
use crate::repository::{RedemptionRepository, RewardRepository, UserStateRepository};
use crate::service::dto::NewReward;

/// 奖励兑换服务
pub struct RedemptionService {
    pool: PgPool,
    user_states: Arc<UserStateRepository>,
    rewards: Arc<RewardRepository>,
    redemptions: Arc<RedemptionRepository>,
    economy: EconomyConfig,
    retry: RetryPolicy,
}

impl RedemptionService {
    pub fn new(
        pool: PgPool,
        user_states: Arc<UserStateRepository>,
        rewards: Arc<RewardRepository>,
        redemptions: Arc<RedemptionRepository>,
        economy: EconomyConfig,
    ) -> Self {
        Self {
            pool,
            user_states,
            rewards,
            redemptions,
            economy,
            retry: RetryPolicy::default(),
        }
    }

    /// 列出奖励目录（按 id 稳定排序）
    #[instrument(skip(self))]
    pub async fn list_rewards(&self) -> Result<Vec<RewardItem>> {
        retry_with_policy(
            &self.retry,
            "list_rewards",
            |e: &EngineError| e.is_retryable(),
            || self.rewards.list(),
        )
        .await
    }

    /// 新增自定义奖励
    #[instrument(skip(self, new), fields(name = %new.name))]
    pub async fn create_reward(&self, new: NewReward) -> Result<RewardItem> {
        if new.name.trim().is_empty() {
            return Err(EngineError::Validation("奖励名称不能为空".to_string()));
        }
        if new.cost <= 0 {
            return Err(EngineError::Validation(format!(
                "兑换价格必须为正数: {}",
                new.cost
            )));
        }
        if let Some(stock) = new.stock {
            if stock < 0 {
                return Err(EngineError::Validation(format!("库存不能为负数: {stock}")));
            }
        }

        let reward = self
            .rewards
            .insert(
                new.name.trim(),
                new.description.as_deref(),
                new.cost,
                new.stock,
                new.effect,
            )
            .await?;

        info!(reward_id = reward.id, name = %reward.name, "奖励已创建");

        Ok(reward)
    }

    /// 查询最近兑换历史
    #[instrument(skip(self))]
    pub async fn list_history(&self, limit: i64) -> Result<Vec<RedemptionHistoryEntry>> {
        retry_with_policy(
            &self.retry,
            "list_history",
            |e: &EngineError| e.is_retryable(),
            || self.redemptions.list_history(limit),
        )
        .await
    }

    /// 兑换奖励
    ///
    /// 完整事务流程：锁定用户状态与奖励、逐项校验、扣减能量、
    /// 扣减库存（限量时）、写兑换流水、施加附带效果。
    /// 任何一步失败则整体回滚，用户状态保持原样。
    #[instrument(skip(self), fields(reward_id = reward_id))]
    pub async fn redeem(&self, reward_id: i64, today: NaiveDate) -> Result<RedemptionEvent> {
        self.user_states
            .ensure_exists(self.economy.daily_goal_hours, today)
            .await?;

        let mut tx = self.pool.begin().await?;

        // 锁顺序固定：先 user_state 后 rewards，所有写路径一致，避免死锁
        let state = UserStateRepository::get_for_update(&mut tx)
            .await?
            .ok_or_else(|| EngineError::Internal("user_state 行缺失".to_string()))?;

        let reward = RewardRepository::get_for_update_in_tx(&mut tx, reward_id)
            .await?
            .ok_or(EngineError::RewardNotFound(reward_id))?;

        if !reward.has_stock() {
            return Err(EngineError::OutOfStock(reward_id));
        }

        if state.energy < reward.cost as f64 {
            return Err(EngineError::InsufficientEnergy {
                required: reward.cost,
                available: state.energy,
            });
        }

        UserStateRepository::debit_energy_in_tx(&mut tx, reward.cost).await?;

        if reward.stock.is_some() {
            RewardRepository::decrement_stock_in_tx(&mut tx, reward_id).await?;
        }

        let event_no = generate_event_no();
        let event =
            RedemptionRepository::insert_in_tx(&mut tx, &event_no, reward_id, reward.cost).await?;

        if reward.effect == RewardEffect::GrantFreeze {
            UserStateRepository::increment_freezes_in_tx(&mut tx, 1).await?;
        }

        tx.commit().await?;

        info!(
            reward_id,
            event_no = %event.event_no,
            cost_paid = event.cost_paid,
            reward_name = %reward.name,
            "兑换成功"
        );

        Ok(event)
    }
}

/// 生成兑换流水号
///
/// 格式: RE{yyyyMMddHHmmss}{6位随机数}
/// 使用 UUID v4 的一部分作为随机数源
fn generate_event_no() -> String {
    let now = Utc::now();
    let uuid = Uuid::new_v4();
    let random = uuid.as_u128() % 1_000_000;
    format!("RE{}{:06}", now.format("%Y%m%d%H%M%S"), random)
}
