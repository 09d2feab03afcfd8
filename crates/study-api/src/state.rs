//! 应用状态定义
//!
//! 包含 Axum 路由共享的应用状态

use std::sync::Arc;

use sqlx::PgPool;
use study_engine::repository::{
    RedemptionRepository, RewardRepository, UserStateRepository,
};
use study_engine::{CheckinService, RedemptionService, StatusService, StudyService};
use study_shared::config::EconomyConfig;

/// Axum 应用共享状态
///
/// 包含数据库连接池和各业务服务，通过 Arc 在 handler 间共享
#[derive(Clone)]
pub struct AppState {
    /// PostgreSQL 连接池
    pub pool: PgPool,
    pub checkin: Arc<CheckinService>,
    pub study: Arc<StudyService>,
    pub redemption: Arc<RedemptionService>,
    pub status: Arc<StatusService>,
}

impl AppState {
    /// 构建全部仓储和服务
    pub fn new(pool: PgPool, economy: EconomyConfig) -> Self {
        let user_states = Arc::new(UserStateRepository::new(pool.clone()));
        let rewards = Arc::new(RewardRepository::new(pool.clone()));
        let redemptions = Arc::new(RedemptionRepository::new(pool.clone()));

        let checkin = Arc::new(CheckinService::new(
            pool.clone(),
            user_states.clone(),
            economy.clone(),
        ));
        let study = Arc::new(StudyService::new(
            pool.clone(),
            user_states.clone(),
            economy.clone(),
        ));
        let redemption = Arc::new(RedemptionService::new(
            pool.clone(),
            user_states.clone(),
            rewards,
            redemptions,
            economy.clone(),
        ));
        let status = Arc::new(StatusService::new(pool.clone(), user_states, economy));

        Self {
            pool,
            checkin,
            study,
            redemption,
            status,
        }
    }
}
