//! 奖励目录与兑换 API 处理器

use axum::{
    Json,
    extract::{Path, State},
};
use chrono::Utc;
use tracing::info;
use validator::Validate;

use crate::{
    dto::{CreateRewardRequest, MessageResponse, RedemptionDto, RewardDto},
    error::ApiError,
    state::AppState,
};
use study_engine::dto::NewReward;

/// 兑换历史默认返回条数
const REDEMPTION_HISTORY_LIMIT: i64 = 50;

/// 获取奖励目录（按 id 稳定排序）
///
/// GET /api/rewards
pub async fn list_rewards(State(state): State<AppState>) -> Result<Json<Vec<RewardDto>>, ApiError> {
    let rewards = state.redemption.list_rewards().await?;

    Ok(Json(rewards.into_iter().map(Into::into).collect()))
}

/// 新增自定义奖励
///
/// POST /api/rewards
pub async fn create_reward(
    State(state): State<AppState>,
    Json(req): Json<CreateRewardRequest>,
) -> Result<Json<RewardDto>, ApiError> {
    req.validate()?;

    let reward = state
        .redemption
        .create_reward(NewReward {
            name: req.name,
            description: req.description,
            cost: req.cost,
            stock: req.stock,
            effect: req.effect,
        })
        .await?;

    info!(reward_id = reward.id, "Reward created");

    Ok(Json(reward.into()))
}

/// 兑换奖励
///
/// POST /api/redeem/{id}
pub async fn redeem(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<MessageResponse>, ApiError> {
    let today = Utc::now().date_naive();
    let event = state.redemption.redeem(id, today).await?;

    info!(reward_id = id, event_no = %event.event_no, "Reward redeemed");

    Ok(Json(MessageResponse::new("兑换成功")))
}

/// 查询最近兑换历史
///
/// GET /api/redemptions
pub async fn list_redemptions(
    State(state): State<AppState>,
) -> Result<Json<Vec<RedemptionDto>>, ApiError> {
    let history = state
        .redemption
        .list_history(REDEMPTION_HISTORY_LIMIT)
        .await?;

    Ok(Json(history.into_iter().map(Into::into).collect()))
}
