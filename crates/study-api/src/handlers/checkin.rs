//! 每日打卡 API 处理器

use axum::{Json, extract::State};
use chrono::Utc;

use crate::{dto::MessageResponse, error::ApiError, state::AppState};

/// 执行每日打卡（同日幂等）
///
/// POST /api/daily_check
pub async fn daily_check(
    State(state): State<AppState>,
) -> Result<Json<MessageResponse>, ApiError> {
    let today = Utc::now().date_naive();
    state.checkin.daily_check(today).await?;

    Ok(Json(MessageResponse::new("打卡完成")))
}
