//! 学习结算 API 处理器

use axum::{Json, extract::State};
use chrono::Utc;
use tracing::info;
use validator::Validate;

use crate::{
    dto::{LogStudyRequest, LogStudyResponse},
    error::ApiError,
    state::AppState,
};

/// 记录一次学习并结算能量
///
/// POST /api/log_study
pub async fn log_study(
    State(state): State<AppState>,
    Json(req): Json<LogStudyRequest>,
) -> Result<Json<LogStudyResponse>, ApiError> {
    req.validate()?;

    let today = Utc::now().date_naive();
    let result = state
        .study
        .log_study(req.duration_minutes, req.note.as_deref(), today)
        .await?;

    info!(
        log_id = result.entry.id,
        total_earned = result.total_earned,
        "Study session logged"
    );

    Ok(Json(result.into()))
}
