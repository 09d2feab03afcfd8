//! 状态查询 API 处理器

use axum::{Json, extract::State};
use chrono::Utc;

use crate::{dto::StatusResponse, error::ApiError, state::AppState};

/// 读取聚合状态
///
/// GET /api/status
pub async fn get_status(State(state): State<AppState>) -> Result<Json<StatusResponse>, ApiError> {
    let today = Utc::now().date_naive();
    let snapshot = state.status.get_status(today).await?;

    Ok(Json(snapshot.into()))
}
