//! API 错误类型定义
//!
//! 将引擎错误映射为带机器可读错误码的 HTTP 响应。

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use study_engine::EngineError;

/// API 错误类型
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    // 验证错误
    #[error("参数验证失败: {0}")]
    Validation(String),

    // 资源不存在
    #[error("奖励不存在: {0}")]
    RewardNotFound(i64),

    // 业务错误
    #[error("能量不足: 需要 {required}, 当前 {available}")]
    InsufficientEnergy { required: i64, available: f64 },
    #[error("奖励库存不足: {0}")]
    OutOfStock(i64),

    // 系统错误
    #[error("数据库错误: {0}")]
    Database(#[from] sqlx::Error),
    #[error("内部错误: {0}")]
    Internal(String),
}

impl ApiError {
    /// 返回对应的 HTTP 状态码
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,

            Self::RewardNotFound(_) => StatusCode::NOT_FOUND,

            Self::InsufficientEnergy { .. } | Self::OutOfStock(_) => StatusCode::CONFLICT,

            Self::Database(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// 返回错误码（用于 API 响应）
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::RewardNotFound(_) => "REWARD_NOT_FOUND",
            Self::InsufficientEnergy { .. } => "INSUFFICIENT_ENERGY",
            Self::OutOfStock(_) => "OUT_OF_STOCK",
            Self::Database(_) => "DATABASE_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        // 系统级错误只返回通用提示，详细信息仅记录日志，防止信息泄露
        let message = match &self {
            Self::Database(e) => {
                tracing::error!(error = %e, "数据库操作失败");
                "服务内部错误，请稍后重试".to_string()
            }
            Self::Internal(e) => {
                tracing::error!(error = %e, "内部错误");
                "服务内部错误，请稍后重试".to_string()
            }
            other => other.to_string(),
        };

        let body = json!({
            "success": false,
            "code": self.error_code(),
            "message": message,
            "data": serde_json::Value::Null
        });

        (status, axum::Json(body)).into_response()
    }
}

/// 从引擎错误转换
impl From<EngineError> for ApiError {
    fn from(err: EngineError) -> Self {
        match err {
            EngineError::Validation(msg) => Self::Validation(msg),
            EngineError::RewardNotFound(id) => Self::RewardNotFound(id),
            EngineError::InsufficientEnergy {
                required,
                available,
            } => Self::InsufficientEnergy {
                required,
                available,
            },
            EngineError::OutOfStock(id) => Self::OutOfStock(id),
            EngineError::Database(e) => Self::Database(e),
            EngineError::Internal(msg) => Self::Internal(msg),
        }
    }
}

/// 从 validator 错误转换
impl From<validator::ValidationErrors> for ApiError {
    fn from(errors: validator::ValidationErrors) -> Self {
        Self::Validation(errors.to_string())
    }
}

/// 服务层 Result 类型别名
pub type Result<T> = std::result::Result<T, ApiError>;
