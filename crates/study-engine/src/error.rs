//! 引擎错误类型定义

use study_shared::error::is_transient_db_error;
use thiserror::Error;

/// 引擎错误类型
#[derive(Debug, Error)]
pub enum EngineError {
    // ==================== 验证错误 ====================
    #[error("参数验证失败: {0}")]
    Validation(String),

    // ==================== 业务错误 ====================
    #[error("奖励不存在: {0}")]
    RewardNotFound(i64),

    #[error("能量不足: 需要 {required}, 当前 {available}")]
    InsufficientEnergy { required: i64, available: f64 },

    #[error("奖励库存不足: {0}")]
    OutOfStock(i64),

    // ==================== 系统错误 ====================
    #[error("数据库错误: {0}")]
    Database(#[from] sqlx::Error),

    #[error("内部错误: {0}")]
    Internal(String),
}

/// 错误结果类型别名
pub type Result<T> = std::result::Result<T, EngineError>;

impl EngineError {
    /// 获取错误码（用于 API 响应和日志检索）
    pub fn code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::RewardNotFound(_) => "REWARD_NOT_FOUND",
            Self::InsufficientEnergy { .. } => "INSUFFICIENT_ENERGY",
            Self::OutOfStock(_) => "OUT_OF_STOCK",
            Self::Database(_) => "DATABASE_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// 是否为可重试错误
    ///
    /// 仅瞬时存储故障可重试；业务错误重试只会得到相同结果。
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Database(e) => is_transient_db_error(e),
            _ => false,
        }
    }
}
