//! 路由配置模块
//!
//! 定义所有 REST API 端点的路由映射

use axum::{
    Router,
    routing::{get, post},
};

use crate::{handlers, state::AppState};

/// 构建打卡与状态路由
fn status_routes() -> Router<AppState> {
    Router::new()
        .route("/daily_check", post(handlers::checkin::daily_check))
        .route("/status", get(handlers::status::get_status))
}

/// 构建学习结算路由
fn study_routes() -> Router<AppState> {
    Router::new().route("/log_study", post(handlers::study::log_study))
}

/// 构建奖励与兑换路由
///
/// 包含奖励目录查询、自定义奖励创建、兑换执行和兑换历史查询
fn reward_routes() -> Router<AppState> {
    Router::new()
        .route("/rewards", get(handlers::reward::list_rewards))
        .route("/rewards", post(handlers::reward::create_reward))
        .route("/redeem/{id}", post(handlers::reward::redeem))
        .route("/redemptions", get(handlers::reward::list_redemptions))
}

/// 构建完整的 API 路由
///
/// 返回所有 API 路由（不含前缀，由调用方在 main.rs 中挂载）
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(status_routes())
        .merge(study_routes())
        .merge(reward_routes())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_routes_construction() {
        let _status = status_routes();
        let _study = study_routes();
        let _reward = reward_routes();
        let _api = api_routes();
    }
}
