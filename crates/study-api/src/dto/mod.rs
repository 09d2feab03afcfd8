//! 请求和响应的数据传输对象
//!
//! 字段名沿用既有前端约定（snake_case），响应体为裸 JSON，
//! 错误响应统一走 `error::ApiError` 的信封格式。

mod request;
mod response;

pub use request::{CreateRewardRequest, LogStudyRequest};
pub use response::{
    LogStudyResponse, MessageResponse, RedemptionDto, RewardDto, StatusResponse, StudyLogDto,
};
