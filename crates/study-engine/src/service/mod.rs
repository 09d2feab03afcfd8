//! 业务服务层
//!
//! 每个服务封装一类操作的完整事务流程。所有写操作都以
//! `user_state` 行锁为串行化点，先锁行、后校验、再落库。

pub mod checkin_service;
pub mod dto;
pub mod redemption_service;
pub mod status_service;
pub mod study_service;

pub use checkin_service::CheckinService;
pub use dto::{LogStudyResult, NewReward, StatusSnapshot};
pub use redemption_service::RedemptionService;
pub use status_service::StatusService;
pub use study_service::StudyService;
