//! 数据库仓储层
//!
//! 提供各实体的数据访问。带 `_in_tx` 后缀的静态方法在调用方的事务内执行，
//! 用于需要原子性的多步写入。

mod redemption_repo;
mod reward_repo;
mod study_log_repo;
mod user_state_repo;

pub use redemption_repo::RedemptionRepository;
pub use reward_repo::RewardRepository;
pub use study_log_repo::StudyLogRepository;
pub use user_state_repo::UserStateRepository;
