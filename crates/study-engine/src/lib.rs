//! 学习激励引擎
//!
//! 实现学习打卡应用的后端状态机：连胜与冻结、能量经济、学习流水账本、
//! 奖励目录与兑换。
//!
//! ## 核心功能
//!
//! - **连胜引擎**：每日打卡推进连胜，漏打卡时消耗冻结卡保护连胜
//! - **能量经济**：按学习时长结算能量，连胜档位提供加成倍率
//! - **学习账本**：只追加的学习记录，支持按日查询
//! - **奖励兑换**：能量兑换奖励目录中的道具，扣减余额并留审计流水
//! - **状态聚合**：组装展示层消费的完整状态视图
//!
//! ## 模块结构
//!
//! - `models`: 领域模型定义
//! - `error`: 错误类型定义
//! - `streak`: 连胜状态转移的纯函数求值
//! - `economy`: 能量结算的纯函数求值
//! - `repository`: 数据库仓储层
//! - `service`: 业务服务层
//!
//! ## 并发模型
//!
//! 所有对用户状态的修改都在单个事务内执行，并以 `SELECT ... FOR UPDATE`
//! 锁定 user_state 行，保证余额检查与扣减之间不会插入其他写入。

pub mod economy;
pub mod error;
pub mod models;
pub mod repository;
pub mod service;
pub mod streak;

pub use error::{EngineError, Result};
pub use models::{
    RedemptionEvent, RedemptionHistoryEntry, RewardEffect, RewardItem, StudyLogEntry, UserState,
};
pub use service::{
    CheckinService, NewReward, RedemptionService, StatusService, StatusSnapshot, StudyService,
    dto,
};
pub use streak::{StreakOutcome, StreakTransition};
