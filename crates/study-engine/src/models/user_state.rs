//! 用户状态实体
//!
//! 单用户系统，数据库中固定存放一行（id = 1）。

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// 用户状态
///
/// 能量余额、连胜进度与当日累计，只由能量经济（log_study）、
/// 兑换（redeem）和每日打卡（daily_check）修改。
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct UserState {
    pub id: i16,
    /// 能量余额，恒 >= 0（数据库 CHECK 约束兜底）
    pub energy: f64,
    /// 当前连胜天数
    pub streak: i32,
    /// 持有的连胜冻结数量
    pub freezes: i32,
    /// 最近一次每日打卡对应的日历日
    pub last_check_date: NaiveDate,
    /// 当日累计学习小时数，打卡进入新的一天时清零
    pub today_hours: f64,
    /// 每日学习目标（小时），仅用于展示
    pub goal_hours: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
