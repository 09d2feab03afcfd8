//! 服务层数据传输对象

use serde::{Deserialize, Serialize};

use crate::models::{RewardEffect, StudyLogEntry};

/// 学习结算结果
#[derive(Debug, Clone, Serialize)]
pub struct LogStudyResult {
    /// 落库的学习记录（其 earned_energy 即本次结算额）
    pub entry: StudyLogEntry,
    /// 本次结算到的能量，与 entry.earned_energy 相同，供调用方直接展示
    pub total_earned: f64,
    /// 结算时应用的加成倍率
    pub bonus_multiplier: f64,
}

/// 状态聚合视图
///
/// `multiplier` 与学习结算使用同一求值，展示值始终等于
/// 下一次 log_study 实际应用的倍率。
#[derive(Debug, Clone, Serialize)]
pub struct StatusSnapshot {
    pub energy: f64,
    pub streak: i32,
    pub freezes: i32,
    pub multiplier: f64,
    pub today_hours: f64,
    pub goal: f64,
    pub logs: Vec<StudyLogEntry>,
}

/// 新增奖励的输入
#[derive(Debug, Clone, Deserialize)]
pub struct NewReward {
    pub name: String,
    pub description: Option<String>,
    pub cost: i64,
    pub stock: Option<i32>,
    #[serde(default)]
    pub effect: RewardEffect,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Utc};

    #[test]
    fn test_status_snapshot_serialization() {
        let snapshot = StatusSnapshot {
            energy: 85.0,
            streak: 7,
            freezes: 1,
            multiplier: 1.5,
            today_hours: 2.5,
            goal: 4.0,
            logs: vec![StudyLogEntry {
                id: 1,
                log_date: NaiveDate::from_ymd_opt(2025, 8, 1).unwrap(),
                duration_minutes: 150,
                note: None,
                earned_energy: 37.5,
                created_at: Utc::now(),
            }],
        };

        let json = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(json["energy"], 85.0);
        assert_eq!(json["multiplier"], 1.5);
        assert_eq!(json["goal"], 4.0);
        assert_eq!(json["logs"][0]["earned_energy"], 37.5);
    }

    #[test]
    fn test_new_reward_effect_defaults_to_none() {
        let new: NewReward =
            serde_json::from_str(r#"{"name": "奶茶", "cost": 50, "stock": 3}"#).unwrap();
        assert_eq!(new.effect, RewardEffect::None);
        assert_eq!(new.stock, Some(3));
    }
}
