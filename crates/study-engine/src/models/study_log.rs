//! 学习记录实体

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// 学习记录
///
/// 创建后不可修改，只追加。`log_date` 是记录产生时的日历日，
/// 用于"今日记录"查询。
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct StudyLogEntry {
    pub id: i64,
    pub log_date: NaiveDate,
    /// 学习时长（分钟），恒为正
    pub duration_minutes: i32,
    pub note: Option<String>,
    /// 本条记录结算到的能量（已含加成）
    pub earned_energy: f64,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_study_log_serialization() {
        let entry = StudyLogEntry {
            id: 7,
            log_date: NaiveDate::from_ymd_opt(2025, 8, 1).unwrap(),
            duration_minutes: 90,
            note: Some("背单词".to_string()),
            earned_energy: 22.5,
            created_at: Utc::now(),
        };

        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["id"], 7);
        assert_eq!(json["duration_minutes"], 90);
        assert_eq!(json["note"], "背单词");
        assert_eq!(json["earned_energy"], 22.5);
    }
}
