//! 响应 DTO 定义
//!
//! 所有 REST API 的响应体结构。字段名与既有前端约定一致，
//! 是 API 契约的一部分，变更即破坏性变更。

use chrono::{DateTime, Utc};
use serde::Serialize;
use study_engine::dto::{LogStudyResult, StatusSnapshot};
use study_engine::{RedemptionHistoryEntry, RewardEffect, RewardItem, StudyLogEntry};

/// 简单消息响应
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// 学习记录响应 DTO（状态接口内嵌）
#[derive(Debug, Clone, Serialize)]
pub struct StudyLogDto {
    pub id: i64,
    pub duration_minutes: i32,
    pub note: Option<String>,
    pub earned_energy: f64,
}

impl From<StudyLogEntry> for StudyLogDto {
    fn from(entry: StudyLogEntry) -> Self {
        Self {
            id: entry.id,
            duration_minutes: entry.duration_minutes,
            note: entry.note,
            earned_energy: entry.earned_energy,
        }
    }
}

/// 聚合状态响应 DTO
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub energy: f64,
    pub streak: i32,
    pub freezes: i32,
    pub multiplier: f64,
    pub today_hours: f64,
    pub goal: f64,
    pub logs: Vec<StudyLogDto>,
}

impl From<StatusSnapshot> for StatusResponse {
    fn from(snapshot: StatusSnapshot) -> Self {
        Self {
            energy: snapshot.energy,
            streak: snapshot.streak,
            freezes: snapshot.freezes,
            multiplier: snapshot.multiplier,
            today_hours: snapshot.today_hours,
            goal: snapshot.goal,
            logs: snapshot.logs.into_iter().map(Into::into).collect(),
        }
    }
}

/// 学习结算响应 DTO
#[derive(Debug, Serialize)]
pub struct LogStudyResponse {
    pub total_earned: f64,
    pub bonus_multiplier: f64,
}

impl From<LogStudyResult> for LogStudyResponse {
    fn from(result: LogStudyResult) -> Self {
        Self {
            total_earned: result.total_earned,
            bonus_multiplier: result.bonus_multiplier,
        }
    }
}

/// 奖励目录响应 DTO
#[derive(Debug, Clone, Serialize)]
pub struct RewardDto {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub cost: i64,
    pub stock: Option<i32>,
    pub effect: RewardEffect,
}

impl From<RewardItem> for RewardDto {
    fn from(item: RewardItem) -> Self {
        Self {
            id: item.id,
            name: item.name,
            description: item.description,
            cost: item.cost,
            stock: item.stock,
            effect: item.effect,
        }
    }
}

/// 兑换历史响应 DTO
#[derive(Debug, Clone, Serialize)]
pub struct RedemptionDto {
    pub id: i64,
    pub event_no: String,
    pub reward_id: i64,
    pub reward_name: String,
    pub cost_paid: i64,
    pub created_at: DateTime<Utc>,
}

impl From<RedemptionHistoryEntry> for RedemptionDto {
    fn from(entry: RedemptionHistoryEntry) -> Self {
        Self {
            id: entry.id,
            event_no: entry.event_no,
            reward_id: entry.reward_id,
            reward_name: entry.reward_name,
            cost_paid: entry.cost_paid,
            created_at: entry.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    /// 状态接口的字段名是前端直接消费的契约，必须逐一锁定
    #[test]
    fn test_status_response_wire_format() {
        let response = StatusResponse {
            energy: 85.5,
            streak: 7,
            freezes: 1,
            multiplier: 1.5,
            today_hours: 2.5,
            goal: 4.0,
            logs: vec![StudyLogDto {
                id: 3,
                duration_minutes: 60,
                note: Some("背单词".to_string()),
                earned_energy: 15.0,
            }],
        };

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["energy"], 85.5);
        assert_eq!(json["streak"], 7);
        assert_eq!(json["freezes"], 1);
        assert_eq!(json["multiplier"], 1.5);
        assert_eq!(json["today_hours"], 2.5);
        assert_eq!(json["goal"], 4.0);
        assert_eq!(json["logs"][0]["id"], 3);
        assert_eq!(json["logs"][0]["note"], "背单词");
        assert_eq!(json["logs"][0]["earned_energy"], 15.0);
    }

    #[test]
    fn test_log_study_response_wire_format() {
        let response = LogStudyResponse {
            total_earned: 15.0,
            bonus_multiplier: 1.5,
        };

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["total_earned"], 15.0);
        assert_eq!(json["bonus_multiplier"], 1.5);
    }

    #[test]
    fn test_reward_dto_wire_format() {
        let dto = RewardDto {
            id: 1,
            name: "连胜冻结卡".to_string(),
            description: None,
            cost: 30,
            stock: None,
            effect: RewardEffect::GrantFreeze,
        };

        let json = serde_json::to_value(&dto).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["name"], "连胜冻结卡");
        assert_eq!(json["cost"], 30);
        assert_eq!(json["stock"], serde_json::Value::Null);
        assert_eq!(json["effect"], "grant_freeze");
    }

    #[test]
    fn test_study_log_dto_from_entry() {
        let entry = StudyLogEntry {
            id: 5,
            log_date: NaiveDate::from_ymd_opt(2025, 8, 1).unwrap(),
            duration_minutes: 90,
            note: None,
            earned_energy: 22.5,
            created_at: Utc::now(),
        };

        let dto: StudyLogDto = entry.into();
        assert_eq!(dto.id, 5);
        assert_eq!(dto.duration_minutes, 90);
        assert_eq!(dto.earned_energy, 22.5);
    }
}
