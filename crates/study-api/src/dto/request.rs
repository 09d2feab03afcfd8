//! 请求 DTO 定义

use serde::Deserialize;
use study_engine::RewardEffect;
use validator::Validate;

/// 学习结算请求
#[derive(Debug, Deserialize, Validate)]
pub struct LogStudyRequest {
    #[validate(range(min = 1, message = "学习时长必须为正数（分钟）"))]
    pub duration_minutes: i32,
    pub note: Option<String>,
}

/// 新增奖励请求
#[derive(Debug, Deserialize, Validate)]
pub struct CreateRewardRequest {
    #[validate(length(min = 1, max = 100, message = "奖励名称长度必须在1-100个字符之间"))]
    pub name: String,
    pub description: Option<String>,
    #[validate(range(min = 1, message = "兑换价格必须大于0"))]
    pub cost: i64,
    #[validate(range(min = 0, message = "库存不能为负数"))]
    pub stock: Option<i32>,
    #[serde(default)]
    pub effect: RewardEffect,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_study_request_validation() {
        let valid = LogStudyRequest {
            duration_minutes: 30,
            note: Some("复习线性代数".to_string()),
        };
        assert!(valid.validate().is_ok());

        let invalid = LogStudyRequest {
            duration_minutes: 0,
            note: None,
        };
        assert!(invalid.validate().is_err());

        let negative = LogStudyRequest {
            duration_minutes: -15,
            note: None,
        };
        assert!(negative.validate().is_err());
    }

    #[test]
    fn test_log_study_request_deserialization() {
        let req: LogStudyRequest =
            serde_json::from_str(r#"{"duration_minutes": 45, "note": "刷题"}"#).unwrap();
        assert_eq!(req.duration_minutes, 45);
        assert_eq!(req.note.as_deref(), Some("刷题"));
    }

    #[test]
    fn test_create_reward_request_validation() {
        let valid = CreateRewardRequest {
            name: "一杯奶茶".to_string(),
            description: None,
            cost: 50,
            stock: Some(3),
            effect: RewardEffect::None,
        };
        assert!(valid.validate().is_ok());

        let empty_name = CreateRewardRequest {
            name: String::new(),
            description: None,
            cost: 50,
            stock: None,
            effect: RewardEffect::None,
        };
        assert!(empty_name.validate().is_err());

        let zero_cost = CreateRewardRequest {
            name: "一杯奶茶".to_string(),
            description: None,
            cost: 0,
            stock: None,
            effect: RewardEffect::None,
        };
        assert!(zero_cost.validate().is_err());

        let negative_stock = CreateRewardRequest {
            name: "一杯奶茶".to_string(),
            description: None,
            cost: 50,
            stock: Some(-1),
            effect: RewardEffect::None,
        };
        assert!(negative_stock.validate().is_err());
    }

    #[test]
    fn test_create_reward_effect_defaults_to_none() {
        let req: CreateRewardRequest =
            serde_json::from_str(r#"{"name": "冻结卡", "cost": 30}"#).unwrap();
        assert_eq!(req.effect, RewardEffect::None);
    }
}
