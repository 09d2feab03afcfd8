//! 能量结算求值
//!
//! 加成倍率与能量产出都是 `EconomyConfig` 的确定性函数，
//! 状态聚合与学习结算共用同一套求值，保证展示值与实际结算一致。

use study_shared::config::EconomyConfig;

/// 计算当前连胜对应的加成倍率
///
/// 取档位表中 `min_streak <= streak` 的最高倍率；未命中任何档位时为 1.0。
/// 档位表不要求有序。
pub fn bonus_multiplier(config: &EconomyConfig, streak: i32) -> f64 {
    config
        .bonus_tiers
        .iter()
        .filter(|tier| tier.min_streak <= streak)
        .map(|tier| tier.multiplier)
        .fold(1.0, f64::max)
}

/// 按时长和倍率结算能量
///
/// earned = base_rate * (分钟 / 60) * 倍率
pub fn energy_earned(config: &EconomyConfig, duration_minutes: i32, multiplier: f64) -> f64 {
    config.base_rate * (f64::from(duration_minutes) / 60.0) * multiplier
}

#[cfg(test)]
mod tests {
    use super::*;
    use study_shared::config::BonusTier;

    fn test_config() -> EconomyConfig {
        EconomyConfig {
            base_rate: 10.0,
            daily_goal_hours: 4.0,
            bonus_tiers: vec![
                BonusTier {
                    min_streak: 7,
                    multiplier: 1.5,
                },
                BonusTier {
                    min_streak: 30,
                    multiplier: 2.0,
                },
            ],
        }
    }

    #[test]
    fn test_multiplier_below_first_tier() {
        let config = test_config();
        assert_eq!(bonus_multiplier(&config, 0), 1.0);
        assert_eq!(bonus_multiplier(&config, 6), 1.0);
    }

    #[test]
    fn test_multiplier_tier_boundaries() {
        let config = test_config();
        assert_eq!(bonus_multiplier(&config, 7), 1.5);
        assert_eq!(bonus_multiplier(&config, 29), 1.5);
        assert_eq!(bonus_multiplier(&config, 30), 2.0);
        // 封顶于最高档位
        assert_eq!(bonus_multiplier(&config, 365), 2.0);
    }

    #[test]
    fn test_multiplier_monotonic_in_streak() {
        let config = test_config();
        let mut prev = 0.0;
        for streak in 0..60 {
            let m = bonus_multiplier(&config, streak);
            assert!(m >= prev, "倍率必须随连胜单调不减: streak={streak}");
            prev = m;
        }
    }

    #[test]
    fn test_multiplier_unsorted_tiers() {
        // 档位表乱序时仍取正确的最高倍率
        let config = EconomyConfig {
            base_rate: 10.0,
            daily_goal_hours: 4.0,
            bonus_tiers: vec![
                BonusTier {
                    min_streak: 30,
                    multiplier: 2.0,
                },
                BonusTier {
                    min_streak: 7,
                    multiplier: 1.5,
                },
            ],
        };
        assert_eq!(bonus_multiplier(&config, 10), 1.5);
        assert_eq!(bonus_multiplier(&config, 31), 2.0);
    }

    #[test]
    fn test_multiplier_empty_tiers() {
        let config = EconomyConfig {
            base_rate: 10.0,
            daily_goal_hours: 4.0,
            bonus_tiers: vec![],
        };
        assert_eq!(bonus_multiplier(&config, 100), 1.0);
    }

    #[test]
    fn test_energy_one_hour_equals_rate_times_multiplier() {
        let config = test_config();
        // 学习 60 分钟：earned == base_rate * multiplier
        assert_eq!(energy_earned(&config, 60, 1.0), 10.0);
        assert_eq!(energy_earned(&config, 60, 1.5), 15.0);
    }

    #[test]
    fn test_energy_proportional_to_duration() {
        let config = test_config();
        assert_eq!(energy_earned(&config, 30, 1.0), 5.0);
        assert_eq!(energy_earned(&config, 90, 2.0), 30.0);
    }

    #[test]
    fn test_energy_small_duration_is_positive() {
        let config = test_config();
        let earned = energy_earned(&config, 1, 1.0);
        assert!(earned > 0.0);
    }
}
