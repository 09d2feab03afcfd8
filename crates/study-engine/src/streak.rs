//! 连胜状态转移求值
//!
//! 每日打卡对连胜/冻结的影响用纯函数求值，服务层在事务内应用结果。
//! 规则：
//! - 同一天重复打卡：完全不变（幂等保证）
//! - 恰好隔一天：连胜 +1
//! - 隔多天（漏打卡）：每漏一天消耗一张冻结；冻结足够则连胜保持原值，
//!   冻结不足则连胜清零且剩余冻结全部消耗

use chrono::NaiveDate;

/// 打卡求值结果分类
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreakOutcome {
    /// 同日重复打卡，无任何变化
    Unchanged,
    /// 连续打卡，连胜 +1
    Extended,
    /// 冻结覆盖了全部漏卡天数，连胜保持
    Frozen { consumed: i32 },
    /// 冻结不足，连胜清零
    Reset { consumed: i32 },
}

/// 打卡后的目标状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreakTransition {
    pub streak: i32,
    pub freezes: i32,
    pub outcome: StreakOutcome,
}

impl StreakTransition {
    /// 是否需要落库（同日重复打卡不产生任何写入）
    pub fn is_noop(&self) -> bool {
        matches!(self.outcome, StreakOutcome::Unchanged)
    }
}

/// 求值一次每日打卡
///
/// `last_check` 为上次打卡日，`today` 为本次打卡日。
/// `today <= last_check`（重复调用或时钟回拨）一律视为无变化。
pub fn evaluate_daily_check(
    last_check: NaiveDate,
    today: NaiveDate,
    streak: i32,
    freezes: i32,
) -> StreakTransition {
    let days = (today - last_check).num_days();

    if days <= 0 {
        return StreakTransition {
            streak,
            freezes,
            outcome: StreakOutcome::Unchanged,
        };
    }

    if days == 1 {
        return StreakTransition {
            streak: streak + 1,
            freezes,
            outcome: StreakOutcome::Extended,
        };
    }

    // 漏打卡天数 = 间隔天数 - 1
    let missed = days - 1;

    if i64::from(freezes) >= missed {
        let consumed = missed as i32;
        StreakTransition {
            streak,
            freezes: freezes - consumed,
            outcome: StreakOutcome::Frozen { consumed },
        }
    } else {
        StreakTransition {
            streak: 0,
            freezes: 0,
            outcome: StreakOutcome::Reset { consumed: freezes },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_same_day_is_noop() {
        let today = date(2025, 8, 1);
        let t = evaluate_daily_check(today, today, 5, 2);

        // 幂等保证：同日重复打卡不得改动连胜或冻结
        assert_eq!(t.streak, 5);
        assert_eq!(t.freezes, 2);
        assert_eq!(t.outcome, StreakOutcome::Unchanged);
        assert!(t.is_noop());
    }

    #[test]
    fn test_clock_rollback_is_noop() {
        // 时钟回拨（today 早于 last_check）同样不得改动状态
        let t = evaluate_daily_check(date(2025, 8, 2), date(2025, 8, 1), 5, 2);
        assert_eq!(t.streak, 5);
        assert_eq!(t.freezes, 2);
        assert!(t.is_noop());
    }

    #[test]
    fn test_next_day_extends_streak() {
        let t = evaluate_daily_check(date(2025, 8, 1), date(2025, 8, 2), 5, 2);

        // 连胜 +1 且不触碰冻结
        assert_eq!(t.streak, 6);
        assert_eq!(t.freezes, 2);
        assert_eq!(t.outcome, StreakOutcome::Extended);
    }

    #[test]
    fn test_next_day_from_zero() {
        let t = evaluate_daily_check(date(2025, 8, 1), date(2025, 8, 2), 0, 0);
        assert_eq!(t.streak, 1);
        assert_eq!(t.outcome, StreakOutcome::Extended);
    }

    #[test]
    fn test_gap_fully_covered_by_freezes() {
        // 8/1 打卡后 8/4 才回来：漏 8/2、8/3 两天，冻结刚好 2 张
        let t = evaluate_daily_check(date(2025, 8, 1), date(2025, 8, 4), 5, 2);

        assert_eq!(t.streak, 5);
        assert_eq!(t.freezes, 0);
        assert_eq!(t.outcome, StreakOutcome::Frozen { consumed: 2 });
    }

    #[test]
    fn test_gap_partially_covered_resets() {
        // 漏 3 天但只有 2 张冻结：连胜清零，剩余冻结全部消耗
        let t = evaluate_daily_check(date(2025, 8, 1), date(2025, 8, 5), 9, 2);

        assert_eq!(t.streak, 0);
        assert_eq!(t.freezes, 0);
        assert_eq!(t.outcome, StreakOutcome::Reset { consumed: 2 });
    }

    #[test]
    fn test_gap_without_freezes_resets() {
        let t = evaluate_daily_check(date(2025, 8, 1), date(2025, 8, 3), 7, 0);

        assert_eq!(t.streak, 0);
        assert_eq!(t.freezes, 0);
        assert_eq!(t.outcome, StreakOutcome::Reset { consumed: 0 });
    }

    #[test]
    fn test_single_missed_day_consumes_one_freeze() {
        // 漏 1 天、有 3 张冻结：只消耗 1 张
        let t = evaluate_daily_check(date(2025, 8, 1), date(2025, 8, 3), 7, 3);

        assert_eq!(t.streak, 7);
        assert_eq!(t.freezes, 2);
        assert_eq!(t.outcome, StreakOutcome::Frozen { consumed: 1 });
    }

    #[test]
    fn test_freeze_preserves_but_does_not_extend() {
        // 冻结保护连胜原值，不会顺带 +1
        let t = evaluate_daily_check(date(2025, 8, 1), date(2025, 8, 3), 10, 1);
        assert_eq!(t.streak, 10);
    }

    #[test]
    fn test_very_long_gap_does_not_overflow() {
        // 跨年长间隔：漏卡天数超出 i32 冻结数量也能正确走 Reset 分支
        let t = evaluate_daily_check(date(2020, 1, 1), date(2025, 8, 1), 100, 5);
        assert_eq!(t.streak, 0);
        assert_eq!(t.freezes, 0);
        assert_eq!(t.outcome, StreakOutcome::Reset { consumed: 5 });
    }
}
