//! 用户状态仓储
//!
//! 单行表的读写。所有修改路径都先通过 `get_for_update` 锁行，
//! 保证余额检查与扣减之间不会插入其他写入。

use chrono::NaiveDate;
use sqlx::{PgConnection, PgPool};

use crate::error::Result;
use crate::models::UserState;

/// 用户状态仓储
pub struct UserStateRepository {
    pool: PgPool,
}

impl UserStateRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// 首次使用时创建默认状态行（已存在则不做任何事）
    pub async fn ensure_exists(&self, goal_hours: f64, today: NaiveDate) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO user_state (id, goal_hours, last_check_date)
            VALUES (1, $1, $2)
            ON CONFLICT (id) DO NOTHING
            "#,
        )
        .bind(goal_hours)
        .bind(today)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// 读取当前状态
    pub async fn get(&self) -> Result<Option<UserState>> {
        let state = sqlx::query_as::<_, UserState>(
            r#"
            SELECT id, energy, streak, freezes, last_check_date,
                   today_hours, goal_hours, created_at, updated_at
            FROM user_state
            WHERE id = 1
            "#,
        )
        .fetch_optional(&self.pool)
        .await?;

        Ok(state)
    }

    /// 在事务内读取状态（当前连接可复用同一事务）
    pub async fn get_in_tx(tx: &mut PgConnection) -> Result<Option<UserState>> {
        let state = sqlx::query_as::<_, UserState>(
            r#"
            SELECT id, energy, streak, freezes, last_check_date,
                   today_hours, goal_hours, created_at, updated_at
            FROM user_state
            WHERE id = 1
            "#,
        )
        .fetch_optional(tx)
        .await?;

        Ok(state)
    }

    /// 在事务内锁定并读取状态（FOR UPDATE）
    pub async fn get_for_update(tx: &mut PgConnection) -> Result<Option<UserState>> {
        let state = sqlx::query_as::<_, UserState>(
            r#"
            SELECT id, energy, streak, freezes, last_check_date,
                   today_hours, goal_hours, created_at, updated_at
            FROM user_state
            WHERE id = 1
            FOR UPDATE
            "#,
        )
        .fetch_optional(tx)
        .await?;

        Ok(state)
    }

    /// 在事务内应用每日打卡结果
    ///
    /// 写入新的连胜/冻结值，推进打卡日并清零当日累计。
    pub async fn apply_daily_check_in_tx(
        tx: &mut PgConnection,
        streak: i32,
        freezes: i32,
        today: NaiveDate,
    ) -> Result<()> {
        sqlx::query(
            r#"
            UPDATE user_state
            SET streak = $1, freezes = $2, last_check_date = $3,
                today_hours = 0, updated_at = NOW()
            WHERE id = 1
            "#,
        )
        .bind(streak)
        .bind(freezes)
        .bind(today)
        .execute(tx)
        .await?;

        Ok(())
    }

    /// 在事务内结算一次学习：增加能量和当日累计小时数
    pub async fn credit_energy_in_tx(
        tx: &mut PgConnection,
        earned_energy: f64,
        hours: f64,
    ) -> Result<()> {
        sqlx::query(
            r#"
            UPDATE user_state
            SET energy = energy + $1, today_hours = today_hours + $2, updated_at = NOW()
            WHERE id = 1
            "#,
        )
        .bind(earned_energy)
        .bind(hours)
        .execute(tx)
        .await?;

        Ok(())
    }

    /// 在事务内扣减能量
    pub async fn debit_energy_in_tx(tx: &mut PgConnection, cost: i64) -> Result<()> {
        sqlx::query(
            r#"
            UPDATE user_state
            SET energy = energy - $1, updated_at = NOW()
            WHERE id = 1
            "#,
        )
        .bind(cost as f64)
        .execute(tx)
        .await?;

        Ok(())
    }

    /// 在事务内增加冻结数量
    pub async fn increment_freezes_in_tx(tx: &mut PgConnection, delta: i32) -> Result<()> {
        sqlx::query(
            r#"
            UPDATE user_state
            SET freezes = freezes + $1, updated_at = NOW()
            WHERE id = 1
            "#,
        )
        .bind(delta)
        .execute(tx)
        .await?;

        Ok(())
    }
}
