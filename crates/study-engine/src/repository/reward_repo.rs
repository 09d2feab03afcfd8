//! 奖励目录仓储

use sqlx::{PgConnection, PgPool};

use crate::error::Result;
use crate::models::{RewardEffect, RewardItem};

/// 奖励目录仓储
pub struct RewardRepository {
    pool: PgPool,
}

impl RewardRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// 列出全部奖励，按 id 升序（稳定顺序）
    pub async fn list(&self) -> Result<Vec<RewardItem>> {
        let rewards = sqlx::query_as::<_, RewardItem>(
            r#"
            SELECT id, name, description, cost, stock, effect, created_at, updated_at
            FROM rewards
            ORDER BY id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rewards)
    }

    /// 获取单个奖励
    pub async fn get(&self, id: i64) -> Result<Option<RewardItem>> {
        let reward = sqlx::query_as::<_, RewardItem>(
            r#"
            SELECT id, name, description, cost, stock, effect, created_at, updated_at
            FROM rewards
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(reward)
    }

    /// 新增奖励
    pub async fn insert(
        &self,
        name: &str,
        description: Option<&str>,
        cost: i64,
        stock: Option<i32>,
        effect: RewardEffect,
    ) -> Result<RewardItem> {
        let reward = sqlx::query_as::<_, RewardItem>(
            r#"
            INSERT INTO rewards (name, description, cost, stock, effect)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, name, description, cost, stock, effect, created_at, updated_at
            "#,
        )
        .bind(name)
        .bind(description)
        .bind(cost)
        .bind(stock)
        .bind(effect)
        .fetch_one(&self.pool)
        .await?;

        Ok(reward)
    }

    /// 在事务内锁定并读取奖励（FOR UPDATE，库存扣减前必须持锁）
    pub async fn get_for_update_in_tx(
        tx: &mut PgConnection,
        id: i64,
    ) -> Result<Option<RewardItem>> {
        let reward = sqlx::query_as::<_, RewardItem>(
            r#"
            SELECT id, name, description, cost, stock, effect, created_at, updated_at
            FROM rewards
            WHERE id = $1
            FOR UPDATE
            "#,
        )
        .bind(id)
        .fetch_optional(tx)
        .await?;

        Ok(reward)
    }

    /// 在事务内扣减一件库存（不限量奖励不调用此方法）
    pub async fn decrement_stock_in_tx(tx: &mut PgConnection, id: i64) -> Result<()> {
        sqlx::query(
            r#"
            UPDATE rewards
            SET stock = stock - 1, updated_at = NOW()
            WHERE id = $1
            "#,
        )
        .bind(id)
        .execute(tx)
        .await?;

        Ok(())
    }
}
