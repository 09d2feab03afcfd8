//! 学习记录仓储

use chrono::NaiveDate;
use sqlx::{PgConnection, PgPool};

use crate::error::Result;
use crate::models::StudyLogEntry;

/// 学习记录仓储
///
/// 记录只追加，不提供更新或删除。
pub struct StudyLogRepository {
    pool: PgPool,
}

impl StudyLogRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// 按日期查询记录，按创建时间升序
    pub async fn list_by_date(&self, date: NaiveDate) -> Result<Vec<StudyLogEntry>> {
        let entries = sqlx::query_as::<_, StudyLogEntry>(
            r#"
            SELECT id, log_date, duration_minutes, note, earned_energy, created_at
            FROM study_logs
            WHERE log_date = $1
            ORDER BY created_at ASC, id ASC
            "#,
        )
        .bind(date)
        .fetch_all(&self.pool)
        .await?;

        Ok(entries)
    }

    /// 在事务内按日期查询记录
    pub async fn list_by_date_in_tx(
        tx: &mut PgConnection,
        date: NaiveDate,
    ) -> Result<Vec<StudyLogEntry>> {
        let entries = sqlx::query_as::<_, StudyLogEntry>(
            r#"
            SELECT id, log_date, duration_minutes, note, earned_energy, created_at
            FROM study_logs
            WHERE log_date = $1
            ORDER BY created_at ASC, id ASC
            "#,
        )
        .bind(date)
        .fetch_all(tx)
        .await?;

        Ok(entries)
    }

    /// 在事务内追加一条学习记录
    pub async fn insert_in_tx(
        tx: &mut PgConnection,
        log_date: NaiveDate,
        duration_minutes: i32,
        note: Option<&str>,
        earned_energy: f64,
    ) -> Result<StudyLogEntry> {
        let entry = sqlx::query_as::<_, StudyLogEntry>(
            r#"
            INSERT INTO study_logs (log_date, duration_minutes, note, earned_energy)
            VALUES ($1, $2, $3, $4)
            RETURNING id, log_date, duration_minutes, note, earned_energy, created_at
            "#,
        )
        .bind(log_date)
        .bind(duration_minutes)
        .bind(note)
        .bind(earned_energy)
        .fetch_one(tx)
        .await?;

        Ok(entry)
    }
}
