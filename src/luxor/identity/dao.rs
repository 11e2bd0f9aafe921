//! 身份数据访问层（DAO）
//!
//! 负责匿名用户 ID 的本地持久化，键值形式存放在 SQLite 的
//! `local_identity` 表中。

use anyhow::{Context, Result};
use sqlx::{Pool, Row, Sqlite};
use tracing::debug;

/// 身份 DAO（基于 sqlx）
pub struct IdentityDao {
    db: Pool<Sqlite>,
}

impl IdentityDao {
    /// 创建新的身份 DAO
    pub fn new(db: Pool<Sqlite>) -> Self {
        Self { db }
    }

    /// 按键读取持久化的值
    pub async fn get(&self, storage_key: &str) -> Result<Option<String>> {
        let row = sqlx::query(
            r#"
            SELECT storage_value FROM local_identity WHERE storage_key = ?
            "#,
        )
        .bind(storage_key)
        .fetch_optional(&self.db)
        .await
        .context("查询本地身份失败")?;

        let value = row.map(|m| m.get::<String, _>("storage_value"));
        debug!(
            "[IdentityDAO] 读取本地身份: key={}, 命中={}",
            storage_key,
            value.is_some()
        );
        Ok(value)
    }

    /// 插入或更新持久化的值
    pub async fn put(&self, storage_key: &str, storage_value: &str) -> Result<()> {
        let sql = r#"
            INSERT INTO local_identity (
                storage_key, storage_value, create_time
            ) VALUES (?, ?, ?)
            ON CONFLICT(storage_key) DO UPDATE SET
                storage_value = excluded.storage_value
        "#;

        sqlx::query(sql)
            .bind(storage_key)
            .bind(storage_value)
            .bind(chrono::Utc::now().timestamp_millis())
            .execute(&self.db)
            .await
            .context("持久化本地身份失败")?;
        Ok(())
    }
}
