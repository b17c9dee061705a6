use crate::db::Database;
use crate::error::{AppError, Result};
use crate::models::CatalogEntry;

pub struct CatalogService {
    db: Database,
}

impl CatalogService {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    pub async fn list<T: CatalogEntry>(&self) -> Result<Vec<T>> {
        let sql = format!("SELECT {} FROM {} ORDER BY id", T::COLUMNS, T::TABLE);

        let rows = sqlx::query_as::<_, T>(&sql)
            .fetch_all(&self.db.pool)
            .await?;

        Ok(rows)
    }

    /// Fetch one entry, or `NotFound` carrying the entry's message.
    pub async fn get<T: CatalogEntry>(&self, id: i64) -> Result<T> {
        let sql = format!("SELECT {} FROM {} WHERE id = $1", T::COLUMNS, T::TABLE);

        sqlx::query_as::<_, T>(&sql)
            .bind(id)
            .fetch_optional(&self.db.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(T::NOT_FOUND.to_string()))
    }

    pub async fn exists(&self, table: &str, id: i64) -> Result<bool> {
        let sql = format!("SELECT COUNT(*) FROM {} WHERE id = $1", table);

        let count: i64 = sqlx::query_scalar(&sql)
            .bind(id)
            .fetch_one(&self.db.pool)
            .await?;

        Ok(count > 0)
    }
}
