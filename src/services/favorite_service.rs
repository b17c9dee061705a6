use crate::db::{is_foreign_key_violation, is_unique_violation, Database};
use crate::error::{AppError, Result};
use crate::models::{Favorite, FavoriteKind};
use crate::services::{CatalogService, UserService};

pub const USER_NOT_FOUND: &str = "El usuario no existe";

#[derive(Debug)]
pub enum AddFavoriteOutcome {
    Created(Favorite),
    AlreadyExists,
}

pub struct FavoriteService {
    db: Database,
}

impl FavoriteService {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    pub async fn list_for_user(&self, user_id: i64) -> Result<Vec<Favorite>> {
        let sql = format!(
            "SELECT {} FROM favorites WHERE user_id = $1 ORDER BY id",
            Favorite::COLUMNS
        );

        let favorites = sqlx::query_as::<_, Favorite>(&sql)
            .bind(user_id)
            .fetch_all(&self.db.pool)
            .await?;

        Ok(favorites)
    }

    /// Store a favorite unless the (user, target) pair already exists.
    ///
    /// Uniqueness is decided by the table's UNIQUE constraints, so concurrent
    /// duplicates resolve to one row and `AlreadyExists` for the others.
    pub async fn add(
        &self,
        user_id: i64,
        kind: FavoriteKind,
        target_id: i64,
    ) -> Result<AddFavoriteOutcome> {
        self.ensure_refs(user_id, kind, target_id).await?;

        let sql = format!(
            "INSERT INTO favorites (user_id, {}) VALUES ($1, $2) RETURNING {}",
            kind.column(),
            Favorite::COLUMNS
        );

        let inserted = sqlx::query_as::<_, Favorite>(&sql)
            .bind(user_id)
            .bind(target_id)
            .fetch_one(&self.db.pool)
            .await;

        match inserted {
            Ok(favorite) => {
                tracing::info!(
                    favorite_id = favorite.id,
                    user_id,
                    target = ?favorite.target(),
                    "Favorite created"
                );
                Ok(AddFavoriteOutcome::Created(favorite))
            }
            Err(e) if is_unique_violation(&e) => {
                tracing::debug!(user_id, ?kind, target_id, "Favorite already exists");
                Ok(AddFavoriteOutcome::AlreadyExists)
            }
            // A referenced row vanished between the existence check and the insert.
            Err(e) if is_foreign_key_violation(&e) => {
                Err(AppError::NotFound(kind.not_found().to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Returns whether a row was deleted.
    pub async fn remove(&self, user_id: i64, kind: FavoriteKind, target_id: i64) -> Result<bool> {
        let sql = format!(
            "DELETE FROM favorites WHERE user_id = $1 AND {} = $2",
            kind.column()
        );

        let result = sqlx::query(&sql)
            .bind(user_id)
            .bind(target_id)
            .execute(&self.db.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn ensure_refs(&self, user_id: i64, kind: FavoriteKind, target_id: i64) -> Result<()> {
        if !UserService::new(self.db.clone()).exists(user_id).await? {
            return Err(AppError::NotFound(USER_NOT_FOUND.to_string()));
        }

        if !CatalogService::new(self.db.clone())
            .exists(kind.table(), target_id)
            .await?
        {
            return Err(AppError::NotFound(kind.not_found().to_string()));
        }

        Ok(())
    }
}
