//! PostgreSQL implementation of the link repository.

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use std::sync::Arc;

use crate::domain::entities::{Click, NewShortLink, ShortLink};
use crate::domain::repositories::{LinkRepository, LinkStats};
use crate::error::{AppError, map_sqlx_error};

/// PostgreSQL repository for short link storage and retrieval.
///
/// Uses SQLx prepared statements for SQL injection protection. Both write
/// operations are single statements, so their atomicity guarantees come from
/// the database rather than from explicit locking:
/// `INSERT ... ON CONFLICT DO NOTHING` is the conditional insert, and a
/// data-modifying CTE bumps the counter and appends the click together.
pub struct PgLinkRepository {
    pool: Arc<PgPool>,
}

impl PgLinkRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

fn link_from_row(row: &PgRow) -> Result<ShortLink, AppError> {
    Ok(ShortLink {
        short_code: row.try_get("short_code").map_err(map_sqlx_error)?,
        original_url: row.try_get("original_url").map_err(map_sqlx_error)?,
        created_at: row.try_get("created_at").map_err(map_sqlx_error)?,
        expires_at: row.try_get("expires_at").map_err(map_sqlx_error)?,
        click_count: row.try_get("click_count").map_err(map_sqlx_error)?,
    })
}

fn click_from_row(row: &PgRow) -> Result<Click, AppError> {
    Ok(Click {
        clicked_at: row.try_get("clicked_at").map_err(map_sqlx_error)?,
        referrer: row.try_get("referrer").map_err(map_sqlx_error)?,
        location: row.try_get("location").map_err(map_sqlx_error)?,
    })
}

#[async_trait]
impl LinkRepository for PgLinkRepository {
    async fn insert(&self, new_link: NewShortLink) -> Result<ShortLink, AppError> {
        let row = sqlx::query(
            r#"
            INSERT INTO short_links (short_code, original_url, created_at, expires_at)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (short_code) DO NOTHING
            RETURNING short_code, original_url, created_at, expires_at, click_count
            "#,
        )
        .bind(&new_link.short_code)
        .bind(&new_link.original_url)
        .bind(new_link.created_at)
        .bind(new_link.expires_at)
        .fetch_optional(self.pool.as_ref())
        .await
        .map_err(map_sqlx_error)?;

        match row {
            Some(row) => link_from_row(&row),
            // DO NOTHING returns no row exactly when the code is taken
            None => Err(AppError::conflict("Shortcode already exists.")),
        }
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<ShortLink>, AppError> {
        let row = sqlx::query(
            r#"
            SELECT short_code, original_url, created_at, expires_at, click_count
            FROM short_links
            WHERE short_code = $1
            "#,
        )
        .bind(code)
        .fetch_optional(self.pool.as_ref())
        .await
        .map_err(map_sqlx_error)?;

        row.as_ref().map(link_from_row).transpose()
    }

    async fn record_click(&self, code: &str, click: Click) -> Result<i64, AppError> {
        // The UPDATE takes the row lock, so concurrent clicks on one code
        // serialize there; the click row lands in the same statement and the
        // post-increment count comes back with it.
        let row = sqlx::query(
            r#"
            WITH bumped AS (
                UPDATE short_links
                SET click_count = click_count + 1
                WHERE short_code = $1
                RETURNING id, click_count
            ), recorded AS (
                INSERT INTO link_clicks (link_id, clicked_at, referrer, location)
                SELECT id, $2, $3, $4 FROM bumped
            )
            SELECT click_count FROM bumped
            "#,
        )
        .bind(code)
        .bind(click.clicked_at)
        .bind(&click.referrer)
        .bind(&click.location)
        .fetch_optional(self.pool.as_ref())
        .await
        .map_err(map_sqlx_error)?;

        match row {
            Some(row) => row.try_get("click_count").map_err(map_sqlx_error),
            None => Err(AppError::not_found("Shortcode not found")),
        }
    }

    async fn find_stats(&self, code: &str) -> Result<Option<LinkStats>, AppError> {
        // REPEATABLE READ pins both reads to one snapshot, keeping the
        // counter equal to the number of click rows even while clicks
        // keep landing.
        let mut tx = self.pool.begin().await.map_err(map_sqlx_error)?;

        sqlx::query("SET TRANSACTION ISOLATION LEVEL REPEATABLE READ")
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx_error)?;

        let link_row = sqlx::query(
            r#"
            SELECT id, short_code, original_url, created_at, expires_at, click_count
            FROM short_links
            WHERE short_code = $1
            "#,
        )
        .bind(code)
        .fetch_optional(&mut *tx)
        .await
        .map_err(map_sqlx_error)?;

        let Some(link_row) = link_row else {
            tx.commit().await.map_err(map_sqlx_error)?;
            return Ok(None);
        };

        let link_id: i64 = link_row.try_get("id").map_err(map_sqlx_error)?;
        let link = link_from_row(&link_row)?;

        let click_rows = sqlx::query(
            r#"
            SELECT clicked_at, referrer, location
            FROM link_clicks
            WHERE link_id = $1
            ORDER BY id
            "#,
        )
        .bind(link_id)
        .fetch_all(&mut *tx)
        .await
        .map_err(map_sqlx_error)?;

        tx.commit().await.map_err(map_sqlx_error)?;

        let clicks = click_rows
            .iter()
            .map(click_from_row)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Some(LinkStats { link, clicks }))
    }

    async fn health_check(&self) -> bool {
        sqlx::query("SELECT 1")
            .execute(self.pool.as_ref())
            .await
            .is_ok()
    }
}
