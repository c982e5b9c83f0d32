//! Repository for the `images` table.

use gallery_core::image::Image;
use sqlx::SqlitePool;

use crate::models::image::ImageRow;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, caption, location";

/// Read and insert operations for images. Ordering is by `id`, which
/// starts with the capture date.
pub struct ImageRepo;

impl ImageRepo {
    /// Find an image by its identifier.
    pub async fn find_by_id(pool: &SqlitePool, id: &str) -> Result<Option<ImageRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM images WHERE id = ?");
        sqlx::query_as::<_, ImageRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// The image with the highest identifier.
    pub async fn find_latest(pool: &SqlitePool) -> Result<Option<ImageRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM images ORDER BY id DESC LIMIT 1");
        sqlx::query_as::<_, ImageRow>(&query)
            .fetch_optional(pool)
            .await
    }

    /// A uniformly random image.
    pub async fn find_random(pool: &SqlitePool) -> Result<Option<ImageRow>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM images \
             WHERE id = (SELECT id FROM images ORDER BY RANDOM() LIMIT 1)"
        );
        sqlx::query_as::<_, ImageRow>(&query)
            .fetch_optional(pool)
            .await
    }

    /// The closest image strictly before `id`.
    pub async fn find_previous(
        pool: &SqlitePool,
        id: &str,
    ) -> Result<Option<ImageRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM images WHERE id < ? ORDER BY id DESC LIMIT 1");
        sqlx::query_as::<_, ImageRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// The closest image strictly after `id`.
    pub async fn find_next(pool: &SqlitePool, id: &str) -> Result<Option<ImageRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM images WHERE id > ? ORDER BY id LIMIT 1");
        sqlx::query_as::<_, ImageRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a new image. Empty or absent caption/location are stored as NULL.
    pub async fn create(pool: &SqlitePool, image: &Image) -> Result<(), sqlx::Error> {
        sqlx::query("INSERT INTO images (id, caption, location) VALUES (?, ?, ?)")
            .bind(&image.id)
            .bind(non_empty(&image.caption))
            .bind(non_empty(&image.location))
            .execute(pool)
            .await?;
        Ok(())
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}
