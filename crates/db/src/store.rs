//! The [`ImageStore`] abstraction and its SQLite implementation.

use async_trait::async_trait;
use gallery_core::image::Image;

use crate::repositories::ImageRepo;
use crate::DbPool;

/// Failures surfaced by an [`ImageStore`].
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// No row matched the query.
    #[error("image not found")]
    NotFound,

    /// Any other database or driver failure.
    #[error("Database error: {0}")]
    Database(#[source] sqlx::Error),
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => StoreError::NotFound,
            other => StoreError::Database(other),
        }
    }
}

pub type StoreResult<T> = Result<T, StoreError>;

/// The images immediately before and after a given identifier.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Neighbors {
    pub previous: Option<Image>,
    pub next: Option<Image>,
}

/// Data access for gallery images.
///
/// Single-image lookups report a missing row as [`StoreError::NotFound`];
/// neighbour lookups report a missing side as `None`.
#[async_trait]
pub trait ImageStore: Send + Sync {
    async fn get_image(&self, id: &str) -> StoreResult<Image>;

    async fn get_latest_image(&self) -> StoreResult<Image>;

    async fn get_random_image(&self) -> StoreResult<Image>;

    async fn get_prev_next_images(&self, id: &str) -> StoreResult<Neighbors>;

    async fn save_image(&self, image: &Image) -> StoreResult<()>;

    /// Whether the backing database is reachable.
    async fn health_check(&self) -> StoreResult<()> {
        Ok(())
    }
}

/// [`ImageStore`] backed by a SQLite connection pool.
#[derive(Clone)]
pub struct SqliteImageStore {
    pool: DbPool,
}

impl SqliteImageStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }
}

#[async_trait]
impl ImageStore for SqliteImageStore {
    async fn get_image(&self, id: &str) -> StoreResult<Image> {
        let row = ImageRepo::find_by_id(&self.pool, id).await?;
        row.map(Image::from).ok_or(StoreError::NotFound)
    }

    async fn get_latest_image(&self) -> StoreResult<Image> {
        let row = ImageRepo::find_latest(&self.pool).await?;
        row.map(Image::from).ok_or(StoreError::NotFound)
    }

    async fn get_random_image(&self) -> StoreResult<Image> {
        let row = ImageRepo::find_random(&self.pool).await?;
        row.map(Image::from).ok_or(StoreError::NotFound)
    }

    async fn get_prev_next_images(&self, id: &str) -> StoreResult<Neighbors> {
        let previous = ImageRepo::find_previous(&self.pool, id).await?;
        let next = ImageRepo::find_next(&self.pool, id).await?;
        Ok(Neighbors {
            previous: previous.map(Image::from),
            next: next.map(Image::from),
        })
    }

    async fn save_image(&self, image: &Image) -> StoreResult<()> {
        ImageRepo::create(&self.pool, image).await?;
        tracing::debug!(image_id = %image.id, "Image saved");
        Ok(())
    }

    async fn health_check(&self) -> StoreResult<()> {
        crate::health_check(&self.pool).await?;
        Ok(())
    }
}
