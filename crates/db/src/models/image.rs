//! Row model for the `images` table.

use gallery_core::image::Image;
use sqlx::FromRow;

/// A row from the `images` table.
#[derive(Debug, Clone, FromRow)]
pub struct ImageRow {
    pub id: String,
    pub caption: Option<String>,
    pub location: Option<String>,
}

impl From<ImageRow> for Image {
    fn from(row: ImageRow) -> Self {
        Image {
            id: row.id,
            caption: row.caption,
            location: row.location,
        }
    }
}
