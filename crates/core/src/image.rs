//! The `Image` entity: one photograph's metadata.
//!
//! Well-formed identifiers start with the capture date as `YYYYMMDD`
//! (e.g. `20040901_001.jpg`), which is what orders the admin walk and
//! what the display date is derived from.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Length of the `YYYYMMDD` prefix.
const ID_DATE_LEN: usize = 8;

/// `chrono` format of the identifier's date prefix.
const ID_DATE_FORMAT: &str = "%Y%m%d";

/// Human-readable date layout, e.g. `September 2004`.
const DISPLAY_DATE_FORMAT: &str = "%B %Y";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image {
    pub id: String,
    pub caption: Option<String>,
    pub location: Option<String>,
}

impl Image {
    /// An image with only an identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            caption: None,
            location: None,
        }
    }

    /// Derive the capture date from the identifier's `YYYYMMDD` prefix.
    ///
    /// Fails when the identifier is shorter than eight characters or the
    /// prefix is not a valid calendar date.
    pub fn time_from_id(&self) -> Result<NaiveDate, CoreError> {
        let prefix = self
            .id
            .get(..ID_DATE_LEN)
            .filter(|p| p.bytes().all(|b| b.is_ascii_digit()))
            .ok_or_else(|| {
                CoreError::Validation(format!("image id '{}' has no date prefix", self.id))
            })?;

        NaiveDate::parse_from_str(prefix, ID_DATE_FORMAT).map_err(|e| {
            CoreError::Validation(format!("image id '{}' has an invalid date: {e}", self.id))
        })
    }

    /// The capture date as `<Month> <Year>`, or empty when it cannot be derived.
    pub fn display_date(&self) -> String {
        self.time_from_id()
            .map(|date| date.format(DISPLAY_DATE_FORMAT).to_string())
            .unwrap_or_default()
    }

    pub fn caption_text(&self) -> &str {
        self.caption.as_deref().unwrap_or_default()
    }

    pub fn location_text(&self) -> &str {
        self.location.as_deref().unwrap_or_default()
    }
}
