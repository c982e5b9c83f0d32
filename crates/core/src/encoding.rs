//! URL-safe representation of image identifiers.
//!
//! Identifiers travel in paths as standard-alphabet base64 over the raw
//! stored id, so file names never appear verbatim in links.

use base64::{engine::general_purpose, Engine as _};

use crate::error::CoreError;

pub fn encode_image_id(id: &str) -> String {
    general_purpose::STANDARD.encode(id.as_bytes())
}

/// Decode a path token back into the stored identifier.
pub fn decode_image_id(token: &str) -> Result<String, CoreError> {
    let bytes = general_purpose::STANDARD
        .decode(token)
        .map_err(|e| CoreError::Validation(format!("invalid image id token: {e}")))?;
    String::from_utf8(bytes)
        .map_err(|e| CoreError::Validation(format!("image id is not UTF-8: {e}")))
}
