//! Public URL paths for image and admin pages.

use gallery_core::encoding::encode_image_id;

pub const IMAGE_PATH_BASE: &str = "/img/";
pub const ADMIN_PATH_BASE: &str = "/admin/";

/// `/img/<base64 id>`
pub fn image_path(image_id: &str) -> String {
    format!("{IMAGE_PATH_BASE}{}", encode_image_id(image_id))
}

/// `/admin/<base64 id>`
pub fn admin_path(image_id: &str) -> String {
    format!("{ADMIN_PATH_BASE}{}", encode_image_id(image_id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_carry_encoded_id() {
        assert_eq!(image_path("1234"), "/img/MTIzNA==");
        assert_eq!(admin_path("1234"), "/admin/MTIzNA==");
    }
}
