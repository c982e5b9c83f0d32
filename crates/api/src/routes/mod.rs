pub mod health;

use axum::routing::get;
use axum::Router;

use crate::handlers::gallery;
use crate::state::AppState;

/// Build the gallery page routes.
///
/// ```text
/// GET /                 -> index (302 to a random image)
/// GET /latest           -> latest (302 to the newest image)
/// GET /img/{token}      -> image_view
/// GET /admin/{token}    -> admin_view
/// ```
///
/// `token` is the base64 image id; the catch-all keeps tokens containing `/`
/// routable.
pub fn gallery_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(gallery::index))
        .route("/latest", get(gallery::latest))
        .route("/img/{*token}", get(gallery::image_view))
        .route("/admin/{*token}", get(gallery::admin_view))
}
