//! Handlers for the public gallery and the admin walk-through.

use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use gallery_core::encoding::decode_image_id;
use gallery_core::error::CoreError;
use gallery_core::image::Image;
use gallery_db::StoreError;

use crate::error::AppResult;
use crate::paths::image_path;
use crate::render::{self, AdminPage, ImagePage};
use crate::state::AppState;

/// 302 to `location`.
fn found(location: String) -> Response {
    (StatusCode::FOUND, [(header::LOCATION, location)]).into_response()
}

/// Decode the id token from the path. A token the router could not extract
/// (e.g. percent-encoded bytes that are not UTF-8) is as invalid as one
/// that is not base64.
fn decode_path_id(token: Result<Path<String>, PathRejection>) -> AppResult<String> {
    let Path(token) =
        token.map_err(|rejection| CoreError::Validation(rejection.body_text()))?;
    Ok(decode_image_id(&token)?)
}

/// Fetch an image, naming it in the not-found error.
async fn fetch_image(state: &AppState, id: String) -> AppResult<Image> {
    match state.store.get_image(&id).await {
        Ok(image) => Ok(image),
        Err(StoreError::NotFound) => Err(CoreError::NotFound { entity: "Image", id }.into()),
        Err(e) => Err(e.into()),
    }
}

/// GET /
///
/// Redirects to a random image.
pub async fn index(State(state): State<AppState>) -> AppResult<Response> {
    let image = state.store.get_random_image().await?;
    Ok(found(image_path(&image.id)))
}

/// GET /latest
pub async fn latest(State(state): State<AppState>) -> AppResult<Response> {
    let image = state.store.get_latest_image().await?;
    Ok(found(image_path(&image.id)))
}

/// GET /img/{token}
///
/// Shows one image with a link to another random one.
pub async fn image_view(
    State(state): State<AppState>,
    token: Result<Path<String>, PathRejection>,
) -> AppResult<Html<String>> {
    let id = decode_path_id(token)?;
    let image = fetch_image(&state, id).await?;
    let next = state.store.get_random_image().await?;

    tracing::debug!(image_id = %image.id, next_id = %next.id, "Rendering image page");

    let page = ImagePage::new(
        &image,
        &state.config.image_base_url,
        Some(image_path(&next.id)),
    );
    Ok(Html(render::image_page(&page).into_string()))
}

/// GET /admin/{token}
///
/// Shows one image with links to its chronological neighbours.
pub async fn admin_view(
    State(state): State<AppState>,
    token: Result<Path<String>, PathRejection>,
) -> AppResult<Html<String>> {
    let id = decode_path_id(token)?;
    let image = fetch_image(&state, id).await?;
    let neighbors = state.store.get_prev_next_images(&image.id).await?;

    let page = AdminPage::new(
        &image,
        &state.config.image_base_url,
        neighbors.previous.as_ref(),
        neighbors.next.as_ref(),
    );
    Ok(Html(render::admin_page(&page).into_string()))
}
