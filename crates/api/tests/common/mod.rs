#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use gallery_core::image::Image;
use gallery_db::{ImageStore, Neighbors, StoreError, StoreResult};
use http_body_util::BodyExt;
use tower::ServiceExt;

use gallery_api::config::ServerConfig;
use gallery_api::router::build_app_router;
use gallery_api::state::AppState;

pub const IMAGE_BASE_URL: &str = "http://images.test/";

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        database_url: "sqlite::memory:".to_string(),
        image_base_url: IMAGE_BASE_URL.to_string(),
        request_timeout_secs: 30,
    }
}

/// In-memory [`ImageStore`] that counts calls and can be told to fail.
#[derive(Default)]
pub struct FakeImageStore {
    /// Kept sorted by id.
    images: Vec<Image>,
    /// Id handed out by `get_random_image`; the first image when unset.
    random_id: Option<String>,
    failing: bool,
    fail_random: bool,
    fail_prev_next: bool,
    pub get_image_calls: AtomicUsize,
    pub latest_calls: AtomicUsize,
    pub random_calls: AtomicUsize,
    pub prev_next_calls: AtomicUsize,
}

impl FakeImageStore {
    pub fn with_images(mut images: Vec<Image>) -> Self {
        images.sort_by(|a, b| a.id.cmp(&b.id));
        Self {
            images,
            ..Default::default()
        }
    }

    pub fn with_ids(ids: &[&str]) -> Self {
        Self::with_images(ids.iter().map(|id| Image::new(*id)).collect())
    }

    pub fn random_id(mut self, id: &str) -> Self {
        self.random_id = Some(id.to_string());
        self
    }

    /// Every call fails with a driver error.
    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Default::default()
        }
    }

    /// Only `get_random_image` fails; lookups by id still succeed.
    pub fn fail_random(mut self) -> Self {
        self.fail_random = true;
        self
    }

    /// Only `get_prev_next_images` fails; lookups by id still succeed.
    pub fn fail_prev_next(mut self) -> Self {
        self.fail_prev_next = true;
        self
    }

    pub fn calls(counter: &AtomicUsize) -> usize {
        counter.load(Ordering::SeqCst)
    }

    fn check(&self) -> StoreResult<()> {
        self.fail_if(self.failing)
    }

    fn fail_if(&self, fail: bool) -> StoreResult<()> {
        if fail {
            Err(StoreError::Database(sqlx::Error::PoolTimedOut))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl ImageStore for FakeImageStore {
    async fn get_image(&self, id: &str) -> StoreResult<Image> {
        self.get_image_calls.fetch_add(1, Ordering::SeqCst);
        self.check()?;
        self.images
            .iter()
            .find(|i| i.id == id)
            .cloned()
            .ok_or(StoreError::NotFound)
    }

    async fn get_latest_image(&self) -> StoreResult<Image> {
        self.latest_calls.fetch_add(1, Ordering::SeqCst);
        self.check()?;
        self.images.last().cloned().ok_or(StoreError::NotFound)
    }

    async fn get_random_image(&self) -> StoreResult<Image> {
        self.random_calls.fetch_add(1, Ordering::SeqCst);
        self.check()?;
        self.fail_if(self.fail_random)?;
        match &self.random_id {
            Some(id) => Ok(Image::new(id.clone())),
            None => self.images.first().cloned().ok_or(StoreError::NotFound),
        }
    }

    async fn get_prev_next_images(&self, id: &str) -> StoreResult<Neighbors> {
        self.prev_next_calls.fetch_add(1, Ordering::SeqCst);
        self.check()?;
        self.fail_if(self.fail_prev_next)?;
        Ok(Neighbors {
            previous: self.images.iter().rev().find(|i| i.id.as_str() < id).cloned(),
            next: self.images.iter().find(|i| i.id.as_str() > id).cloned(),
        })
    }

    async fn save_image(&self, _image: &Image) -> StoreResult<()> {
        panic!("page handlers never save images");
    }

    async fn health_check(&self) -> StoreResult<()> {
        self.check()
    }
}

/// Build the full application router around `store`.
pub fn build_test_app(store: Arc<FakeImageStore>) -> Router {
    let config = test_config();
    let state = AppState {
        store,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_text(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
