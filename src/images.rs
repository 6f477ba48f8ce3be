use std::collections::HashMap;
use std::sync::RwLock;

use axum::{
    async_trait,
    extract::{Path, State},
    http::{header, HeaderMap},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use bytes::Bytes;
use tracing::instrument;
use uuid::Uuid;

use crate::error::AppError;
use crate::state::AppState;

/// Where uploaded meal images live. Durable object storage would plug in
/// behind this trait; the shipped implementation keeps everything in memory.
#[async_trait]
pub trait ImageStore: Send + Sync {
    /// Stores the image and returns the URL to reference it by.
    async fn put(&self, body: Bytes, content_type: &str) -> anyhow::Result<String>;
    async fn get(&self, key: Uuid) -> anyhow::Result<Option<(Bytes, String)>>;
}

pub struct MemoryImages {
    objects: RwLock<HashMap<Uuid, (Bytes, String)>>,
    base_url: String,
}

impl MemoryImages {
    pub fn new(base_url: &str) -> Self {
        Self {
            objects: RwLock::new(HashMap::new()),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl ImageStore for MemoryImages {
    async fn put(&self, body: Bytes, content_type: &str) -> anyhow::Result<String> {
        let key = Uuid::new_v4();
        let mut objects = self
            .objects
            .write()
            .map_err(|_| anyhow::anyhow!("image store lock poisoned"))?;
        objects.insert(key, (body, content_type.to_string()));
        Ok(format!("{}/{}", self.base_url, key))
    }

    async fn get(&self, key: Uuid) -> anyhow::Result<Option<(Bytes, String)>> {
        let objects = self
            .objects
            .read()
            .map_err(|_| anyhow::anyhow!("image store lock poisoned"))?;
        Ok(objects.get(&key).cloned())
    }
}

pub fn router() -> Router<AppState> {
    Router::new().route("/images/:id", get(get_image))
}

#[instrument(skip(state))]
async fn get_image(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Response, AppError> {
    let (body, content_type) = state
        .images
        .get(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("image {id} not found")))?;
    let mut headers = HeaderMap::new();
    headers.insert(
        header::CONTENT_TYPE,
        content_type
            .parse()
            .map_err(|_| AppError::BadRequest("stored content type is not a valid header".into()))?,
    );
    Ok((headers, body).into_response())
}
