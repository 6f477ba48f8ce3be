use std::sync::Arc;

use crate::config::AppConfig;
use crate::images::{ImageStore, MemoryImages};
use crate::session::SessionManager;

#[derive(Clone)]
pub struct AppState {
    pub sessions: Arc<SessionManager>,
    pub config: Arc<AppConfig>,
    pub images: Arc<dyn ImageStore>,
}

impl AppState {
    pub fn init() -> anyhow::Result<Self> {
        let config = Arc::new(AppConfig::from_env()?);
        let images =
            Arc::new(MemoryImages::new(&config.image_base_url)) as Arc<dyn ImageStore>;
        Ok(Self {
            sessions: Arc::new(SessionManager::new()),
            config,
            images,
        })
    }

    pub fn from_parts(
        sessions: Arc<SessionManager>,
        config: Arc<AppConfig>,
        images: Arc<dyn ImageStore>,
    ) -> Self {
        Self {
            sessions,
            config,
            images,
        }
    }

    #[cfg(test)]
    pub fn for_tests() -> Self {
        let config = Arc::new(AppConfig {
            host: "127.0.0.1".into(),
            port: 0,
            placeholder_image_url: "https://api.placeholder.com/400/300".into(),
            image_base_url: "/api/v1/images".into(),
        });
        let images = Arc::new(MemoryImages::new(&config.image_base_url)) as Arc<dyn ImageStore>;
        Self::from_parts(Arc::new(SessionManager::new()), config, images)
    }
}
