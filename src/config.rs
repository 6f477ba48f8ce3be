#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// Image URL stored on meals posted without an upload.
    pub placeholder_image_url: String,
    /// Prefix for URLs handed out by the in-memory image store.
    pub image_base_url: String,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let host = std::env::var("APP_HOST").unwrap_or_else(|_| "0.0.0.0".into());
        let port = std::env::var("APP_PORT")
            .ok()
            .and_then(|v| v.parse::<u16>().ok())
            .unwrap_or(8080);
        let placeholder_image_url = std::env::var("PLACEHOLDER_IMAGE_URL")
            .unwrap_or_else(|_| "https://api.placeholder.com/400/300".into());
        let image_base_url =
            std::env::var("IMAGE_BASE_URL").unwrap_or_else(|_| "/api/v1/images".into());
        Ok(Self {
            host,
            port,
            placeholder_image_url,
            image_base_url,
        })
    }
}
