use std::{env, path::PathBuf};

pub const DEFAULT_STORAGE_KEY: &str = "mediaQuiz_Quizzes";
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;
const JSON_BODY_HEADROOM: usize = 64 * 1024;

#[derive(Clone, Debug)]
pub struct Config {
    pub storage_dir: PathBuf,
    pub storage_key: String,
    pub web_server_host: String,
    pub web_server_port: u16,
    pub cors_allowed_origin: Option<String>,
    pub max_upload_bytes: usize,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            storage_dir: env::var("STORAGE_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("./data")),
            storage_key: env::var("STORAGE_KEY")
                .unwrap_or_else(|_| DEFAULT_STORAGE_KEY.to_string()),
            web_server_host: env::var("WEB_SERVER_HOST")
                .unwrap_or_else(|_| "localhost".to_string()),
            web_server_port: env::var("WEB_SERVER_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            cors_allowed_origin: env::var("CORS_ALLOWED_ORIGIN")
                .ok()
                .filter(|origin| !origin.trim().is_empty()),
            max_upload_bytes: env::var("MAX_UPLOAD_BYTES")
                .ok()
                .and_then(|b| b.parse().ok())
                .unwrap_or(DEFAULT_MAX_UPLOAD_BYTES),
        }
    }

    /// Warns about settings that are fine locally but risky when the panel is exposed.
    pub fn log_warnings(&self) {
        if self.cors_allowed_origin.is_none() {
            log::warn!("CORS_ALLOWED_ORIGIN is not set; accepting requests from any origin");
        }
        if self.web_server_host == "0.0.0.0" {
            log::warn!("Admin API is bound to all interfaces and has no authentication");
        }
    }

    /// Largest JSON body accepted. A question carries up to two uploads as base64 `data:` URLs.
    pub fn max_json_bytes(&self) -> usize {
        self.max_upload_bytes.div_ceil(3) * 4 * 2 + JSON_BODY_HEADROOM
    }

    pub fn test_config() -> Self {
        Self {
            storage_dir: env::temp_dir().join("quiz-admin-test"),
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 8080,
            cors_allowed_origin: None,
            max_upload_bytes: 1024,
        }
    }
}
