use std::sync::Arc;

use axum::{Extension, Json};
use serde::{Deserialize, Serialize};

use crate::config::AppConfig;

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct HealthResponse {
    pub status: String,
    pub environment: String,
    pub storage_dir: String,
    pub port: u16,
}

impl From<&AppConfig> for HealthResponse {
    fn from(config: &AppConfig) -> Self {
        Self {
            status: "ok".to_string(),
            environment: config.environment.as_str().to_string(),
            storage_dir: config.storage_dir.display().to_string(),
            port: config.port,
        }
    }
}

/// GET /api/health
pub async fn health_handler(Extension(config): Extension<Arc<AppConfig>>) -> Json<HealthResponse> {
    Json(HealthResponse::from(config.as_ref()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Environment;
    use std::path::PathBuf;

    #[tokio::test]
    async fn test_health_reports_config() {
        let config = Arc::new(AppConfig {
            port: 3001,
            storage_dir: PathBuf::from("/app/data"),
            environment: Environment::Production,
        });

        let Json(body) = health_handler(Extension(config)).await;

        assert_eq!(body.status, "ok");
        assert_eq!(body.environment, "production");
        assert_eq!(body.storage_dir, "/app/data");
        assert_eq!(body.port, 3001);
    }

    #[tokio::test]
    async fn test_health_wire_format() {
        let config = Arc::new(AppConfig::default());

        let Json(body) = health_handler(Extension(config)).await;
        let json = serde_json::to_value(&body).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "status": "ok",
                "environment": "development",
                "storage_dir": "./data",
                "port": 3001,
            })
        );
    }
}
