use axum::Router;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;

use crate::scores::database::ScoreDatabase;
use crate::scores::routes::{scores_router, ScoresState};

/// Configuration for the web server
#[derive(Debug, Clone)]
pub struct WebConfig {
    pub port: u16,
    pub host: String,
    /// Directory holding the built browser client.
    pub static_dir: String,
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            port: 5000,
            host: "0.0.0.0".to_string(),
            static_dir: "web".to_string(),
        }
    }
}

/// Serves the score API and the static client build
pub struct WebServer {
    config: WebConfig,
    db: ScoreDatabase,
}

impl WebServer {
    pub fn new(config: WebConfig, db: ScoreDatabase) -> Self {
        Self { config, db }
    }

    pub async fn start(&self) -> Result<(), Box<dyn std::error::Error>> {
        let app = self.create_router();
        let addr: SocketAddr = format!("{}:{}", self.config.host, self.config.port).parse()?;
        let listener = TcpListener::bind(addr).await?;

        log::info!(
            "Score server starting on http://localhost:{}",
            self.config.port
        );

        axum::serve(listener, app).await?;
        Ok(())
    }

    pub fn create_router(&self) -> Router {
        let state = Arc::new(ScoresState {
            db: self.db.clone(),
        });

        Router::new()
            .nest("/api/scores", scores_router(state))
            .fallback_service(ServeDir::new(&self.config.static_dir))
            .layer(
                CorsLayer::new()
                    .allow_origin(Any)
                    .allow_methods(Any)
                    .allow_headers(Any),
            )
    }
}

#[cfg(test)]
mod tests {
    use super::{WebConfig, WebServer};
    use crate::scores::database::ScoreDatabase;

    #[test]
    fn test_web_config_default() {
        let config = WebConfig::default();
        assert_eq!(config.port, 5000);
        assert_eq!(config.host, "0.0.0.0");
    }

    #[test]
    fn test_router_builds() {
        let db = ScoreDatabase::in_memory().unwrap();
        let server = WebServer::new(WebConfig::default(), db);
        let _router = server.create_router();
    }
}
