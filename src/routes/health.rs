//! Health check endpoint

use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub service: &'static str,
}

pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        service: "pdf-process-server",
    })
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}

#[cfg(test)]
mod tests {
    use axum_test::TestServer;

    use crate::config::Config;
    use crate::state::AppState;

    #[tokio::test]
    async fn health_reports_service_name() {
        let server = TestServer::new(crate::app(AppState::new(Config::default()))).unwrap();

        let response = server.get("/health").await;

        response.assert_status_ok();
        let json: serde_json::Value = response.json();
        assert_eq!(json["status"], "healthy");
        assert_eq!(json["service"], "pdf-process-server");
    }
}
