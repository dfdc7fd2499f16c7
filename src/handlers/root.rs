use axum::Json;
use serde::Serialize;
use tracing::info;

#[derive(Debug, Serialize)]
pub struct RootResponse {
    pub message: &'static str,
    pub service: &'static str,
}

/// GET / - fixed service identification payload
pub async fn root() -> Json<RootResponse> {
    info!("Root endpoint accessed");

    Json(RootResponse {
        message: "Hello World",
        service: "demo-service",
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_root_payload() {
        let Json(body) = root().await;
        assert_eq!(body.message, "Hello World");
        assert_eq!(body.service, "demo-service");
    }

    #[test]
    fn test_root_response_schema() {
        let body = RootResponse {
            message: "Hello World",
            service: "demo-service",
        };
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"message": "Hello World", "service": "demo-service"})
        );
    }
}
