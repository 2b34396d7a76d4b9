pub mod health;

use axum::{
    http::{header, HeaderName, Method},
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};

use crate::generation::handlers;
use crate::state::AppState;

/// Browser clients call from another origin, so every route answers pre-flight.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            HeaderName::from_static("x-client-info"),
            HeaderName::from_static("apikey"),
        ])
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Same path as the hosted function, so existing clients only swap the host.
        .route(
            "/functions/v1/generate-content",
            post(handlers::handle_generate_content),
        )
        .route(
            "/api/v1/generate-content",
            post(handlers::handle_generate_content),
        )
        .route("/api/v1/platforms", get(handlers::handle_list_platforms))
        .route(
            "/api/v1/brand-voices",
            get(handlers::handle_list_brand_voices),
        )
        .layer(cors_layer())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::time::Duration;

    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use serde_json::Value;
    use tower::ServiceExt;

    use crate::config::{Config, GenerationBackend};
    use crate::generation::generator::ContentGenerator;
    use crate::generation::strategy::TemplateStrategy;

    fn test_router() -> Router {
        let config = Config {
            port: 0,
            rust_log: "info".to_string(),
            backend: GenerationBackend::Template,
            anthropic_api_url: "http://localhost/v1/messages".to_string(),
            generation_timeout: Duration::from_secs(30),
            max_variations: 10,
        };
        let generator = ContentGenerator::new(
            Arc::new(TemplateStrategy),
            config.max_variations,
            config.generation_timeout,
        );
        build_router(AppState { generator })
    }

    fn post_json(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_health_endpoint_returns_ok() {
        let response = test_router()
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["status"], "ok");
        assert_eq!(body["backend"], "template");
        assert!(body.get("maxVariations").is_none());
    }

    #[tokio::test]
    async fn test_generate_content_success() {
        let request_body = serde_json::json!({
            "title": "Launch",
            "platform": "twitter",
            "creativeBrief": "We shipped it",
            "targetAudience": "",
            "brandVoice": "bold",
            "variations": 3
        });

        let response = test_router()
            .oneshot(post_json(
                "/functions/v1/generate-content",
                &request_body.to_string(),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        let variations = body["variations"].as_array().unwrap();
        assert_eq!(variations.len(), 3);
        assert!(variations[0].as_str().unwrap().starts_with("𝕏 Launch"));
        assert_eq!(body["maxChars"], 280);
        assert_eq!(body["details"][2]["pattern"], "tone-framed");
        assert_eq!(body["details"][0]["exceedsLimit"], false);
    }

    #[tokio::test]
    async fn test_api_alias_route_generates() {
        let response = test_router()
            .oneshot(post_json(
                "/api/v1/generate-content",
                r#"{"title":"T","platform":"linkedin","creativeBrief":"B"}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["variations"].as_array().unwrap().len(), 3);
        assert_eq!(body["tone"], "engaging");
    }

    #[tokio::test]
    async fn test_missing_title_is_400_with_error_string() {
        let response = test_router()
            .oneshot(post_json(
                "/functions/v1/generate-content",
                r#"{"platform":"twitter","creativeBrief":"B","variations":3}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert!(body["error"].as_str().unwrap().contains("title"));
    }

    #[tokio::test]
    async fn test_zero_variations_is_400() {
        let response = test_router()
            .oneshot(post_json(
                "/functions/v1/generate-content",
                r#"{"title":"T","platform":"twitter","creativeBrief":"B","variations":0}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_malformed_json_is_400_with_error_string() {
        let response = test_router()
            .oneshot(post_json("/functions/v1/generate-content", "{not json"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["code"], "VALIDATION_ERROR");
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn test_preflight_allows_any_origin() {
        let response = test_router()
            .oneshot(
                Request::builder()
                    .method("OPTIONS")
                    .uri("/functions/v1/generate-content")
                    .header("origin", "https://app.example.com")
                    .header("access-control-request-method", "POST")
                    .header(
                        "access-control-request-headers",
                        "content-type,authorization,x-client-info,apikey",
                    )
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let headers = response.headers();
        assert_eq!(headers["access-control-allow-origin"], "*");

        let methods = headers["access-control-allow-methods"].to_str().unwrap();
        for method in ["GET", "POST", "PUT", "DELETE", "OPTIONS"] {
            assert!(methods.contains(method), "missing {method} in {methods}");
        }

        let allowed = headers["access-control-allow-headers"]
            .to_str()
            .unwrap()
            .to_ascii_lowercase();
        for name in ["content-type", "authorization", "x-client-info", "apikey"] {
            assert!(allowed.contains(name), "missing {name} in {allowed}");
        }
    }

    #[tokio::test]
    async fn test_error_responses_carry_cors_header() {
        let mut request = post_json("/functions/v1/generate-content", "{}");
        request
            .headers_mut()
            .insert("origin", "https://app.example.com".parse().unwrap());

        let response = test_router().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(response.headers()["access-control-allow-origin"], "*");
    }

    #[tokio::test]
    async fn test_list_platforms() {
        let response = test_router()
            .oneshot(
                Request::builder()
                    .uri("/api/v1/platforms")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        let platforms = body.as_array().unwrap();
        assert_eq!(platforms.len(), 4);
        assert_eq!(platforms[0]["key"], "instagram");
        assert_eq!(platforms[0]["maxChars"], 2200);
    }

    #[tokio::test]
    async fn test_list_brand_voices() {
        let response = test_router()
            .oneshot(
                Request::builder()
                    .uri("/api/v1/brand-voices")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body[2]["key"], "bold");
        assert_eq!(body[2]["tone"], "confident and impactful");
    }
}
