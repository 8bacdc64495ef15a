//! API routes module

pub mod products;

use axum::Router;
use axum_helpers::health_router;

use crate::state::AppState;

/// Create all API routes
pub fn routes(state: &AppState) -> Router {
    Router::new()
        .nest("/products", products::router(state))
        .merge(health_router(state.config.app))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, Environment};
    use crate::openapi::ApiDoc;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use core_config::{app_info, server::ServerConfig};
    use http_body_util::BodyExt;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    fn app() -> Router {
        let state = AppState::new(Config {
            app: app_info!(),
            server: ServerConfig::default(),
            environment: Environment::Development,
        });
        axum_helpers::create_router::<ApiDoc>(routes(&state))
    }

    fn product(code: &str) -> Value {
        json!({
            "name": "A",
            "quantity": 1,
            "code_value": code,
            "is_published": true,
            "expiration": "01/01/2030",
            "price": 9.5
        })
    }

    async fn call(
        app: &Router,
        method: &str,
        uri: &str,
        body: Option<&Value>,
    ) -> (StatusCode, Vec<u8>) {
        let body = match body {
            Some(value) => Body::from(serde_json::to_vec(value).unwrap()),
            None => Body::empty(),
        };
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(body)
            .unwrap();

        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, bytes.to_vec())
    }

    fn text(bytes: &[u8]) -> &str {
        std::str::from_utf8(bytes).unwrap()
    }

    fn json_of(bytes: &[u8]) -> Value {
        serde_json::from_slice(bytes).unwrap()
    }

    #[tokio::test]
    async fn test_create_then_get() {
        let app = app();
        let input = product("X");

        let (status, body) = call(&app, "POST", "/products", Some(&input)).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(json_of(&body)["data"]["id"], 1);

        let (status, body) = call(&app, "GET", "/products/1", None).await;
        assert_eq!(status, StatusCode::OK);
        let fetched = json_of(&body);
        let data = &fetched["data"];
        for key in ["name", "quantity", "code_value", "is_published", "expiration", "price"] {
            assert_eq!(data[key], input[key], "{key}");
        }
    }

    #[tokio::test]
    async fn test_failed_create_keeps_counter() {
        let app = app();
        let mut missing_price = product("X");
        missing_price.as_object_mut().unwrap().remove("price");

        let (status, body) = call(&app, "POST", "/products", Some(&missing_price)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(text(&body).starts_with("invalid body"));

        let (status, body) = call(&app, "POST", "/products", Some(&product("X"))).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(json_of(&body)["data"]["id"], 1);
    }

    #[tokio::test]
    async fn test_duplicate_code() {
        let app = app();

        let (status, _) = call(&app, "POST", "/products", Some(&product("DUP"))).await;
        assert_eq!(status, StatusCode::CREATED);

        let (status, body) = call(&app, "POST", "/products", Some(&product("DUP"))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(text(&body).contains("product code already exists"));
    }

    #[tokio::test]
    async fn test_get_missing() {
        let app = app();

        let (status, body) = call(&app, "GET", "/products/999", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(text(&body), "product with the provided id not found");
    }

    #[tokio::test]
    async fn test_put_with_impossible_date() {
        let app = app();
        call(&app, "POST", "/products", Some(&product("X"))).await;

        let mut bad = product("X");
        bad["expiration"] = json!("99/99/9999");
        let (status, body) = call(&app, "PUT", "/products/1", Some(&bad)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            text(&body),
            "invalid body: field has an invalid format: expiration"
        );

        let (_, body) = call(&app, "GET", "/products/1", None).await;
        assert_eq!(json_of(&body)["data"]["expiration"], "01/01/2030");
    }

    #[tokio::test]
    async fn test_patch_code_conflict() {
        let app = app();
        call(&app, "POST", "/products", Some(&product("X"))).await;
        call(&app, "POST", "/products", Some(&product("Y"))).await;

        let patch = json!({"code_value": "X"});
        let (status, body) = call(&app, "PATCH", "/products/2", Some(&patch)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(text(&body).contains("product code already exists"));

        let (_, body) = call(&app, "GET", "/products/2", None).await;
        assert_eq!(json_of(&body)["data"]["code_value"], "Y");
    }

    #[tokio::test]
    async fn test_delete_then_get() {
        let app = app();
        call(&app, "POST", "/products", Some(&product("X"))).await;

        let (status, _) = call(&app, "DELETE", "/products/1", None).await;
        assert_eq!(status, StatusCode::OK);

        let (status, _) = call(&app, "GET", "/products/1", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_ping_and_health() {
        let app = app();

        let (status, body) = call(&app, "GET", "/ping", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(text(&body), "pong");

        let (status, body) = call(&app, "GET", "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json_of(&body)["status"], "healthy");
        assert_eq!(json_of(&body)["name"], "products_api");
    }

    #[tokio::test]
    async fn test_unknown_route_falls_back_to_404() {
        let app = app();

        let (status, body) = call(&app, "GET", "/nope", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(text(&body), "not found");
    }

    #[tokio::test]
    async fn test_openapi_document_nests_product_paths() {
        let app = app();

        let (status, body) = call(&app, "GET", "/api-docs/openapi.json", None).await;
        assert_eq!(status, StatusCode::OK);
        let doc = json_of(&body);
        assert_eq!(doc["info"]["title"], "Products API");
        assert!(doc["paths"].get("/products/{id}").is_some());
    }
}
