#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{HeaderMap, Method, Request, StatusCode, header},
};
use base64::{Engine, engine::general_purpose::STANDARD};
use http_body_util::BodyExt;
use maker_catalog::api::AppState;
use maker_catalog::config::{Config, SecurityConfig};
use serde_json::Value;
use tower::ServiceExt;

pub const ADMIN: (&str, &str) = ("rodri", "1234");
pub const USER: (&str, &str) = ("avila", "1234");
pub const INVITED: (&str, &str) = ("pedro", "1234");

pub fn temp_db_url() -> (String, PathBuf) {
    let path = std::env::temp_dir().join(format!(
        "maker-catalog-test-{}.db",
        uuid::Uuid::new_v4()
    ));
    (format!("sqlite:{}", path.display()), path)
}

/// Argon2 parameters cheap enough for tests.
pub fn test_security() -> SecurityConfig {
    SecurityConfig {
        argon2_memory_cost_kib: 1024,
        argon2_time_cost: 1,
        argon2_parallelism: 1,
    }
}

pub struct TestApp {
    pub router: Router,
    pub state: Arc<AppState>,
    db_path: PathBuf,
}

impl Drop for TestApp {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.db_path);
    }
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl TestResponse {
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).expect("response body is JSON")
    }

    pub fn text(&self) -> String {
        String::from_utf8(self.body.clone()).expect("response body is UTF-8")
    }
}

pub async fn spawn_app() -> TestApp {
    let (url, db_path) = temp_db_url();

    let mut config = Config::default();
    config.general.database_path = url;
    config.security = test_security();

    let state = maker_catalog::api::create_app_state_from_config(config, None)
        .await
        .expect("Failed to create app state");
    let router = maker_catalog::api::router(state.clone());

    TestApp {
        router,
        state,
        db_path,
    }
}

pub fn basic_auth((username, password): (&str, &str)) -> String {
    format!("Basic {}", STANDARD.encode(format!("{username}:{password}")))
}

impl TestApp {
    pub async fn send(
        &self,
        method: Method,
        uri: &str,
        auth: Option<(&str, &str)>,
        body: Option<Value>,
    ) -> TestResponse {
        self.send_raw(method, uri, auth, body.map(|b| b.to_string()))
            .await
    }

    pub async fn send_raw(
        &self,
        method: Method,
        uri: &str,
        auth: Option<(&str, &str)>,
        body: Option<String>,
    ) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(credentials) = auth {
            builder = builder.header(header::AUTHORIZATION, basic_auth(credentials));
        }

        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let headers = response.headers().clone();
        let body = response
            .into_body()
            .collect()
            .await
            .unwrap()
            .to_bytes()
            .to_vec();

        TestResponse {
            status,
            headers,
            body,
        }
    }

    pub async fn get(&self, uri: &str, auth: (&str, &str)) -> TestResponse {
        self.send(Method::GET, uri, Some(auth), None).await
    }

    /// Creates a maker as admin and returns its id.
    pub async fn create_maker(&self, name: &str) -> i64 {
        let response = self
            .send(
                Method::POST,
                "/api/maker/save",
                Some(ADMIN),
                Some(serde_json::json!({ "name": name })),
            )
            .await;
        assert_eq!(response.status, StatusCode::CREATED);
        response.json()["id"].as_i64().unwrap()
    }

    /// Creates a product as admin and returns its id.
    pub async fn create_product(&self, name: &str, price: &str, maker_id: i64) -> i64 {
        let response = self
            .send(
                Method::POST,
                "/api/product/save",
                Some(ADMIN),
                Some(serde_json::json!({
                    "name": name,
                    "price": price,
                    "maker": { "id": maker_id }
                })),
            )
            .await;
        assert_eq!(response.status, StatusCode::CREATED);
        response.json()["id"].as_i64().unwrap()
    }
}
