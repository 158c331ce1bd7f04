//! Router fixtures over in-memory repositories.

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use std::sync::Arc;
use tower::ServiceExt;

use yggdrasil::config::{AppConfig, StorageBackend};
use yggdrasil::models::{Item, User};
use yggdrasil::repositories::{InMemoryItemRepository, InMemoryUserRepository};
use yggdrasil::web::{create_app, state::AppState};

pub const SUPERUSER_TOKEN: &str = "superuser-token";
pub const ALICE_TOKEN: &str = "alice-token";
pub const BOB_TOKEN: &str = "bob-token";
pub const INACTIVE_TOKEN: &str = "inactive-token";

pub const SUPERUSER_ID: i64 = 100;
pub const ALICE_ID: i64 = 1;
pub const BOB_ID: i64 = 2;
pub const INACTIVE_ID: i64 = 3;

pub struct TestApp {
    pub router: Router,
    pub items: Arc<InMemoryItemRepository>,
}

fn user(id: i64, email: &str, is_active: bool, is_superuser: bool) -> User {
    User {
        id,
        email: email.to_string(),
        full_name: None,
        is_active,
        is_superuser,
    }
}

impl TestApp {
    /// Superuser S, regular users Alice (1) and Bob (2), inactive user (3).
    /// No items.
    pub fn new() -> Self {
        let mut config = AppConfig::default();
        config.database.backend = StorageBackend::Memory;

        let users = InMemoryUserRepository::new();
        users.insert(
            user(SUPERUSER_ID, "admin@example.com", true, true),
            SUPERUSER_TOKEN,
        );
        users.insert(user(ALICE_ID, "alice@example.com", true, false), ALICE_TOKEN);
        users.insert(user(BOB_ID, "bob@example.com", true, false), BOB_TOKEN);
        users.insert(
            user(INACTIVE_ID, "gone@example.com", false, false),
            INACTIVE_TOKEN,
        );

        let items = Arc::new(InMemoryItemRepository::new());
        let state = AppState::new(config, items.clone(), Arc::new(users));

        Self {
            router: create_app(state),
            items,
        }
    }

    pub fn seed_item(&self, id: i64, title: &str, owner_id: i64) -> Item {
        let item = Item {
            id,
            title: title.to_string(),
            description: Some(format!("{title} description")),
            owner_id,
        };
        self.items.seed(item.clone());
        item
    }

    pub async fn request(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<serde_json::Value>,
    ) -> (StatusCode, serde_json::Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }

        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json = if bytes.is_empty() {
            serde_json::Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or_else(|_| {
                panic!(
                    "{status} response body is not JSON: {}",
                    String::from_utf8_lossy(&bytes)
                )
            })
        };
        (status, json)
    }

    pub async fn get(&self, uri: &str, token: &str) -> (StatusCode, serde_json::Value) {
        self.request(Method::GET, uri, Some(token), None).await
    }

    pub async fn post(
        &self,
        uri: &str,
        token: &str,
        body: serde_json::Value,
    ) -> (StatusCode, serde_json::Value) {
        self.request(Method::POST, uri, Some(token), Some(body)).await
    }

    pub async fn put(
        &self,
        uri: &str,
        token: &str,
        body: serde_json::Value,
    ) -> (StatusCode, serde_json::Value) {
        self.request(Method::PUT, uri, Some(token), Some(body)).await
    }

    pub async fn delete(&self, uri: &str, token: &str) -> (StatusCode, serde_json::Value) {
        self.request(Method::DELETE, uri, Some(token), None).await
    }
}

pub fn item_ids(body: &serde_json::Value) -> Vec<i64> {
    body.as_array()
        .expect("list response is an array")
        .iter()
        .map(|item| item["id"].as_i64().expect("item id"))
        .collect()
}
