//! Shared helpers for HTTP tests.

#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

use seedhub_api::{AppState, build_app};
use seedhub_auth::{ACCESS_TOKEN_HEADER, TokenEncoder};
use seedhub_core::config::AppConfig;
use seedhub_core::traits::DocumentStore;
use seedhub_database::Stores;
use seedhub_entity::file::{CreateFile, File};
use seedhub_entity::user::{CreateUser, User};

/// A router over fresh in-memory stores.
pub struct TestApp {
    /// The full application router
    pub router: Router,
    /// Stores behind the router, for seeding and inspection
    pub stores: Stores,
    /// Application config
    pub config: AppConfig,
}

/// Status and decoded body of a response.
pub struct TestResponse {
    /// HTTP status
    pub status: StatusCode,
    /// JSON body, `Null` when empty
    pub body: Value,
}

impl TestApp {
    /// Create a new test application.
    pub fn new() -> Self {
        let mut config = AppConfig::default();
        config.auth.jwt_secret = "integration-test-secret".to_string();
        let stores = Stores::memory();
        let router = build_app(AppState::new(config.clone(), &stores));
        Self {
            router,
            stores,
            config,
        }
    }

    /// Seed an account.
    pub async fn create_user(&self, login: &str) -> User {
        let user = User::from(CreateUser {
            login: login.to_string(),
            password: "opaque".to_string(),
            mail: format!("{login}@example.test"),
            avatar: format!("/img/{login}.png"),
            role: Default::default(),
        });
        self.stores.users.create(&user).await.unwrap()
    }

    /// Seed a file uploaded by `creator`.
    pub async fn create_file(&self, creator: &User, name: &str, finished: bool) -> File {
        let mut file = File::from(CreateFile {
            name: name.to_string(),
            path: format!("/srv/seeds/{name}"),
            size: 1024,
            creator: creator.id,
            hash_string: format!("hash-{name}"),
            file_type: "archive".to_string(),
            privacy: 1,
        });
        file.is_finished = finished;
        self.stores.files.create(&file).await.unwrap()
    }

    /// Current stored state of a file.
    pub async fn stored(&self, file: &File) -> File {
        self.stores.files.find_by_id(&file.id).await.unwrap().unwrap()
    }

    /// Issue an access token for `user`.
    pub fn token_for(&self, user: &User) -> String {
        TokenEncoder::new(&self.config.auth).issue(user).unwrap().0
    }

    /// Send a request through the router.
    pub async fn request(
        &self,
        method: &str,
        uri: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(ACCESS_TOKEN_HEADER, token);
        }
        let request = match body {
            Some(json) => builder
                .header("content-type", "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };

        TestResponse { status, body }
    }
}
