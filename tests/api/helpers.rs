use std::sync::Arc;

use reqwest::{Client, Response};
use serde_json::json;
use tokio::net::TcpListener;
use tokio::spawn;
use tokio::sync::RwLock;

use task_service::app_router;
use task_service::app_state::AppState;
use task_service::domain::SessionStore;
use task_service::services::data_stores::{
    HashmapSessionStore, HashmapTaskStore, HashmapUserStore,
};
use task_service::services::{ClockType, JwtCodec, SystemClock, TokenService};
use task_service::utils::Config;

/// Prepare environment variables required by Config::default()
fn set_env_config() {
    // These tests set vars each time; overwrite is fine.
    std::env::set_var("JWT_SECRET", "api-test-secret-with-enough-bytes");
    std::env::set_var("TOKEN_TTL_SECONDS", "3600");
    std::env::set_var("SESSION_TTL_SECONDS", "1800");
}

pub struct TestApp {
    pub address: String,
    pub http_client: Client,
}

impl TestApp {
    pub async fn new() -> Self {
        set_env_config();
        let config = Config::default().expect("failed to build test config");

        let clock: ClockType = Arc::new(SystemClock);
        let codec = Arc::new(JwtCodec::new(config.jwt_secret().as_bytes(), clock.clone()));
        let sessions: Box<dyn SessionStore> = Box::new(HashmapSessionStore::new(clock.clone()));
        let token_service = TokenService::new(
            codec,
            sessions,
            clock.clone(),
            config.token_ttl_seconds(),
            config.session_ttl_seconds(),
        );

        let app_state = AppState::new(
            Arc::new(RwLock::new(HashmapUserStore::new())),
            Arc::new(RwLock::new(HashmapTaskStore::new(clock))),
            Arc::new(RwLock::new(token_service)),
            Arc::new(RwLock::new(config)),
        );

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed binding to an ephemeral port");

        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let server = axum::serve(listener, app_router(app_state));

        spawn(async move {
            if let Err(e) = server.await {
                eprintln!("Test server error: {}", e);
            }
        });

        TestApp {
            address,
            http_client: Client::new(),
        }
    }

    pub async fn register(&self, email: &str, password: &str, role: &str) -> Response {
        self.http_client
            .post(format!("{}/register", self.address))
            .json(&json!({ "email": email, "password": password, "role": role }))
            .send()
            .await
            .expect("register request failed")
    }

    pub async fn login(&self, email: &str, password: &str) -> Response {
        self.http_client
            .post(format!("{}/login", self.address))
            .json(&json!({ "email": email, "password": password }))
            .send()
            .await
            .expect("login request failed")
    }

    /// Register + login in one go, returning the bearer token.
    pub async fn signup_and_login(&self, email: &str, password: &str, role: &str) -> String {
        let response = self.register(email, password, role).await;
        assert_eq!(response.status().as_u16(), 201, "registration failed");

        let response = self.login(email, password).await;
        assert_eq!(response.status().as_u16(), 200, "login failed");

        let body: serde_json::Value = response.json().await.expect("login response not json");
        body["access_token"]
            .as_str()
            .expect("no access_token in login response")
            .to_owned()
    }

    pub async fn get_tasks(&self, token: Option<&str>) -> Response {
        let mut request = self.http_client.get(format!("{}/tasks", self.address));
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }
        request.send().await.expect("list tasks request failed")
    }

    pub async fn post_task(&self, token: &str, title: &str) -> Response {
        self.http_client
            .post(format!("{}/tasks", self.address))
            .bearer_auth(token)
            .json(&json!({ "title": title }))
            .send()
            .await
            .expect("add task request failed")
    }

    pub async fn get_admin(&self, token: &str) -> Response {
        self.http_client
            .get(format!("{}/admin", self.address))
            .bearer_auth(token)
            .send()
            .await
            .expect("admin request failed")
    }

    pub async fn logout(&self, token: &str) -> Response {
        self.http_client
            .post(format!("{}/logout", self.address))
            .bearer_auth(token)
            .send()
            .await
            .expect("logout request failed")
    }
}
