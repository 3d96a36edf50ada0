use axum::middleware::{from_fn, from_fn_with_state};
use axum::routing::{get, post};
use axum::{Json, Router};
use axum_server::bind;
use std::{error::Error, future::Future, pin::Pin};

use app_state::AppState;
use routes::middleware::{require_admin, require_auth};
use routes::{admin, login, logout, signup, tasks};

pub mod app_state;
pub mod domain;
pub mod errors;
pub mod routes;
pub mod services;
pub mod utils;
pub mod validation;

type ServerFuture = Pin<Box<dyn Future<Output = Result<(), std::io::Error>> + Send>>;

pub fn app_router(app_state: AppState) -> Router {
    let admin_routes = Router::new()
        .route("/", get(admin::admin_only))
        // Role gate runs after the auth stage below and never re-validates.
        .route_layer(from_fn(require_admin));

    let task_routes = Router::new().route("/", get(tasks::list_tasks).post(tasks::add_task));

    Router::new()
        .nest("/tasks", task_routes)
        .nest("/admin", admin_routes)
        .route("/logout", post(logout::logout))
        .route_layer(from_fn_with_state(app_state.clone(), require_auth))
        .route("/health", get(health))
        .route("/register", post(signup::signup))
        .route("/login", post(login::login))
        .with_state(app_state)
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

// This struct encapsulates our application-related logic.
pub struct Application {
    http_future: ServerFuture,
    // address is exposed as a public field,
    // so we have access to it in tests.
    pub address: String,
}

impl Application {
    pub async fn build(app_state: AppState, address: &str) -> Result<Self, Box<dyn Error>> {
        let router = app_router(app_state);

        let http_future = bind(address.parse()?).serve(router.into_make_service());

        Ok(Self {
            http_future: Box::pin(http_future),
            address: format!("http://{}", address),
        })
    }

    pub async fn run(self) -> Result<(), std::io::Error> {
        log::info!("listening on {}", &self.address);
        self.http_future.await
    }
}
