use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{delete, get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use tracing::info;
use uuid::Uuid;

/// The only password `/login` accepts.
pub const MOCK_PASSWORD: &str = "hunter2";

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct User {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct Echo {
    pub status: u16,
    pub message: String,
    pub query: String,
}

#[derive(Deserialize)]
pub struct UserQuery {
    #[serde(default)]
    pub name: String,
}

#[derive(Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    #[serde(rename = "jwtToken")]
    pub jwt_token: String,
}

pub type Db = Arc<RwLock<HashMap<String, User>>>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(HashMap::new()));
    Router::new()
        .route("/user", get(echo_user).post(create_user).put(replace_user))
        .route("/user/{name}", delete(delete_user))
        .route("/login", post(login))
        .route("/status/{code}", get(forced_status))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    if let Ok(addr) = listener.local_addr() {
        info!(%addr, "mock server listening");
    }
    axum::serve(listener, app()).await
}

async fn echo_user(Query(query): Query<UserQuery>) -> Json<Echo> {
    Json(Echo {
        status: 200,
        message: "OK".to_string(),
        query: query.name,
    })
}

async fn create_user(State(db): State<Db>, Json(user): Json<User>) -> (StatusCode, Json<User>) {
    db.write().await.insert(user.name.clone(), user.clone());
    (StatusCode::CREATED, Json(user))
}

async fn replace_user(State(db): State<Db>, Json(user): Json<User>) -> Json<User> {
    db.write().await.insert(user.name.clone(), user.clone());
    Json(user)
}

async fn delete_user(
    State(db): State<Db>,
    Path(name): Path<String>,
) -> Result<StatusCode, StatusCode> {
    let mut users = db.write().await;
    users.remove(&name).map(|_| StatusCode::NO_CONTENT).ok_or(StatusCode::NOT_FOUND)
}

async fn login(Json(creds): Json<Credentials>) -> Result<Json<LoginResponse>, StatusCode> {
    if creds.email.is_empty() || creds.password != MOCK_PASSWORD {
        return Err(StatusCode::UNAUTHORIZED);
    }
    Ok(Json(LoginResponse {
        jwt_token: Uuid::new_v4().to_string(),
    }))
}

async fn forced_status(Path(code): Path<u16>) -> (StatusCode, String) {
    let status = StatusCode::from_u16(code).unwrap_or(StatusCode::BAD_REQUEST);
    (status, format!("forced {}", status.as_u16()))
}
