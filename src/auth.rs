//! Session-scoped login state. Real credential checking lives elsewhere;
//! these handlers only flip the flags the sidebar and profile read.

use axum::{extract::State, routing::post, Json, Router};
use serde::{Deserialize, Serialize};
use tracing::instrument;
use uuid::Uuid;

use crate::error::AppError;
use crate::session::{AuthState, SessionToken};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
}

#[derive(Debug, Serialize)]
pub struct AuthStatus {
    pub authenticated: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<Uuid>,
}

impl From<AuthState> for AuthStatus {
    fn from(auth: AuthState) -> Self {
        Self {
            authenticated: auth.authenticated,
            username: auth.username,
            user_id: auth.user_id,
        }
    }
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/auth/login", post(login))
        .route("/auth/logout", post(logout))
}

#[instrument(skip(state, body))]
async fn login(
    State(state): State<AppState>,
    SessionToken(token): SessionToken,
    Json(body): Json<LoginRequest>,
) -> Result<Json<AuthStatus>, AppError> {
    if body.username.trim().is_empty() {
        return Err(AppError::BadRequest("username must not be empty".into()));
    }
    let auth = state.sessions.with(token, move |s| {
        s.auth.authenticated = true;
        s.auth.username = Some(body.username);
        s.auth.user_id.get_or_insert_with(Uuid::new_v4);
        s.auth.clone()
    })?;
    tracing::debug!(username = auth.username.as_deref(), "logged in");
    Ok(Json(auth.into()))
}

#[instrument(skip(state))]
async fn logout(
    State(state): State<AppState>,
    SessionToken(token): SessionToken,
) -> Result<Json<AuthStatus>, AppError> {
    let auth = state.sessions.with(token, |s| {
        s.auth = AuthState::default();
        s.auth.clone()
    })?;
    Ok(Json(auth.into()))
}
