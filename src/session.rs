//! Per-session state. Every browser session owns an independent meal store
//! and auth flags; nothing is shared across sessions and nothing survives the
//! process. Handlers reach their session through [`SessionManager::with`],
//! keyed by the token minted at `POST /session`.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, RwLock};

use axum::{
    async_trait,
    extract::{FromRequestParts, State},
    http::request::Parts,
    routing::post,
    Json, Router,
};
use serde::Serialize;
use time::OffsetDateTime;
use uuid::Uuid;

use crate::error::AppError;
use crate::meals::store::MealStore;
use crate::state::AppState;

pub const SESSION_HEADER: &str = "x-session-token";

/// Auth flags scoped to one session, read by the sidebar and profile.
#[derive(Debug, Clone, Default)]
pub struct AuthState {
    pub authenticated: bool,
    pub username: Option<String>,
    pub user_id: Option<Uuid>,
}

#[derive(Debug)]
pub struct Session {
    pub meals: MealStore,
    pub auth: AuthState,
    pub created_at: OffsetDateTime,
}

impl Session {
    fn new() -> Self {
        Self {
            meals: MealStore::new(),
            auth: AuthState::default(),
            created_at: OffsetDateTime::now_utc(),
        }
    }
}

#[derive(Default)]
pub struct SessionManager {
    sessions: RwLock<HashMap<Uuid, Arc<Mutex<Session>>>>,
}

impl SessionManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create(&self) -> Result<(Uuid, OffsetDateTime), AppError> {
        let token = Uuid::new_v4();
        let session = Session::new();
        let created_at = session.created_at;
        let mut sessions = self.sessions.write().map_err(|_| lock_poisoned())?;
        sessions.insert(token, Arc::new(Mutex::new(session)));
        Ok((token, created_at))
    }

    pub fn contains(&self, token: Uuid) -> bool {
        self.sessions
            .read()
            .map(|s| s.contains_key(&token))
            .unwrap_or(false)
    }

    /// Runs `f` with exclusive access to the session behind `token`.
    pub fn with<R>(
        &self,
        token: Uuid,
        f: impl FnOnce(&mut Session) -> R,
    ) -> Result<R, AppError> {
        let handle = {
            let sessions = self.sessions.read().map_err(|_| lock_poisoned())?;
            sessions.get(&token).cloned()
        };
        let handle = handle.ok_or_else(unknown_session)?;
        let mut session = handle.lock().map_err(|_| lock_poisoned())?;
        Ok(f(&mut session))
    }
}

fn lock_poisoned() -> AppError {
    AppError::Internal(anyhow::anyhow!("session lock poisoned"))
}

fn unknown_session() -> AppError {
    AppError::Unauthorized("unknown or expired session".into())
}

/// Extracts and validates the session token from the request headers.
#[derive(Debug)]
pub struct SessionToken(pub Uuid);

#[async_trait]
impl FromRequestParts<AppState> for SessionToken {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let raw = parts
            .headers
            .get(SESSION_HEADER)
            .and_then(|h| h.to_str().ok())
            .ok_or_else(|| {
                AppError::Unauthorized(format!("missing {SESSION_HEADER} header"))
            })?;

        let token = Uuid::parse_str(raw)
            .map_err(|_| AppError::Unauthorized("malformed session token".into()))?;

        if !state.sessions.contains(token) {
            return Err(unknown_session());
        }

        Ok(SessionToken(token))
    }
}

#[derive(Debug, Serialize)]
pub struct SessionCreated {
    pub token: Uuid,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

pub fn router() -> Router<AppState> {
    Router::new().route("/session", post(create_session))
}

#[tracing::instrument(skip(state))]
async fn create_session(
    State(state): State<AppState>,
) -> Result<Json<SessionCreated>, AppError> {
    let (token, created_at) = state.sessions.create()?;
    tracing::debug!(%token, "session created");
    Ok(Json(SessionCreated { token, created_at }))
}
