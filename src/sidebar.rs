//! The shared sidebar model: a fixed ordered list of navigation links plus an
//! auth-conditional tail (login link, or welcome text with profile/logout).
//! Rendering clients fetch this per interaction and draw it as-is.

use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::error::AppError;
use crate::session::{AuthState, SessionToken};
use crate::state::AppState;

struct NavEntry {
    path: &'static str,
    label: &'static str,
    icon: Option<&'static str>,
}

lazy_static! {
    static ref NAV_ITEMS: Vec<NavEntry> = vec![
        NavEntry { path: "/", label: "🏠 Home", icon: Some("🏠") },
        NavEntry { path: "/about", label: "ℹ️ About Me", icon: None },
        NavEntry { path: "/recipes", label: "📊 My Recipes", icon: None },
        NavEntry { path: "/chatbot", label: "🤖 Chat Bot", icon: None },
        NavEntry { path: "/post-meal", label: "📝 Share Your Meal", icon: None },
    ];
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SidebarLink {
    pub path: String,
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    pub active: bool,
}

#[derive(Debug, Serialize, PartialEq)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum AuthSegment {
    LoggedOut {
        login: SidebarLink,
    },
    LoggedIn {
        welcome: String,
        profile: SidebarLink,
        logout_action: String,
    },
}

#[derive(Debug, Serialize)]
pub struct Sidebar {
    pub title: String,
    pub entries: Vec<SidebarLink>,
    pub auth: AuthSegment,
}

fn link(path: &str, label: &str, active_page: Option<&str>) -> SidebarLink {
    SidebarLink {
        path: path.to_string(),
        label: label.to_string(),
        icon: None,
        active: active_page == Some(path),
    }
}

/// Pure function of the session's auth state and the requested active page.
pub fn build_sidebar(auth: &AuthState, active_page: Option<&str>) -> Sidebar {
    let entries = NAV_ITEMS
        .iter()
        .map(|item| SidebarLink {
            path: item.path.to_string(),
            label: item.label.to_string(),
            icon: item.icon.map(str::to_string),
            active: active_page == Some(item.path),
        })
        .collect();

    let auth_segment = if auth.authenticated {
        AuthSegment::LoggedIn {
            welcome: format!("Welcome, {}", auth.username.as_deref().unwrap_or("friend")),
            profile: link("/profile", "👤 My Profile", active_page),
            logout_action: "/api/v1/auth/logout".to_string(),
        }
    } else {
        AuthSegment::LoggedOut {
            login: link("/auth", "👤 Login/Register", active_page),
        }
    };

    Sidebar {
        title: "Navigation".to_string(),
        entries,
        auth: auth_segment,
    }
}

#[derive(Debug, Deserialize)]
struct SidebarQuery {
    active: Option<String>,
}

pub fn router() -> Router<AppState> {
    Router::new().route("/sidebar", get(get_sidebar))
}

#[instrument(skip(state))]
async fn get_sidebar(
    State(state): State<AppState>,
    SessionToken(token): SessionToken,
    Query(q): Query<SidebarQuery>,
) -> Result<Json<Sidebar>, AppError> {
    let auth = state.sessions.with(token, |s| s.auth.clone())?;
    Ok(Json(build_sidebar(&auth, q.active.as_deref())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn logged_out_sidebar_offers_login() {
        let sidebar = build_sidebar(&AuthState::default(), None);
        assert_eq!(sidebar.title, "Navigation");
        assert_eq!(sidebar.entries.len(), 5);
        match sidebar.auth {
            AuthSegment::LoggedOut { login } => assert_eq!(login.path, "/auth"),
            AuthSegment::LoggedIn { .. } => panic!("expected logged-out segment"),
        }
    }

    #[test]
    fn logged_in_sidebar_greets_the_user() {
        let auth = AuthState {
            authenticated: true,
            username: Some("fitness_user".into()),
            user_id: Some(Uuid::new_v4()),
        };
        let sidebar = build_sidebar(&auth, None);
        match sidebar.auth {
            AuthSegment::LoggedIn {
                welcome, profile, ..
            } => {
                assert_eq!(welcome, "Welcome, fitness_user");
                assert_eq!(profile.path, "/profile");
            }
            AuthSegment::LoggedOut { .. } => panic!("expected logged-in segment"),
        }
    }

    #[test]
    fn entries_keep_their_order() {
        let sidebar = build_sidebar(&AuthState::default(), None);
        let paths: Vec<&str> = sidebar.entries.iter().map(|e| e.path.as_str()).collect();
        assert_eq!(paths, vec!["/", "/about", "/recipes", "/chatbot", "/post-meal"]);
    }

    #[test]
    fn exactly_the_requested_page_is_active() {
        let sidebar = build_sidebar(&AuthState::default(), Some("/recipes"));
        let active: Vec<&str> = sidebar
            .entries
            .iter()
            .filter(|e| e.active)
            .map(|e| e.path.as_str())
            .collect();
        assert_eq!(active, vec!["/recipes"]);
    }
}
