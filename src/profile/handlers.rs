use axum::{
    extract::State,
    routing::get,
    Json, Router,
};
use serde::Serialize;
use tracing::instrument;

use crate::error::AppError;
use crate::meals::store::MealRecord;
use crate::session::{AuthState, SessionToken};
use crate::state::AppState;

use super::analytics::{nutrition_stats, NutritionStats};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/profile", get(get_profile))
        .route("/profile/stats", get(get_stats))
        .route("/profile/meals", get(get_own_meals))
        .route("/profile/saved", get(get_saved_recipes))
}

#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub username: String,
    pub email: String,
    pub full_name: String,
    pub bio: String,
    pub profile_pic: String,
    pub date_joined: String,
    pub premium: bool,
}

#[derive(Debug, Serialize)]
pub struct SavedRecipe {
    pub name: String,
    pub author: String,
    pub date_saved: String,
    pub image: String,
}

fn require_login(auth: &AuthState) -> Result<&str, AppError> {
    if !auth.authenticated {
        return Err(AppError::Unauthorized(
            "please log in to view your profile".into(),
        ));
    }
    Ok(auth.username.as_deref().unwrap_or("fitness_user"))
}

#[instrument(skip(state))]
async fn get_profile(
    State(state): State<AppState>,
    SessionToken(token): SessionToken,
) -> Result<Json<ProfileResponse>, AppError> {
    let auth = state.sessions.with(token, |s| s.auth.clone())?;
    let username = require_login(&auth)?.to_string();
    // Profile details beyond the login state are mock data until a user
    // service exists.
    Ok(Json(ProfileResponse {
        email: format!("{username}@example.com"),
        username,
        full_name: "Fitness Enthusiast".into(),
        bio: "Passionate about healthy eating and fitness".into(),
        profile_pic: state.config.placeholder_image_url.clone(),
        date_joined: "January 2025".into(),
        premium: true,
    }))
}

#[instrument(skip(state))]
async fn get_stats(
    State(state): State<AppState>,
    SessionToken(token): SessionToken,
) -> Result<Json<NutritionStats>, AppError> {
    let auth = state.sessions.with(token, |s| s.auth.clone())?;
    require_login(&auth)?;
    Ok(Json(nutrition_stats()))
}

/// The "My Recipes" tab: the session's own shared meals.
#[instrument(skip(state))]
async fn get_own_meals(
    State(state): State<AppState>,
    SessionToken(token): SessionToken,
) -> Result<Json<Vec<MealRecord>>, AppError> {
    let (auth, meals) = state
        .sessions
        .with(token, |s| (s.auth.clone(), s.meals.list().to_vec()))?;
    require_login(&auth)?;
    Ok(Json(meals))
}

#[instrument(skip(state))]
async fn get_saved_recipes(
    State(state): State<AppState>,
    SessionToken(token): SessionToken,
) -> Result<Json<Vec<SavedRecipe>>, AppError> {
    let auth = state.sessions.with(token, |s| s.auth.clone())?;
    require_login(&auth)?;
    let image = state.config.placeholder_image_url.clone();
    let saved = vec![
        SavedRecipe {
            name: "Banana Protein Muffins".into(),
            author: "@HealthyBaker".into(),
            date_saved: "Mar 1, 2025".into(),
            image: image.clone(),
        },
        SavedRecipe {
            name: "Quinoa Salad Bowl".into(),
            author: "@NutritionChef".into(),
            date_saved: "Feb 25, 2025".into(),
            image: image.clone(),
        },
        SavedRecipe {
            name: "Low-Carb Pizza".into(),
            author: "@KetoKing".into(),
            date_saved: "Feb 20, 2025".into(),
            image: image.clone(),
        },
        SavedRecipe {
            name: "Protein Ice Cream".into(),
            author: "@FitnessFoodie".into(),
            date_saved: "Feb 18, 2025".into(),
            image,
        },
    ];
    Ok(Json(saved))
}
