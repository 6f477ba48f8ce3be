use serde::{Deserialize, Serialize};

use crate::meals::store::{MealCategory, NewMeal};

#[derive(Debug, Deserialize)]
pub struct CreateMealRequest {
    pub name: String,
    pub category: MealCategory,
    #[serde(default)]
    pub tags: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub recipe_url: String,
    pub protein: u32,
    pub carbs: u32,
    pub fat: u32,
    pub calories: u32,
    #[serde(default)]
    pub fiber: u32,
    #[serde(default)]
    pub sugar: u32,
    #[serde(default)]
    pub sodium: u32,
    #[serde(default)]
    pub cholesterol: u32,
    #[serde(default)]
    pub saturated_fat: u32,
    #[serde(default)]
    pub trans_fat: u32,
    #[serde(default)]
    pub ingredients: String,
    #[serde(default)]
    pub instructions: String,
    /// Raw image bytes; when absent the configured placeholder URL is used.
    #[serde(default)]
    pub image: Option<serde_bytes::ByteBuf>,
    #[serde(default)]
    pub image_content_type: Option<String>,
}

impl CreateMealRequest {
    pub fn into_new_meal(self, image_url: String) -> NewMeal {
        NewMeal {
            name: self.name,
            category: self.category,
            tags: self.tags,
            description: self.description,
            recipe_url: self.recipe_url,
            protein: self.protein,
            carbs: self.carbs,
            fat: self.fat,
            calories: self.calories,
            fiber: self.fiber,
            sugar: self.sugar,
            sodium: self.sodium,
            cholesterol: self.cholesterol,
            saturated_fat: self.saturated_fat,
            trans_fat: self.trans_fat,
            ingredients: self.ingredients,
            instructions: self.instructions,
            image: image_url,
        }
    }
}

/// The `?delete=<id>` request-parameter channel used by the posting page.
#[derive(Debug, Deserialize)]
pub struct DeleteQuery {
    pub delete: u64,
}

#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub deleted: bool,
}

#[derive(Debug, Serialize)]
pub struct LikeResponse {
    pub id: u64,
    pub likes: u32,
}

#[derive(Debug, Serialize)]
pub struct CommentResponse {
    pub id: u64,
    pub comments: u32,
}
