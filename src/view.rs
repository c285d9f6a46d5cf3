use crate::ingredients::parse_ingredients;
use crate::instructions::instruction_steps;
use crate::model::Meal;
use crate::youtube::{embed_url, extract_video_id};

/// Everything the card shows, as plain (unescaped) text.
#[derive(Debug, Clone, PartialEq)]
pub struct MealCard {
    pub title: String,
    pub image_url: String,
    pub image_alt: String,
    /// Display strings, in slot order
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    pub video: Option<VideoEmbed>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct VideoEmbed {
    pub id: String,
    pub embed_url: String,
    pub title: String,
}

impl MealCard {
    pub fn from_meal(meal: &Meal) -> Self {
        let title = meal.name.clone().unwrap_or_default();
        let video = extract_video_id(meal.youtube.as_deref()).map(|id| VideoEmbed {
            embed_url: embed_url(&id),
            title: format!("Recipe video: {title}"),
            id,
        });

        Self {
            image_url: meal.thumbnail.clone().unwrap_or_default(),
            image_alt: format!("Photo of the recipe: {title}"),
            ingredients: parse_ingredients(meal)
                .into_iter()
                .map(|ingredient| ingredient.display)
                .collect(),
            instructions: instruction_steps(meal.instructions.as_deref()),
            video,
            title,
        }
    }

    pub fn has_video(&self) -> bool {
        self.video.is_some()
    }
}

/// The three mutually exclusive display modes of the meal container.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewState {
    Loading,
    Loaded(MealCard),
    Error { message: String },
}

impl ViewState {
    pub fn is_loaded(&self) -> bool {
        matches!(self, ViewState::Loaded(_))
    }
}
