pub mod client;
pub mod config;
pub mod controller;
pub mod error;
pub mod escape;
pub mod ingredients;
pub mod instructions;
pub mod model;
pub mod render;
pub mod ui;
pub mod view;
pub mod youtube;

pub use client::{MealClient, MealSource};
pub use config::MealConfig;
pub use controller::MealController;
pub use error::MealError;
pub use ingredients::{parse_ingredients, Ingredient};
pub use model::Meal;
pub use view::{MealCard, ViewState};

/// Fetch one random meal using configuration from file and environment.
pub async fn fetch_random_meal() -> Result<Meal, MealError> {
    let config = MealConfig::load()?;
    MealClient::new(&config)?.random_meal().await
}

/// Fetch one random meal and return its card markup.
pub async fn random_meal_html() -> Result<String, MealError> {
    let meal = fetch_random_meal().await?;
    Ok(render::card_html(&MealCard::from_meal(&meal)))
}
