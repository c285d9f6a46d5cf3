use thiserror::Error;

/// Shown when a failure has no message fit for the page.
pub const FALLBACK_MESSAGE: &str = "Failed to load the recipe";

/// Errors that can occur while fetching or displaying a meal
#[derive(Error, Debug)]
pub enum MealError {
    /// The API answered with a non-success status
    #[error("HTTP {status}: {status_text}")]
    Network { status: u16, status_text: String },

    /// The API answered successfully but without any meal in it
    #[error("Empty result: no meal returned by the API")]
    EmptyResult,

    /// A required page element was not provided at startup
    #[error("Required element not found: #{0}")]
    MissingElement(&'static str),

    /// Failed to send the request or decode the response
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),
}

impl MealError {
    /// Message suitable for the error card.
    pub fn user_message(&self) -> String {
        match self {
            MealError::Network { .. } | MealError::EmptyResult | MealError::Request(_) => {
                self.to_string()
            }
            _ => FALLBACK_MESSAGE.to_string(),
        }
    }
}
