//! Markup for the meal container.
//!
//! The `*_html` functions are pure; `render_*` write the result into a
//! [`Container`] and keep its loaded marker in step.

use crate::escape::escape_html;
use crate::instructions::format_steps;
use crate::model::Meal;
use crate::ui::Container;
use crate::view::{MealCard, VideoEmbed, ViewState};

pub const LOADING_TEXT: &str = "Loading recipe…";
pub const RETRY_HINT: &str = "Check your connection and try again.";

pub fn loading_html() -> String {
    format!(r#"<p class="meal__loading">{LOADING_TEXT}</p>"#)
}

pub fn card_html(card: &MealCard) -> String {
    let ingredients: String = card
        .ingredients
        .iter()
        .map(|display| format!(r#"<li class="meal__ingredient">{}</li>"#, escape_html(display)))
        .collect();
    let instructions = format_steps(&card.instructions);
    let video = card.video.as_ref().map(video_html).unwrap_or_default();

    format!(
        r#"<article class="meal__card">
    <h2 class="meal__name">{title}</h2>
    <img class="meal__image" src="{src}" alt="{alt}" loading="lazy" width="600" height="400">
    <h3 class="meal__section-title">Ingredients</h3>
    <ul class="meal__ingredients">{ingredients}</ul>
    <h3 class="meal__section-title">Instructions</h3>
    <div class="meal__instructions">{instructions}</div>{video}
</article>"#,
        title = escape_html(&card.title),
        src = escape_html(&card.image_url),
        alt = escape_html(&card.image_alt),
    )
}

fn video_html(video: &VideoEmbed) -> String {
    format!(
        r#"
    <h3 class="meal__section-title">Recipe Video</h3>
    <div class="meal__video-wrapper">
        <iframe class="meal__video" src="{src}" title="{title}" allow="accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture" allowfullscreen loading="lazy"></iframe>
    </div>"#,
        src = escape_html(&video.embed_url),
        title = escape_html(&video.title),
    )
}

pub fn error_html(message: &str) -> String {
    format!(
        r#"<div class="meal__error" role="alert">
    <p class="meal__error-text">{}</p>
    <p class="meal__error-hint">{RETRY_HINT}</p>
</div>"#,
        escape_html(message)
    )
}

pub fn view_html(state: &ViewState) -> String {
    match state {
        ViewState::Loading => loading_html(),
        ViewState::Loaded(card) => card_html(card),
        ViewState::Error { message } => error_html(message),
    }
}

/// Write a view state into the container, replacing whatever was there.
pub fn render_view<C: Container + ?Sized>(container: &mut C, state: &ViewState) {
    container.set_content(view_html(state));
    container.set_loaded(state.is_loaded());
}

pub fn render_loading<C: Container + ?Sized>(container: &mut C) {
    render_view(container, &ViewState::Loading);
}

pub fn render_meal<C: Container + ?Sized>(container: &mut C, meal: &Meal) -> ViewState {
    let state = ViewState::Loaded(MealCard::from_meal(meal));
    render_view(container, &state);
    state
}

pub fn render_error<C: Container + ?Sized>(container: &mut C, message: &str) -> ViewState {
    let state = ViewState::Error {
        message: message.to_string(),
    };
    render_view(container, &state);
    state
}
