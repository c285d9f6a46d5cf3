//! The two page elements the controller drives, and in-memory versions of them.

use std::collections::BTreeSet;

use crate::escape::escape_html;

pub const TRIGGER_ID: &str = "btn-random-meal";
pub const CONTAINER_ID: &str = "meal-container";
/// Class carried by the container while a meal card is shown.
pub const LOADED_CLASS: &str = "meal--loaded";

/// Display area that receives rendered markup.
pub trait Container {
    /// Replace the whole content with `html`.
    fn set_content(&mut self, html: String);
    fn set_loaded(&mut self, loaded: bool);
}

/// Control the user activates to request a meal.
pub trait Trigger {
    /// While busy the control is disabled, flagged `aria-busy` and shows a
    /// loader instead of its label.
    fn set_busy(&mut self, busy: bool);
}

#[derive(Debug, Clone)]
pub struct HtmlContainer {
    id: String,
    classes: BTreeSet<String>,
    inner_html: String,
}

impl HtmlContainer {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            classes: BTreeSet::from(["meal".to_string()]),
            inner_html: String::new(),
        }
    }

    pub fn inner_html(&self) -> &str {
        &self.inner_html
    }

    pub fn is_loaded(&self) -> bool {
        self.classes.contains(LOADED_CLASS)
    }

    pub fn to_html(&self) -> String {
        let classes: Vec<&str> = self.classes.iter().map(String::as_str).collect();
        format!(
            r#"<section id="{}" class="{}" aria-live="polite">{}</section>"#,
            escape_html(&self.id),
            escape_html(&classes.join(" ")),
            self.inner_html
        )
    }
}

impl Container for HtmlContainer {
    fn set_content(&mut self, html: String) {
        self.inner_html = html;
    }

    fn set_loaded(&mut self, loaded: bool) {
        if loaded {
            self.classes.insert(LOADED_CLASS.to_string());
        } else {
            self.classes.remove(LOADED_CLASS);
        }
    }
}

#[derive(Debug, Clone)]
pub struct HtmlButton {
    id: String,
    label: String,
    busy: bool,
}

impl HtmlButton {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            busy: false,
        }
    }

    pub fn is_disabled(&self) -> bool {
        self.busy
    }

    pub fn to_html(&self) -> String {
        format!(
            r#"<button id="{id}" class="btn" type="button" aria-busy="{busy}"{disabled}><span class="btn__text"{text_hidden}>{label}</span><span class="btn__loader"{loader_hidden} aria-hidden="true"></span></button>"#,
            id = escape_html(&self.id),
            busy = self.busy,
            disabled = if self.busy { " disabled" } else { "" },
            text_hidden = if self.busy { " hidden" } else { "" },
            loader_hidden = if self.busy { "" } else { " hidden" },
            label = escape_html(&self.label),
        )
    }
}

impl Trigger for HtmlButton {
    fn set_busy(&mut self, busy: bool) {
        self.busy = busy;
    }
}
