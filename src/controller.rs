use log::{error, info};

use crate::client::MealSource;
use crate::error::MealError;
use crate::render::{render_error, render_loading, render_meal};
use crate::ui::{Container, Trigger, CONTAINER_ID, TRIGGER_ID};
use crate::view::ViewState;

/// Wires a trigger to the fetch → render cycle.
///
/// Each [`on_click`](Self::on_click) runs idle → busy → loaded/error → idle.
pub struct MealController<S, T, C> {
    source: S,
    trigger: T,
    container: C,
}

impl<S, T, C> MealController<S, T, C>
where
    S: MealSource,
    T: Trigger,
    C: Container,
{
    pub fn new(source: S, trigger: T, container: C) -> Self {
        Self {
            source,
            trigger,
            container,
        }
    }

    /// Bind to page elements that may be missing.
    ///
    /// Returns `None` (after logging) when either element is absent; nothing
    /// is wired in that case.
    pub fn bind(source: S, trigger: Option<T>, container: Option<C>) -> Option<Self> {
        let missing = match (&trigger, &container) {
            (None, _) => Some(TRIGGER_ID),
            (_, None) => Some(CONTAINER_ID),
            _ => None,
        };
        if let Some(id) = missing {
            error!("{}", MealError::MissingElement(id));
            return None;
        }

        Some(Self::new(source, trigger?, container?))
    }

    /// Handle one activation of the trigger.
    ///
    /// Failures never escape: they are logged and rendered as an error card.
    pub async fn on_click(&mut self) -> ViewState {
        self.trigger.set_busy(true);
        self.container.set_loaded(false);
        render_loading(&mut self.container);

        let state = match self.source.fetch_meal().await {
            Ok(meal) => {
                info!(
                    "Showing meal {}",
                    meal.name.as_deref().unwrap_or_default()
                );
                render_meal(&mut self.container, &meal)
            }
            Err(err) => {
                error!("[random-meal] {}", err);
                render_error(&mut self.container, &err.user_message())
            }
        };

        self.trigger.set_busy(false);
        state
    }

    pub fn trigger(&self) -> &T {
        &self.trigger
    }

    pub fn container(&self) -> &C {
        &self.container
    }
}
