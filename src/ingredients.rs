use crate::model::Meal;

/// TheMealDB records carry at most this many ingredient slots.
pub const INGREDIENTS_LIMIT: usize = 20;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ingredient {
    pub name: String,
    /// Empty when the slot had no measure.
    pub measure: String,
    pub display: String,
}

impl Ingredient {
    pub fn new(name: impl Into<String>, measure: impl Into<String>) -> Self {
        let name = name.into();
        let measure = measure.into();
        let display = if measure.is_empty() {
            name.clone()
        } else {
            format!("{name} – {measure}")
        };
        Self {
            name,
            measure,
            display,
        }
    }
}

/// Collect the non-empty ingredient slots of a meal, in slot order.
///
/// A slot without a name is dropped even if it has a measure.
pub fn parse_ingredients(meal: &Meal) -> Vec<Ingredient> {
    (1..=INGREDIENTS_LIMIT)
        .filter_map(|i| {
            let name = meal.ingredient(i).map(str::trim).unwrap_or_default();
            if name.is_empty() {
                return None;
            }
            let measure = meal.measure(i).map(str::trim).unwrap_or_default();
            Some(Ingredient::new(name, measure))
        })
        .collect()
}
