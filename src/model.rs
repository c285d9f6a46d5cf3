use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::collections::HashMap;

/// A meal record as returned by TheMealDB.
///
/// Only the fields the card needs are named; the numbered
/// `strIngredientN` / `strMeasureN` slots land in `slots`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Meal {
    #[serde(rename = "idMeal", default, deserialize_with = "lenient_text")]
    pub id: Option<String>,
    #[serde(rename = "strMeal", default, deserialize_with = "lenient_text")]
    pub name: Option<String>,
    #[serde(rename = "strMealThumb", default, deserialize_with = "lenient_text")]
    pub thumbnail: Option<String>,
    #[serde(rename = "strInstructions", default, deserialize_with = "lenient_text")]
    pub instructions: Option<String>,
    #[serde(rename = "strYoutube", default, deserialize_with = "lenient_text")]
    pub youtube: Option<String>,
    #[serde(flatten)]
    pub slots: HashMap<String, Value>,
}

/// Accepts strings, numbers and booleans as text; anything else is absent.
fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(text) => Some(text),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        _ => None,
    })
}

impl Meal {
    /// Ingredient name at 1-based slot `index`, if the API sent a string there.
    pub fn ingredient(&self, index: usize) -> Option<&str> {
        self.slot(&format!("strIngredient{index}"))
    }

    /// Measure at 1-based slot `index`, if the API sent a string there.
    pub fn measure(&self, index: usize) -> Option<&str> {
        self.slot(&format!("strMeasure{index}"))
    }

    fn slot(&self, key: &str) -> Option<&str> {
        self.slots.get(key).and_then(Value::as_str)
    }
}

#[cfg(test)]
impl Meal {
    pub(crate) fn with_ingredient(mut self, index: usize, name: &str, measure: &str) -> Self {
        self.slots
            .insert(format!("strIngredient{index}"), Value::from(name));
        self.slots
            .insert(format!("strMeasure{index}"), Value::from(measure));
        self
    }
}

/// Body of `random.php`. `meals` is `null` when nothing matched, and
/// individual entries may be `null` too.
#[derive(Debug, Deserialize)]
pub struct MealApiResponse {
    #[serde(default)]
    pub meals: Option<Vec<Option<Meal>>>,
}

impl MealApiResponse {
    pub fn into_first(self) -> Option<Meal> {
        self.meals
            .and_then(|meals| meals.into_iter().next().flatten())
    }
}
