//! Parsing of the kitchen form submission.
//!
//! The multi-select posts one `cultures` pair per selected cuisine, so the
//! body is read as raw key/value pairs rather than a flat struct.

use serde::Serialize;

use crate::agents::{Restrictions, UserInput, DEFAULT_EXTREMENESS_LEVEL};
use crate::pipeline::MAX_EXTREMENESS_LEVEL;

/// A submitted kitchen form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct KitchenForm {
    pub ingredients: String,
    /// Cuisines ticked in the multi-select.
    pub cultures: Vec<String>,
    /// Free-text cuisine added next to the multi-select.
    pub custom_culture: String,
    pub extreme_ingredient: String,
    pub extremeness_level: u8,
    pub restrictions: Restrictions,
}

impl KitchenForm {
    /// Builds a form from urlencoded key/value pairs.
    ///
    /// Unknown keys are ignored. A checkbox counts as ticked when its key is
    /// present. The slider value is clamped to 1-5 and falls back to the
    /// default when it does not parse.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (String, String)>) -> Self {
        let mut form = KitchenForm {
            extremeness_level: DEFAULT_EXTREMENESS_LEVEL,
            ..KitchenForm::default()
        };

        for (key, value) in pairs {
            match key.as_str() {
                "ingredients" => form.ingredients = value,
                "cultures" => form.cultures.push(value),
                "custom_culture" => form.custom_culture = value,
                "extreme_ingredient" => form.extreme_ingredient = value,
                "extremeness_level" => {
                    form.extremeness_level = value
                        .trim()
                        .parse::<u8>()
                        .map(|level| level.clamp(1, MAX_EXTREMENESS_LEVEL))
                        .unwrap_or(DEFAULT_EXTREMENESS_LEVEL);
                }
                "vegetarian" => form.restrictions.vegetarian = true,
                "vegan" => form.restrictions.vegan = true,
                "nut_allergy" => form.restrictions.nut_allergy = true,
                "not_spicy" => form.restrictions.not_spicy = true,
                _ => {}
            }
        }

        form
    }

    /// Selected cuisines plus the custom one, if it is new.
    ///
    /// The custom name is taken verbatim.
    pub fn all_cultures(&self) -> Vec<String> {
        let mut cultures = self.cultures.clone();
        let custom = &self.custom_culture;
        if !custom.is_empty() && !cultures.contains(custom) {
            cultures.push(custom.clone());
        }
        cultures
    }

    /// Converts the form into pipeline input.
    pub fn to_user_input(&self) -> UserInput {
        UserInput::new(self.ingredients.clone())
            .with_cultures(self.all_cultures())
            .with_extreme_ingredient(self.extreme_ingredient.clone())
            .with_extremeness_level(self.extremeness_level)
            .with_restrictions(self.restrictions)
    }
}
