//! Insight templates for the cultural culinary scholar.

use crate::agents::types::CulturalInsight;

/// Builds the demo insight record for one cuisine.
///
/// The culture name is interpolated verbatim; no normalization is applied.
pub fn build_cultural_insight(culture: &str) -> CulturalInsight {
    CulturalInsight {
        key_ingredients: vec![format!("{culture}_ing1_demo"), format!("{culture}_ing2_demo")],
        flavors: vec![format!("{culture}_flavor_demo")],
        techniques: vec![format!("{culture}_tech_demo")],
        philosophy: format!("Philosophy of {culture} cuisine (demo)."),
    }
}
