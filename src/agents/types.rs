//! Core types for the fusion chef pipeline.
//!
//! Defines the user input record, the typed output of every stage, the
//! per-run [`ChefState`], the user-facing [`ChefOutput`], and the stage and
//! event types emitted while a run progresses.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::{BTreeMap, HashSet};

/// Extremeness level used when the caller does not pick one.
pub const DEFAULT_EXTREMENESS_LEVEL: u8 = 3;

/// Drink pairing shown for every dish until pairing is implemented.
pub const DRINK_PAIRING_PLACEHOLDER: &str = "AI Suggested Drink (to be implemented, demo)";

/// Dietary restrictions selected on the kitchen form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Restrictions {
    pub vegetarian: bool,
    pub vegan: bool,
    pub nut_allergy: bool,
    pub not_spicy: bool,
}

impl Restrictions {
    /// Returns the labels of the restrictions that are switched on.
    pub fn active(&self) -> Vec<&'static str> {
        [
            (self.vegetarian, "vegetarian"),
            (self.vegan, "vegan"),
            (self.nut_allergy, "nut_allergy"),
            (self.not_spicy, "not_spicy"),
        ]
        .into_iter()
        .filter_map(|(on, label)| on.then_some(label))
        .collect()
    }
}

/// Raw preferences collected from the form (or any other caller).
///
/// Every field is optional on the wire; absent or `null` fields take their
/// defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserInput {
    /// Comma-separated list of ingredients the user has at hand.
    #[serde(deserialize_with = "null_as_default")]
    pub ingredients: String,
    /// Cuisines to fuse, in the order they were picked.
    #[serde(deserialize_with = "null_as_default")]
    pub cultures: Vec<String>,
    /// Optional "exotic" ingredient the dish must use.
    #[serde(deserialize_with = "null_as_default")]
    pub extreme_ingredient: String,
    /// Desired unconventionality, 1-5.
    pub extremeness_level: Option<u8>,
    pub restrictions: Option<Restrictions>,
}

/// Deserializes `null` as the type's default value.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl UserInput {
    /// Creates an input from a comma-separated ingredient string.
    pub fn new(ingredients: impl Into<String>) -> Self {
        Self {
            ingredients: ingredients.into(),
            ..Self::default()
        }
    }

    /// Sets the target cultures.
    pub fn with_cultures(mut self, cultures: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.cultures = cultures.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the extreme ingredient.
    pub fn with_extreme_ingredient(mut self, ingredient: impl Into<String>) -> Self {
        self.extreme_ingredient = ingredient.into();
        self
    }

    /// Sets the extremeness level.
    pub fn with_extremeness_level(mut self, level: u8) -> Self {
        self.extremeness_level = Some(level);
        self
    }

    /// Sets the dietary restrictions.
    pub fn with_restrictions(mut self, restrictions: Restrictions) -> Self {
        self.restrictions = Some(restrictions);
        self
    }
}

/// Structured order produced by the order taker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessedOrder {
    pub main_ingredients: Vec<String>,
    pub target_cultures: Vec<String>,
    pub extreme_ingredient_user: String,
    pub extremeness_level: u8,
    pub restrictions: Restrictions,
    pub parsed_successfully: bool,
}

impl Default for ProcessedOrder {
    fn default() -> Self {
        Self {
            main_ingredients: Vec::new(),
            target_cultures: Vec::new(),
            extreme_ingredient_user: String::new(),
            extremeness_level: DEFAULT_EXTREMENESS_LEVEL,
            restrictions: Restrictions::default(),
            parsed_successfully: false,
        }
    }
}

/// What the cultural scholar knows about one cuisine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CulturalInsight {
    pub key_ingredients: Vec<String>,
    pub flavors: Vec<String>,
    pub techniques: Vec<String>,
    pub philosophy: String,
}

/// Insights keyed by culture name.
pub type CulturalInsights = BTreeMap<String, CulturalInsight>;

/// Deduplicated pool of ingredients the dish is built from.
///
/// Iteration order is unspecified; callers that need "the first" ingredient
/// must take a single snapshot with [`FusionIngredients::ordered`] and work
/// from that.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FusionIngredients(HashSet<String>);

impl FusionIngredients {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, ingredient: impl Into<String>) -> bool {
        self.0.insert(ingredient.into())
    }

    pub fn contains(&self, ingredient: &str) -> bool {
        self.0.contains(ingredient)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &String> {
        self.0.iter()
    }

    /// Snapshot of the set in its current iteration order.
    pub fn ordered(&self) -> Vec<&str> {
        self.0.iter().map(String::as_str).collect()
    }
}

impl<S: Into<String>> FromIterator<S> for FusionIngredients {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

/// One line of the detailed ingredient list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngredientLine {
    pub name: String,
    pub quantity: String,
}

/// The dish designed by the recipe architect.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    pub menu_name: String,
    pub ingredients_list_detailed: Vec<IngredientLine>,
    pub cooking_steps: String,
    pub chef_rationale: String,
}

/// Output of the recipe architect: the recipe plus a prompt for the visualizer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeDraft {
    pub recipe: Recipe,
    pub image_prompt: String,
}

/// State threaded through one pipeline run.
///
/// Created per submission and dropped once the [`ChefOutput`] is derived.
/// Stages only ever fill in their own field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChefState {
    pub user_input: UserInput,
    pub processed_order: ProcessedOrder,
    pub cultural_insights: CulturalInsights,
    pub fusion_ingredients: FusionIngredients,
    pub recipe: Recipe,
    pub image_prompt: String,
    pub image_url: String,
    pub critique: String,
    /// Stages that have written into this state, in execution order.
    pub completed_stages: Vec<PipelineStage>,
}

impl ChefState {
    /// Creates a fresh state holding only the user's input.
    pub fn new(user_input: UserInput) -> Self {
        Self {
            user_input,
            ..Self::default()
        }
    }

    /// Returns true if the stage has already written into this state.
    pub fn has_completed(&self, stage: PipelineStage) -> bool {
        self.completed_stages.contains(&stage)
    }

    pub(crate) fn mark_completed(&mut self, stage: PipelineStage) {
        if !self.has_completed(stage) {
            self.completed_stages.push(stage);
        }
    }
}

/// The record handed to the front end after a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChefOutput {
    pub menu_name: String,
    pub image_url: String,
    pub ingredients_list: Vec<String>,
    pub cooking_steps: String,
    pub chef_rationale: String,
    pub drink_pairing: String,
    /// Empty when the critic did not run.
    pub critique: String,
}

impl ChefOutput {
    /// Derives the user-facing record from a finished state.
    ///
    /// Fields a stage never filled in fall back to demo placeholders.
    pub fn from_state(state: &ChefState) -> Self {
        let recipe = &state.recipe;
        Self {
            menu_name: or_placeholder(&recipe.menu_name, "AI Chef's Special (Demo)"),
            image_url: or_placeholder(&state.image_url, "https://via.placeholder.com/300"),
            ingredients_list: recipe
                .ingredients_list_detailed
                .iter()
                .map(|line| line.name.clone())
                .collect(),
            cooking_steps: or_placeholder(&recipe.cooking_steps, "No steps provided (demo)."),
            chef_rationale: or_placeholder(&recipe.chef_rationale, "No rationale provided (demo)."),
            drink_pairing: DRINK_PAIRING_PLACEHOLDER.to_string(),
            critique: state.critique.clone(),
        }
    }
}

fn or_placeholder(value: &str, placeholder: &str) -> String {
    if value.is_empty() {
        placeholder.to_string()
    } else {
        value.to_string()
    }
}

/// Stages of the chef pipeline, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PipelineStage {
    OrderTaking,
    CulturalResearch,
    IngredientBrainstorm,
    RecipeDesign,
    FoodVisualization,
    FoodCritique,
}

impl PipelineStage {
    /// Returns the stages run by default, in order.
    pub fn default_stages() -> Vec<PipelineStage> {
        vec![
            PipelineStage::OrderTaking,
            PipelineStage::CulturalResearch,
            PipelineStage::IngredientBrainstorm,
            PipelineStage::RecipeDesign,
            PipelineStage::FoodVisualization,
        ]
    }

    /// Returns the display name for this stage.
    pub fn display_name(&self) -> &'static str {
        match self {
            PipelineStage::OrderTaking => "Order Taker",
            PipelineStage::CulturalResearch => "Cultural Culinary Scholar",
            PipelineStage::IngredientBrainstorm => "Extreme Ingredient Brainstormer",
            PipelineStage::RecipeDesign => "Avant-Garde Recipe Architect",
            PipelineStage::FoodVisualization => "AI Food Visualizer",
            PipelineStage::FoodCritique => "AI Food Critic",
        }
    }
}

impl std::fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Events emitted while a pipeline run progresses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum PipelineEvent {
    StageStarted {
        stage: PipelineStage,
        timestamp: DateTime<Utc>,
    },
    StageCompleted {
        stage: PipelineStage,
        /// One-line description of what the stage produced.
        summary: String,
        timestamp: DateTime<Utc>,
    },
    /// An optional stage was not run.
    StageSkipped {
        stage: PipelineStage,
        reason: String,
        timestamp: DateTime<Utc>,
    },
    StageFailed {
        stage: PipelineStage,
        error: String,
        timestamp: DateTime<Utc>,
    },
    PipelineCompleted {
        output: ChefOutput,
        timestamp: DateTime<Utc>,
    },
    PipelineFailed {
        error: String,
        timestamp: DateTime<Utc>,
    },
}

impl PipelineEvent {
    pub fn stage_started(stage: PipelineStage) -> Self {
        PipelineEvent::StageStarted {
            stage,
            timestamp: Utc::now(),
        }
    }

    pub fn stage_completed(stage: PipelineStage, summary: impl Into<String>) -> Self {
        PipelineEvent::StageCompleted {
            stage,
            summary: summary.into(),
            timestamp: Utc::now(),
        }
    }

    pub fn stage_skipped(stage: PipelineStage, reason: impl Into<String>) -> Self {
        PipelineEvent::StageSkipped {
            stage,
            reason: reason.into(),
            timestamp: Utc::now(),
        }
    }

    pub fn stage_failed(stage: PipelineStage, error: impl Into<String>) -> Self {
        PipelineEvent::StageFailed {
            stage,
            error: error.into(),
            timestamp: Utc::now(),
        }
    }

    pub fn pipeline_completed(output: ChefOutput) -> Self {
        PipelineEvent::PipelineCompleted {
            output,
            timestamp: Utc::now(),
        }
    }

    pub fn pipeline_failed(error: impl Into<String>) -> Self {
        PipelineEvent::PipelineFailed {
            error: error.into(),
            timestamp: Utc::now(),
        }
    }

    /// Returns the stage this event refers to, if any.
    pub fn stage(&self) -> Option<PipelineStage> {
        match self {
            PipelineEvent::StageStarted { stage, .. }
            | PipelineEvent::StageCompleted { stage, .. }
            | PipelineEvent::StageSkipped { stage, .. }
            | PipelineEvent::StageFailed { stage, .. } => Some(*stage),
            PipelineEvent::PipelineCompleted { .. } | PipelineEvent::PipelineFailed { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_input_defaults_from_empty_json() {
        let input: UserInput = serde_json::from_str("{}").expect("empty object should parse");
        assert_eq!(input.ingredients, "");
        assert!(input.cultures.is_empty());
        assert_eq!(input.extremeness_level, None);
        assert_eq!(input.restrictions, None);
    }

    #[test]
    fn test_user_input_null_fields_take_defaults() {
        let input: UserInput = serde_json::from_str(
            r#"{"ingredients": null, "cultures": null, "extreme_ingredient": null,
                "extremeness_level": null, "restrictions": null}"#,
        )
        .expect("null fields should parse");
        assert_eq!(input, UserInput::default());
    }

    #[test]
    fn test_partial_restrictions_default_missing_flags() {
        let input: UserInput =
            serde_json::from_str(r#"{"restrictions": {"vegan": true}}"#).expect("should parse");
        let restrictions = input.restrictions.expect("restrictions present");
        assert!(restrictions.vegan);
        assert!(!restrictions.vegetarian);
        assert_eq!(restrictions.active(), vec!["vegan"]);
    }

    #[test]
    fn test_fusion_ingredients_deduplicates() {
        let set: FusionIngredients = ["a", "b", "a"].into_iter().collect();
        assert_eq!(set.len(), 2);
        assert!(set.contains("a"));
        assert!(set.contains("b"));
    }

    #[test]
    fn test_processed_order_default_level() {
        assert_eq!(
            ProcessedOrder::default().extremeness_level,
            DEFAULT_EXTREMENESS_LEVEL
        );
    }

    #[test]
    fn test_output_from_empty_state_uses_placeholders() {
        let output = ChefOutput::from_state(&ChefState::new(UserInput::default()));
        assert_eq!(output.menu_name, "AI Chef's Special (Demo)");
        assert_eq!(output.image_url, "https://via.placeholder.com/300");
        assert!(output.ingredients_list.is_empty());
        assert_eq!(output.cooking_steps, "No steps provided (demo).");
        assert_eq!(output.chef_rationale, "No rationale provided (demo).");
        assert_eq!(output.drink_pairing, DRINK_PAIRING_PLACEHOLDER);
        assert_eq!(output.critique, "");
    }

    #[test]
    fn test_output_flattens_ingredient_names_in_order() {
        let mut state = ChefState::default();
        state.recipe.ingredients_list_detailed = vec![
            IngredientLine {
                name: "rice".to_string(),
                quantity: "1 unit (demo)".to_string(),
            },
            IngredientLine {
                name: "chili".to_string(),
                quantity: "1 unit (demo)".to_string(),
            },
        ];
        let output = ChefOutput::from_state(&state);
        assert_eq!(output.ingredients_list, vec!["rice", "chili"]);
    }

    #[test]
    fn test_mark_completed_is_idempotent() {
        let mut state = ChefState::default();
        state.mark_completed(PipelineStage::OrderTaking);
        state.mark_completed(PipelineStage::OrderTaking);
        assert_eq!(state.completed_stages, vec![PipelineStage::OrderTaking]);
    }

    #[test]
    fn test_pipeline_stage_display() {
        assert_eq!(PipelineStage::OrderTaking.to_string(), "Order Taker");
        assert_eq!(
            PipelineStage::FoodVisualization.to_string(),
            "AI Food Visualizer"
        );
        assert_eq!(PipelineStage::default_stages().len(), 5);
        assert!(!PipelineStage::default_stages().contains(&PipelineStage::FoodCritique));
    }

    #[test]
    fn test_event_stage_accessor() {
        let event = PipelineEvent::stage_failed(PipelineStage::RecipeDesign, "boom");
        assert_eq!(event.stage(), Some(PipelineStage::RecipeDesign));
        assert_eq!(PipelineEvent::pipeline_failed("boom").stage(), None);
    }
}
