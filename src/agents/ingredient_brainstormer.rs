//! Extreme Ingredient Brainstormer agent.
//!
//! Pools the user's ingredients, every culture's key ingredients and the
//! optional extreme ingredient into a deduplicated set.

use tracing::debug;

use super::error::AgentResult;
use super::stage::ChefAgent;
use super::types::{ChefState, FusionIngredients, PipelineStage};

/// Agent that assembles the fusion ingredient pool.
#[derive(Debug, Clone, Default)]
pub struct IngredientBrainstormerAgent;

impl IngredientBrainstormerAgent {
    /// Agent name constant for identification.
    pub const AGENT_NAME: &'static str = "ingredient_brainstormer";

    pub fn new() -> Self {
        Self
    }
}

impl ChefAgent for IngredientBrainstormerAgent {
    type Output = FusionIngredients;

    const STAGE: PipelineStage = PipelineStage::IngredientBrainstorm;
    const REQUIRES: &'static [PipelineStage] =
        &[PipelineStage::OrderTaking, PipelineStage::CulturalResearch];

    fn run(&self, state: &ChefState) -> AgentResult<FusionIngredients> {
        let order = &state.processed_order;
        let cultural = state
            .cultural_insights
            .values()
            .flat_map(|insight| insight.key_ingredients.iter());

        let mut fusion: FusionIngredients = order
            .main_ingredients
            .iter()
            .chain(cultural)
            .cloned()
            .collect();

        if !order.extreme_ingredient_user.is_empty() {
            fusion.insert(order.extreme_ingredient_user.clone());
        }

        debug!(agent = Self::AGENT_NAME, ingredients = ?fusion.ordered(), "Fusion ingredients");
        Ok(fusion)
    }

    fn summarize(output: &FusionIngredients) -> String {
        format!("{} unique ingredient(s)", output.len())
    }

    fn apply(output: FusionIngredients, state: &mut ChefState) {
        state.fusion_ingredients = output;
    }
}
