//! AI Food Critic agent.
//!
//! Writes a fixed critique of the finished dish. The default pipeline does
//! not run it; see [`crate::pipeline::CriticPolicy`].

use tracing::info;

use super::error::AgentResult;
use super::stage::ChefAgent;
use super::types::{ChefState, PipelineStage};
use crate::prompts::build_critique;

/// Used when the recipe has no menu name.
const FALLBACK_DISH: &str = "the dish";

#[derive(Debug, Clone, Default)]
pub struct FoodCriticAgent;

impl FoodCriticAgent {
    /// Agent name constant for identification.
    pub const AGENT_NAME: &'static str = "food_critic";

    pub fn new() -> Self {
        Self
    }
}

impl ChefAgent for FoodCriticAgent {
    type Output = String;

    const STAGE: PipelineStage = PipelineStage::FoodCritique;
    const REQUIRES: &'static [PipelineStage] = &[PipelineStage::RecipeDesign];

    fn run(&self, state: &ChefState) -> AgentResult<String> {
        let menu_name = match state.recipe.menu_name.as_str() {
            "" => FALLBACK_DISH,
            name => name,
        };
        let critique = build_critique(menu_name);
        info!(agent = Self::AGENT_NAME, %critique, "Critique written");
        Ok(critique)
    }

    fn summarize(output: &String) -> String {
        output.clone()
    }

    fn apply(output: String, state: &mut ChefState) {
        state.critique = output;
    }
}
