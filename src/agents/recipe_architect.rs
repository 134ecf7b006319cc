//! Avant-Garde Recipe Architect agent.
//!
//! Designs the dish from the fusion ingredient pool and derives the prompt
//! handed to the food visualizer.

use tracing::{debug, info};

use super::error::AgentResult;
use super::stage::ChefAgent;
use super::types::{ChefState, IngredientLine, PipelineStage, Recipe, RecipeDraft};
use crate::prompts::{
    build_chef_rationale, build_image_prompt, build_menu_name, DEMO_COOKING_STEPS, DEMO_QUANTITY,
};

/// Agent that writes the recipe.
#[derive(Debug, Clone, Default)]
pub struct RecipeArchitectAgent;

impl RecipeArchitectAgent {
    /// Agent name constant for identification.
    pub const AGENT_NAME: &'static str = "recipe_architect";

    pub fn new() -> Self {
        Self
    }
}

impl ChefAgent for RecipeArchitectAgent {
    type Output = RecipeDraft;

    const STAGE: PipelineStage = PipelineStage::RecipeDesign;
    const REQUIRES: &'static [PipelineStage] =
        &[PipelineStage::OrderTaking, PipelineStage::IngredientBrainstorm];

    fn run(&self, state: &ChefState) -> AgentResult<RecipeDraft> {
        let cultures = &state.processed_order.target_cultures;
        // One snapshot so the name, rationale, list and prompt agree on order.
        let ingredients = state.fusion_ingredients.ordered();

        let menu_name = build_menu_name(cultures, &ingredients);
        let recipe = Recipe {
            chef_rationale: build_chef_rationale(cultures, &ingredients),
            ingredients_list_detailed: ingredients
                .iter()
                .map(|name| IngredientLine {
                    name: name.to_string(),
                    quantity: DEMO_QUANTITY.to_string(),
                })
                .collect(),
            cooking_steps: DEMO_COOKING_STEPS.to_string(),
            menu_name,
        };
        let image_prompt = build_image_prompt(&recipe.menu_name, cultures, &ingredients);

        info!(agent = Self::AGENT_NAME, menu_name = %recipe.menu_name, "Recipe designed");
        debug!(agent = Self::AGENT_NAME, %image_prompt, "Image prompt");

        Ok(RecipeDraft {
            recipe,
            image_prompt,
        })
    }

    fn summarize(output: &RecipeDraft) -> String {
        output.recipe.menu_name.clone()
    }

    fn apply(output: RecipeDraft, state: &mut ChefState) {
        state.recipe = output.recipe;
        state.image_prompt = output.image_prompt;
    }
}
