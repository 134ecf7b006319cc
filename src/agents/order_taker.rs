//! Order Taker agent.
//!
//! Turns the raw form input into a structured [`ProcessedOrder`]. There is no
//! language understanding here: ingredients are split on commas and every
//! other field passes through, with defaults for anything missing.

use tracing::debug;

use super::error::AgentResult;
use super::stage::ChefAgent;
use super::types::{ChefState, PipelineStage, ProcessedOrder, DEFAULT_EXTREMENESS_LEVEL};

/// Splits a comma-separated ingredient string and trims each piece.
///
/// Empty input yields an empty list. Interior empty pieces (e.g. `"a,,b"`)
/// are kept as empty strings.
pub fn split_ingredients(raw: &str) -> Vec<String> {
    if raw.is_empty() {
        return Vec::new();
    }
    raw.split(',').map(|piece| piece.trim().to_string()).collect()
}

/// Agent that parses the user's order.
#[derive(Debug, Clone, Default)]
pub struct OrderTakerAgent;

impl OrderTakerAgent {
    /// Agent name constant for identification.
    pub const AGENT_NAME: &'static str = "order_taker";

    pub fn new() -> Self {
        Self
    }
}

impl ChefAgent for OrderTakerAgent {
    type Output = ProcessedOrder;

    const STAGE: PipelineStage = PipelineStage::OrderTaking;
    const REQUIRES: &'static [PipelineStage] = &[];

    fn run(&self, state: &ChefState) -> AgentResult<ProcessedOrder> {
        let input = &state.user_input;
        let order = ProcessedOrder {
            main_ingredients: split_ingredients(&input.ingredients),
            target_cultures: input.cultures.clone(),
            extreme_ingredient_user: input.extreme_ingredient.clone(),
            extremeness_level: input.extremeness_level.unwrap_or(DEFAULT_EXTREMENESS_LEVEL),
            restrictions: input.restrictions.unwrap_or_default(),
            parsed_successfully: true,
        };
        debug!(
            agent = Self::AGENT_NAME,
            ingredients = ?order.main_ingredients,
            cultures = ?order.target_cultures,
            restrictions = ?order.restrictions.active(),
            "Processed order"
        );
        Ok(order)
    }

    fn summarize(output: &ProcessedOrder) -> String {
        format!(
            "{} ingredient(s), {} culture(s), extremeness {}",
            output.main_ingredients.len(),
            output.target_cultures.len(),
            output.extremeness_level
        )
    }

    fn apply(output: ProcessedOrder, state: &mut ChefState) {
        state.processed_order = output;
    }
}
