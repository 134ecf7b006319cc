//! AI Food Visualizer agent.
//!
//! Builds a placeholder image URL from the menu name. No image model is
//! called; the image prompt is only logged.

use tracing::{debug, info};

use super::error::{AgentError, AgentResult};
use super::stage::ChefAgent;
use super::types::{ChefState, PipelineStage};

/// Placeholder image service used when none is configured.
pub const DEFAULT_IMAGE_BASE: &str = "https://via.placeholder.com/500x300";

/// Maximum number of characters of the menu name carried into the URL.
pub const MAX_CAPTION_CHARS: usize = 50;

/// Used when the recipe has no menu name yet.
const FALLBACK_MENU_NAME: &str = "Fusion Dish";

/// Turns a menu name into the `text=` caption: spaces become `+`, then the
/// result is cut to [`MAX_CAPTION_CHARS`] characters.
pub fn caption_for(menu_name: &str) -> String {
    menu_name
        .replace(' ', "+")
        .chars()
        .take(MAX_CAPTION_CHARS)
        .collect()
}

/// Agent that "renders" the dish.
#[derive(Debug, Clone)]
pub struct FoodVisualizerAgent {
    image_base: String,
}

impl FoodVisualizerAgent {
    /// Agent name constant for identification.
    pub const AGENT_NAME: &'static str = "food_visualizer";

    /// Creates a visualizer that points at the default placeholder service.
    pub fn new() -> Self {
        Self::with_image_base(DEFAULT_IMAGE_BASE)
    }

    /// Creates a visualizer with a custom placeholder base URL.
    pub fn with_image_base(image_base: impl Into<String>) -> Self {
        Self {
            image_base: image_base.into(),
        }
    }

    /// Builds the placeholder URL for a menu name.
    pub fn image_url(&self, menu_name: &str) -> String {
        format!("{}.png?text={}", self.image_base, caption_for(menu_name))
    }
}

impl Default for FoodVisualizerAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl ChefAgent for FoodVisualizerAgent {
    type Output = String;

    const STAGE: PipelineStage = PipelineStage::FoodVisualization;
    const REQUIRES: &'static [PipelineStage] = &[PipelineStage::RecipeDesign];

    fn run(&self, state: &ChefState) -> AgentResult<String> {
        if self.image_base.trim().is_empty() {
            return Err(AgentError::PipelineStageError {
                stage: Self::STAGE,
                reason: "placeholder image base URL is empty".to_string(),
            });
        }

        debug!(agent = Self::AGENT_NAME, image_prompt = %state.image_prompt, "Visualizing dish");
        let menu_name = if state.recipe.menu_name.is_empty() {
            FALLBACK_MENU_NAME
        } else {
            state.recipe.menu_name.as_str()
        };
        let image_url = self.image_url(menu_name);
        info!(agent = Self::AGENT_NAME, %image_url, "Generated image URL");
        Ok(image_url)
    }

    fn summarize(output: &String) -> String {
        output.clone()
    }

    fn apply(output: String, state: &mut ChefState) {
        state.image_url = output;
    }
}
