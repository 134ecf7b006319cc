//! Placeholder agents for the fusion chef pipeline.
//!
//! Each agent implements [`ChefAgent`]: it reads the shared [`ChefState`],
//! returns a typed output, and writes that output back into its own field.

pub mod cultural_scholar;
pub mod error;
pub mod food_critic;
pub mod food_visualizer;
pub mod ingredient_brainstormer;
pub mod order_taker;
pub mod recipe_architect;
pub mod stage;
pub mod types;

pub use cultural_scholar::CulturalScholarAgent;
pub use error::{AgentError, AgentResult};
pub use food_critic::FoodCriticAgent;
pub use food_visualizer::{caption_for, FoodVisualizerAgent, DEFAULT_IMAGE_BASE};
pub use ingredient_brainstormer::IngredientBrainstormerAgent;
pub use order_taker::{split_ingredients, OrderTakerAgent};
pub use recipe_architect::RecipeArchitectAgent;
pub use stage::ChefAgent;
pub use types::{
    ChefOutput, ChefState, CulturalInsight, CulturalInsights, FusionIngredients, IngredientLine,
    PipelineEvent, PipelineStage, ProcessedOrder, Recipe, RecipeDraft, Restrictions, UserInput,
    DEFAULT_EXTREMENESS_LEVEL, DRINK_PAIRING_PLACEHOLDER,
};
