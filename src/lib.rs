//! fusion-chef: extreme fusion cuisine generator.
//!
//! A fixed pipeline of chef agents turns a user's ingredients, chosen
//! cuisines and an "extreme" ingredient into a named fusion dish with a
//! recipe, rationale and illustrative image link. A small web front end
//! and a CLI drive the pipeline.

// Core modules
pub mod agents;
pub mod cli;
pub mod error;
pub mod pipeline;
pub mod prompts;
pub mod web;

pub use agents::{AgentError, ChefOutput, ChefState, PipelineEvent, PipelineStage, UserInput};
pub use error::{CatalogError, ServerError};
pub use pipeline::{ChefConfig, ChefPipeline, ChefRun, ConfigError, CriticPolicy};
