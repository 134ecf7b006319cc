//! Pipeline orchestration for the fusion chef.
//!
//! # Architecture
//!
//! - **Orchestrator**: [`ChefPipeline`] runs the agents in order on a fresh
//!   state and derives the user-facing [`ChefOutput`](crate::agents::ChefOutput)
//! - **Config**: [`ChefConfig`] for the pipeline and the kitchen server
//!
//! # Example
//!
//! ```rust
//! use fusion_chef::agents::UserInput;
//! use fusion_chef::pipeline::{ChefPipeline, CriticPolicy};
//!
//! let pipeline = ChefPipeline::new().with_critic_policy(CriticPolicy::Always);
//! let input = UserInput::new("shrimp, mango")
//!     .with_cultures(["Thai", "Mexican"])
//!     .with_extreme_ingredient("durian");
//!
//! let output = pipeline.run(input).expect("placeholder stages do not fail");
//! assert!(output.menu_name.starts_with("AI Fusion: Thai, Mexican Delight with "));
//! assert!(!output.critique.is_empty());
//! ```
//!
//! # Progress events
//!
//! ```rust
//! use fusion_chef::agents::{PipelineEvent, UserInput};
//! use fusion_chef::pipeline::ChefPipeline;
//! use tokio::sync::mpsc;
//!
//! let (tx, mut rx) = mpsc::unbounded_channel();
//! ChefPipeline::new()
//!     .run_with_events(UserInput::new("rice"), &tx)
//!     .expect("placeholder stages do not fail");
//!
//! while let Ok(event) = rx.try_recv() {
//!     if let PipelineEvent::StageCompleted { stage, summary, .. } = event {
//!         println!("{stage}: {summary}");
//!     }
//! }
//! ```

pub mod config;
pub mod orchestrator;

pub use config::{ChefConfig, ConfigError, CriticPolicy, DEFAULT_BIND_ADDR, MAX_EXTREMENESS_LEVEL};
pub use orchestrator::{ChefPipeline, ChefRun, EventSender};
