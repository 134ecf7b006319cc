//! Pipeline orchestrator for the fusion chef.
//!
//! Runs the agents in their fixed order on a fresh [`ChefState`], reports
//! progress as [`PipelineEvent`]s and derives the final [`ChefOutput`].
//!
//! Order: Order Taker → Cultural Scholar → Ingredient Brainstormer →
//! Recipe Architect → Food Visualizer → (Food Critic, per [`CriticPolicy`]).

use std::time::Instant;

use serde::Serialize;
use tokio::sync::mpsc;
use tracing::{info, info_span, warn};
use uuid::Uuid;

use crate::agents::{
    AgentResult, ChefAgent, ChefOutput, ChefState, CulturalScholarAgent, FoodCriticAgent,
    FoodVisualizerAgent, IngredientBrainstormerAgent, OrderTakerAgent, PipelineEvent,
    PipelineStage, RecipeArchitectAgent, UserInput,
};

use super::config::{ChefConfig, CriticPolicy};

/// Channel the pipeline reports progress on.
pub type EventSender = mpsc::UnboundedSender<PipelineEvent>;

/// Everything produced by one pipeline run.
#[derive(Debug, Clone, Serialize)]
pub struct ChefRun {
    /// Unique identifier for this run.
    pub run_id: Uuid,
    /// Final state, including every stage's output.
    pub state: ChefState,
    /// The user-facing record derived from the state.
    pub output: ChefOutput,
    /// Wall-clock duration of the run in milliseconds.
    pub duration_ms: u64,
}

impl ChefRun {
    /// Stages that ran, in order.
    pub fn stages(&self) -> &[PipelineStage] {
        &self.state.completed_stages
    }
}

/// Runs the chef agents in sequence.
///
/// A pipeline holds no per-run data, so one instance can serve any number
/// of runs.
#[derive(Debug, Clone, Default)]
pub struct ChefPipeline {
    order_taker: OrderTakerAgent,
    scholar: CulturalScholarAgent,
    brainstormer: IngredientBrainstormerAgent,
    architect: RecipeArchitectAgent,
    visualizer: FoodVisualizerAgent,
    critic: FoodCriticAgent,
    critic_policy: CriticPolicy,
}

impl ChefPipeline {
    /// Creates a pipeline with the default agents and no critic.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a pipeline from configuration.
    pub fn from_config(config: &ChefConfig) -> Self {
        Self::new()
            .with_critic_policy(config.critic_policy)
            .with_image_base(config.placeholder_image_base.clone())
    }

    /// Sets when the critic runs.
    pub fn with_critic_policy(mut self, policy: CriticPolicy) -> Self {
        self.critic_policy = policy;
        self
    }

    /// Points the visualizer at a different placeholder image service.
    pub fn with_image_base(mut self, base: impl Into<String>) -> Self {
        self.visualizer = FoodVisualizerAgent::with_image_base(base);
        self
    }

    /// Returns the critic policy.
    pub fn critic_policy(&self) -> CriticPolicy {
        self.critic_policy
    }

    /// Runs the pipeline and returns the user-facing record.
    pub fn run(&self, input: UserInput) -> AgentResult<ChefOutput> {
        self.run_with_report(input, None).map(|run| run.output)
    }

    /// Runs the pipeline, reporting progress on `events`.
    pub fn run_with_events(&self, input: UserInput, events: &EventSender) -> AgentResult<ChefOutput> {
        self.run_with_report(input, Some(events)).map(|run| run.output)
    }

    /// Runs the pipeline and returns the full run report.
    ///
    /// The first failing stage aborts the run; its error is returned as-is.
    pub fn run_with_report(
        &self,
        input: UserInput,
        events: Option<&EventSender>,
    ) -> AgentResult<ChefRun> {
        let run_id = Uuid::new_v4();
        let span = info_span!("chef_run", %run_id);
        let _guard = span.enter();
        let start = Instant::now();

        let mut state = ChefState::new(input);
        if let Err(e) = self.run_stages(&mut state, events) {
            warn!(error = %e, "Chef pipeline failed");
            send_event(events, PipelineEvent::pipeline_failed(e.to_string()));
            return Err(e);
        }

        let output = ChefOutput::from_state(&state);
        let duration_ms = start.elapsed().as_millis() as u64;
        info!(
            menu_name = %output.menu_name,
            stages = state.completed_stages.len(),
            duration_ms,
            "Chef pipeline completed"
        );
        send_event(events, PipelineEvent::pipeline_completed(output.clone()));

        Ok(ChefRun {
            run_id,
            state,
            output,
            duration_ms,
        })
    }

    fn run_stages(&self, state: &mut ChefState, events: Option<&EventSender>) -> AgentResult<()> {
        self.run_stage(&self.order_taker, state, events)?;
        self.run_stage(&self.scholar, state, events)?;
        self.run_stage(&self.brainstormer, state, events)?;
        self.run_stage(&self.architect, state, events)?;
        self.run_stage(&self.visualizer, state, events)?;

        let level = state.processed_order.extremeness_level;
        if self.critic_policy.should_critique(level) {
            self.run_stage(&self.critic, state, events)?;
        } else {
            send_event(
                events,
                PipelineEvent::stage_skipped(
                    PipelineStage::FoodCritique,
                    format!("critic policy '{}' at extremeness {}", self.critic_policy, level),
                ),
            );
        }

        Ok(())
    }

    /// Runs one agent, emitting start/completion/failure events around it.
    fn run_stage<A: ChefAgent>(
        &self,
        agent: &A,
        state: &mut ChefState,
        events: Option<&EventSender>,
    ) -> AgentResult<()> {
        info!(stage = %A::STAGE, "Running stage");
        send_event(events, PipelineEvent::stage_started(A::STAGE));

        match agent.execute(state) {
            Ok(summary) => {
                send_event(events, PipelineEvent::stage_completed(A::STAGE, summary));
                Ok(())
            }
            Err(e) => {
                send_event(events, PipelineEvent::stage_failed(A::STAGE, e.to_string()));
                Err(e)
            }
        }
    }
}

/// Sends an event if a channel is attached, ignoring a dropped receiver.
fn send_event(events: Option<&EventSender>, event: PipelineEvent) {
    if let Some(tx) = events {
        let _ = tx.send(event);
    }
}
