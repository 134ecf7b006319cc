//! The contract every chef agent implements.

use super::error::{AgentError, AgentResult};
use super::types::{ChefState, PipelineStage};

/// One stage of the chef pipeline.
///
/// `run` only reads the state and returns the stage's typed output;
/// `apply` writes that output into the one field the stage owns. Keeping the
/// two apart means a stage can never clobber another stage's result.
pub trait ChefAgent {
    /// Typed result produced by this stage.
    type Output;

    /// The stage this agent implements.
    const STAGE: PipelineStage;

    /// Stages whose output this agent reads.
    const REQUIRES: &'static [PipelineStage];

    /// Produces the stage output from the current state.
    fn run(&self, state: &ChefState) -> AgentResult<Self::Output>;

    /// One-line description of an output, used for events and logs.
    fn summarize(output: &Self::Output) -> String;

    /// Stores the output in the state.
    fn apply(output: Self::Output, state: &mut ChefState);

    /// Fails if a required upstream stage has not written into the state.
    fn ensure_upstream(state: &ChefState) -> AgentResult<()> {
        match Self::REQUIRES
            .iter()
            .find(|required| !state.has_completed(**required))
        {
            Some(missing) => Err(AgentError::MissingUpstream {
                stage: Self::STAGE,
                missing: *missing,
            }),
            None => Ok(()),
        }
    }

    /// Checks upstream stages, runs the agent and folds its output into the state.
    ///
    /// Returns the output summary.
    fn execute(&self, state: &mut ChefState) -> AgentResult<String> {
        Self::ensure_upstream(state)?;
        let output = self.run(state)?;
        let summary = Self::summarize(&output);
        Self::apply(output, state);
        state.mark_completed(Self::STAGE);
        Ok(summary)
    }
}
