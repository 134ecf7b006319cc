//! Error types for the chef agents.
//!
//! None of the placeholder agents fail on their own input; errors describe
//! stages run out of order and failures surfaced by a stage implementation.

use thiserror::Error;

use super::types::PipelineStage;

/// Errors that can occur during agent operations.
#[derive(Debug, Error)]
pub enum AgentError {
    /// A stage ran before a stage whose output it reads.
    #[error("Stage '{stage}' requires output from '{missing}', which has not run")]
    MissingUpstream {
        stage: PipelineStage,
        missing: PipelineStage,
    },

    /// Pipeline stage failed.
    #[error("Pipeline stage '{stage}' failed: {reason}")]
    PipelineStageError {
        stage: PipelineStage,
        reason: String,
    },
}

impl AgentError {
    /// Returns the stage that raised the error.
    pub fn stage(&self) -> PipelineStage {
        match self {
            AgentError::MissingUpstream { stage, .. }
            | AgentError::PipelineStageError { stage, .. } => *stage,
        }
    }
}

/// Result type alias for agent operations.
pub type AgentResult<T> = Result<T, AgentError>;
