//! Cultural Culinary Scholar agent.
//!
//! Produces one insight record per target culture from a fixed template.

use tracing::debug;

use super::error::AgentResult;
use super::stage::ChefAgent;
use super::types::{ChefState, CulturalInsights, PipelineStage};
use crate::prompts::build_cultural_insight;

/// Agent that looks up (fabricates) knowledge about each cuisine.
#[derive(Debug, Clone, Default)]
pub struct CulturalScholarAgent;

impl CulturalScholarAgent {
    /// Agent name constant for identification.
    pub const AGENT_NAME: &'static str = "cultural_scholar";

    pub fn new() -> Self {
        Self
    }
}

impl ChefAgent for CulturalScholarAgent {
    type Output = CulturalInsights;

    const STAGE: PipelineStage = PipelineStage::CulturalResearch;
    const REQUIRES: &'static [PipelineStage] = &[PipelineStage::OrderTaking];

    fn run(&self, state: &ChefState) -> AgentResult<CulturalInsights> {
        let insights: CulturalInsights = state
            .processed_order
            .target_cultures
            .iter()
            .map(|culture| (culture.clone(), build_cultural_insight(culture)))
            .collect();
        debug!(agent = Self::AGENT_NAME, cultures = insights.len(), "Cultural insights ready");
        Ok(insights)
    }

    fn summarize(output: &CulturalInsights) -> String {
        if output.is_empty() {
            "no cultures to research".to_string()
        } else {
            format!(
                "insights for {}",
                output.keys().cloned().collect::<Vec<_>>().join(", ")
            )
        }
    }

    fn apply(output: CulturalInsights, state: &mut ChefState) {
        state.cultural_insights = output;
    }
}
