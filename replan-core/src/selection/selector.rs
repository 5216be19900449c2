use std::sync::Arc;

use tokio::runtime::Handle;
use tracing::{debug, error, warn};

use crate::llm::LlmClient;
use crate::population::Agent;

use super::error::SelectionError;
use super::fallback::best_scored;
use super::parse::parse_plan_index;
use super::query::{build_query, SYSTEM_PROMPT};

/// Host-facing extension point: choose one plan for an agent, or none.
///
/// The host replanning loop calls this once per agent; implementations
/// must never mutate the candidate set and must return a member of it.
pub trait PlanSelector<A: Agent> {
    fn select_plan<'a>(&self, agent: &'a A) -> Option<&'a A::Plan>;
}

/// Plan selection delegated to a chat-completion oracle, with a
/// deterministic score-based fallback whenever the oracle is unreachable
/// or returns an unusable answer.
///
/// One instance is shared by all agents; the underlying client owns the
/// connection pool and is safe for concurrent calls.
pub struct LlmPlanSelector {
    client: Arc<dyn LlmClient>,
}

impl LlmPlanSelector {
    pub fn new(client: Arc<dyn LlmClient>) -> Self {
        Self { client }
    }

    pub async fn select_plan_async<'a, A: Agent>(&self, agent: &'a A) -> Option<&'a A::Plan> {
        let plans = agent.plans();
        if plans.is_empty() {
            warn!(target: "selector", agent = %agent.id(), "no plans available");
            return None;
        }
        // A single candidate never justifies an oracle round trip.
        if plans.len() == 1 {
            return plans.first();
        }

        match self.query_oracle(agent).await {
            Ok(index) => {
                debug!(target: "selector", agent = %agent.id(), index, "oracle selected plan");
                plans.get(index)
            }
            Err(SelectionError::IndexOutOfRange { index, plan_count }) => {
                warn!(
                    target: "selector",
                    agent = %agent.id(),
                    index,
                    plan_count,
                    "oracle returned an invalid plan index, using fallback"
                );
                best_scored(plans)
            }
            Err(err) => {
                error!(
                    target: "selector",
                    agent = %agent.id(),
                    "oracle selection failed: {err}, using fallback"
                );
                best_scored(plans)
            }
        }
    }

    /// Blocking variant for hosts that drive replanning from synchronous
    /// worker threads.
    pub fn select_plan<'a, A: Agent>(&self, agent: &'a A) -> Option<&'a A::Plan> {
        if let Ok(handle) = Handle::try_current() {
            handle.block_on(self.select_plan_async(agent))
        } else {
            match tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
            {
                Ok(runtime) => runtime.block_on(self.select_plan_async(agent)),
                Err(err) => {
                    error!(
                        target: "selector",
                        agent = %agent.id(),
                        "failed to start runtime: {err}, using fallback"
                    );
                    best_scored(agent.plans())
                }
            }
        }
    }

    async fn query_oracle<A: Agent>(&self, agent: &A) -> Result<usize, SelectionError> {
        let query = build_query(agent);
        debug!(target: "selector.query", agent = %agent.id(), "{query}");

        let raw = self.client.complete(SYSTEM_PROMPT, &query).await?;
        let index = parse_plan_index(&raw)?;

        let plan_count = agent.plans().len();
        if index < 0 || index as usize >= plan_count {
            return Err(SelectionError::IndexOutOfRange { index, plan_count });
        }
        Ok(index as usize)
    }
}

impl<A: Agent> PlanSelector<A> for LlmPlanSelector {
    fn select_plan<'a>(&self, agent: &'a A) -> Option<&'a A::Plan> {
        LlmPlanSelector::select_plan(self, agent)
    }
}
