use crate::population::{Agent, ScoredPlan};

/// Task framing sent as the system message. The response parser depends on
/// the single-integer instruction being enforced here.
pub const SYSTEM_PROMPT: &str = "You are a planning assistant. Given a list of \
candidate plans with their scores, select the best plan by returning only the \
plan number (0-indexed). Return only a single integer, nothing else.";

/// Renders one agent's candidate set as the oracle query: the agent id,
/// one line per plan with its zero-based index and score (two decimals, or
/// a no-score marker), then the instruction naming the valid index range.
pub fn build_query<A: Agent>(agent: &A) -> String {
    let plans = agent.plans();
    let mut query = String::new();
    query.push_str(&format!("Agent ID: {}\n", agent.id()));
    query.push_str("Available plans with their scores:\n");

    for (index, plan) in plans.iter().enumerate() {
        match plan.score() {
            Some(score) => query.push_str(&format!("Plan {index}: Score = {score:.2}")),
            None => query.push_str(&format!("Plan {index}: Score = No score yet")),
        }
        if let Some(detail) = plan.detail() {
            query.push_str(&format!(", {detail}"));
        }
        query.push('\n');
    }

    query.push_str(&format!(
        "\nSelect the best plan by returning only the plan number (0 to {}).",
        plans.len().saturating_sub(1)
    ));
    query
}
