pub mod config;
pub mod error;
pub mod llm;
pub mod population;
pub mod selection;

pub use config::{load_selector_config, SelectorConfig, API_KEY_ENV};
pub use error::{ConfigError, Result};
pub use llm::{HttpLlmClient, LlmClient, LlmError};
pub use population::{Agent, ScoredPlan};
pub use selection::{
    best_scored, build_query, parse_plan_index, LlmPlanSelector, PlanSelector, SelectionError,
    SYSTEM_PROMPT,
};
