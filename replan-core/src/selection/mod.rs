pub mod error;
pub mod fallback;
pub mod parse;
pub mod query;
pub mod selector;

pub use error::SelectionError;
pub use fallback::best_scored;
pub use parse::parse_plan_index;
pub use query::{build_query, SYSTEM_PROMPT};
pub use selector::{LlmPlanSelector, PlanSelector};
