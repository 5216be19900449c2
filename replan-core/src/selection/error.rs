use thiserror::Error;

use crate::llm::LlmError;

#[derive(Debug, Error)]
pub enum SelectionError {
    #[error("llm request failed: {0}")]
    Llm(#[from] LlmError),
    #[error("llm returned a non-numeric response: {content:?}")]
    NonNumeric { content: String },
    #[error("llm returned plan index {index}, outside the range 0..{plan_count}")]
    IndexOutOfRange { index: i64, plan_count: usize },
}
