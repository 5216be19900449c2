use super::error::SelectionError;

/// Interprets the oracle's reply as a bare base-10 integer.
///
/// Surrounding whitespace is tolerated; anything else (prose, several
/// numbers, an empty reply) is rejected. Range checking against the
/// candidate set happens in the selector, which knows the set size.
pub fn parse_plan_index(raw: &str) -> Result<i64, SelectionError> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| SelectionError::NonNumeric {
            content: raw.to_string(),
        })
}
