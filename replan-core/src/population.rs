/// A candidate plan carrying an optional quality score.
///
/// `None` means the plan has not been evaluated yet.
pub trait ScoredPlan {
    fn score(&self) -> Option<f64>;

    /// Extra context appended to the plan's line in the oracle query,
    /// e.g. an activity count. Defaults to nothing.
    fn detail(&self) -> Option<String> {
        None
    }
}

/// An agent owning an ordered set of candidate plans.
///
/// The slice order defines the index space used when talking to the
/// oracle, so it must stay stable for the duration of one selection call.
pub trait Agent {
    type Plan: ScoredPlan;

    fn id(&self) -> &str;
    fn plans(&self) -> &[Self::Plan];
}
