use crate::population::ScoredPlan;

/// Deterministic local selection used whenever the oracle path fails.
///
/// Scans once, replacing the running best only when a later plan is
/// strictly better, so the first occurrence of the maximum wins. A scored
/// plan always beats an unscored one; an all-unscored set yields the first
/// plan. Returns `None` only for an empty slice, which the selector never
/// passes.
pub fn best_scored<P: ScoredPlan>(plans: &[P]) -> Option<&P> {
    let mut best: Option<&P> = None;
    for plan in plans {
        match best {
            None => best = Some(plan),
            Some(current) if beats(plan.score(), current.score()) => best = Some(plan),
            Some(_) => {}
        }
    }
    best
}

fn beats(challenger: Option<f64>, incumbent: Option<f64>) -> bool {
    match (challenger, incumbent) {
        (Some(new), Some(old)) => new > old,
        (Some(_), None) => true,
        (None, _) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TestPlan {
        score: Option<f64>,
    }

    impl ScoredPlan for TestPlan {
        fn score(&self) -> Option<f64> {
            self.score
        }
    }

    fn plans(scores: &[Option<f64>]) -> Vec<TestPlan> {
        scores.iter().map(|score| TestPlan { score: *score }).collect()
    }

    fn index_of(plans: &[TestPlan], chosen: &TestPlan) -> usize {
        plans
            .iter()
            .position(|plan| std::ptr::eq(plan, chosen))
            .expect("chosen plan should come from the input slice")
    }

    #[test]
    fn highest_score_wins() {
        let set = plans(&[Some(1.0), Some(7.5), Some(3.2)]);
        let chosen = best_scored(&set).unwrap();
        assert_eq!(index_of(&set, chosen), 1);
    }

    #[test]
    fn scored_beats_unscored() {
        let set = plans(&[None, Some(-10.0), None]);
        let chosen = best_scored(&set).unwrap();
        assert_eq!(index_of(&set, chosen), 1);
    }

    #[test]
    fn first_of_tied_maxima_wins() {
        let set = plans(&[None, Some(5.2), Some(5.2), None]);
        let chosen = best_scored(&set).unwrap();
        assert_eq!(index_of(&set, chosen), 1);
    }

    #[test]
    fn all_unscored_returns_first() {
        let set = plans(&[None, None, None]);
        let chosen = best_scored(&set).unwrap();
        assert_eq!(index_of(&set, chosen), 0);
    }

    #[test]
    fn empty_set_returns_none() {
        let set = plans(&[]);
        assert!(best_scored(&set).is_none());
    }

    #[test]
    fn repeated_calls_agree() {
        let set = plans(&[Some(2.0), None, Some(2.0)]);
        let first = best_scored(&set).unwrap();
        let second = best_scored(&set).unwrap();
        assert!(std::ptr::eq(first, second));
    }
}
