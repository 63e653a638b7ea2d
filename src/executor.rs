use crate::data_model::ScoredPaper;
use tracing::{debug, warn};

/// One named condition a paper must satisfy to be selected.
pub trait RecordFilter: Send + Sync {
    fn name(&self) -> &'static str; // For logging

    fn keep(&self, paper: &ScoredPaper) -> bool;
}

/// Runs an ordered list of filters as a conjunction: a paper is selected only
/// if every step keeps it. Selection is stable.
pub struct FilterExecutor {
    pub(crate) steps: Vec<Box<dyn RecordFilter>>,
}

impl FilterExecutor {
    pub fn new(steps: Vec<Box<dyn RecordFilter>>) -> Self {
        if steps.is_empty() {
            warn!("Filter executor created with no steps; every paper will be selected.");
        }
        FilterExecutor { steps }
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn step_names(&self) -> Vec<&'static str> {
        self.steps.iter().map(|s| s.name()).collect()
    }

    /// True if every step keeps the paper. Stops at the first rejecting step.
    pub fn accepts(&self, paper: &ScoredPaper) -> bool {
        for step in &self.steps {
            if !step.keep(paper) {
                debug!(title = %paper.record.title, step = step.name(), "Paper rejected");
                return false;
            }
        }
        true
    }

    /// Returns the accepted papers in their original order.
    pub fn run<'a>(&self, papers: &'a [ScoredPaper]) -> Vec<&'a ScoredPaper> {
        let selected: Vec<&ScoredPaper> = papers.iter().filter(|p| self.accepts(p)).collect();
        debug!(
            steps = ?self.step_names(),
            total = papers.len(),
            selected = selected.len(),
            "Filter run complete"
        );
        selected
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_model::{PaperRecord, QualityScores};

    struct NameStartsWith(&'static str);

    impl RecordFilter for NameStartsWith {
        fn name(&self) -> &'static str {
            "NameStartsWith"
        }

        fn keep(&self, paper: &ScoredPaper) -> bool {
            paper.record.title.starts_with(self.0)
        }
    }

    fn paper(title: &str) -> ScoredPaper {
        ScoredPaper {
            record: PaperRecord {
                title: title.to_string(),
                category: "cat".to_string(),
                ..Default::default()
            },
            scores: QualityScores::default(),
        }
    }

    #[test]
    fn test_empty_executor_selects_everything() {
        let executor = FilterExecutor::new(vec![]);
        assert!(executor.is_empty());
        let papers = vec![paper("a"), paper("b")];
        assert_eq!(executor.run(&papers).len(), 2);
    }

    #[test]
    fn test_steps_are_a_conjunction() {
        let executor = FilterExecutor::new(vec![
            Box::new(NameStartsWith("al")),
            Box::new(NameStartsWith("alp")),
        ]);
        assert_eq!(executor.len(), 2);
        let papers = vec![paper("alpha"), paper("almond"), paper("alpine"), paper("beta")];
        let titles: Vec<&str> = executor
            .run(&papers)
            .iter()
            .map(|p| p.record.title.as_str())
            .collect();
        assert_eq!(titles, vec!["alpha", "alpine"]);
    }
}
