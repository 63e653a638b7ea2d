use crate::data_model::{QualityThresholds, ScoredPaper};
use crate::executor::RecordFilter;

/// Keeps papers whose four detailed-answer scores all reach their thresholds.
///
/// A paper failing a single question is dropped, whichever question the
/// reader is looking at.
pub struct QualityThresholdFilter {
    thresholds: QualityThresholds,
}

impl QualityThresholdFilter {
    pub fn new(thresholds: QualityThresholds) -> Self {
        QualityThresholdFilter { thresholds }
    }
}

impl RecordFilter for QualityThresholdFilter {
    fn name(&self) -> &'static str {
        "QualityThresholdFilter"
    }

    fn keep(&self, paper: &ScoredPaper) -> bool {
        paper.scores.meets(&self.thresholds)
    }
}
