use crate::data_model::ScoredPaper;
use crate::executor::RecordFilter;

/// Keeps papers with exactly the selected title.
pub struct TitleFilter {
    title: String,
}

impl TitleFilter {
    pub fn new(title: impl Into<String>) -> Self {
        TitleFilter {
            title: title.into(),
        }
    }
}

impl RecordFilter for TitleFilter {
    fn name(&self) -> &'static str {
        "TitleFilter"
    }

    fn keep(&self, paper: &ScoredPaper) -> bool {
        paper.record.title == self.title
    }
}
