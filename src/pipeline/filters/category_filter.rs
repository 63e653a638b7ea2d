use crate::data_model::ScoredPaper;
use crate::executor::RecordFilter;

/// Keeps papers whose category equals the selected one exactly.
pub struct CategoryFilter {
    category: String,
}

impl CategoryFilter {
    pub fn new(category: impl Into<String>) -> Self {
        CategoryFilter {
            category: category.into(),
        }
    }
}

impl RecordFilter for CategoryFilter {
    fn name(&self) -> &'static str {
        "CategoryFilter"
    }

    fn keep(&self, paper: &ScoredPaper) -> bool {
        paper.record.category == self.category
    }
}
