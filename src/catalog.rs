// src/catalog.rs

use std::path::Path;

use indicatif::ProgressBar;
use itertools::Itertools;
use tracing::{debug, info, instrument};

use crate::data_model::{PaperRecord, QualityScores, QualityThresholds, ScoredPaper};
use crate::error::Result;
use crate::executor::{FilterExecutor, RecordFilter};
use crate::pipeline::filters::{CategoryFilter, QualityThresholdFilter, TitleFilter};
use crate::pipeline::readers::{BaseReader, CsvReader};
use crate::scoring;
use crate::utils::prometheus_metrics::{
    ANSWERS_MISSING_TOTAL, ANSWERS_SCORED_TOTAL, PAPERS_LOADED_TOTAL, QUALITY_SCORE,
    SCORING_DURATION_SECONDS,
};

/// Quality score of one detailed answer. Missing or blank answers score 0
/// without running the scorer.
pub fn score_answer(answer: Option<&str>) -> f64 {
    match answer {
        Some(text) if !text.trim().is_empty() => {
            ANSWERS_SCORED_TOTAL.inc();
            let value = scoring::score(text);
            QUALITY_SCORE.observe(value);
            value
        }
        _ => {
            ANSWERS_MISSING_TOTAL.inc();
            0.0
        }
    }
}

/// Scores the four detailed answers of a record. Concise answers are never
/// scored.
pub fn score_record(record: &PaperRecord) -> QualityScores {
    QualityScores(
        record
            .detailed_answers
            .each_ref()
            .map(|answer| score_answer(answer.as_deref())),
    )
}

/// The Dataset Filter: papers of `category`, and when thresholds are given,
/// only those whose four detailed scores all reach them. Order is preserved
/// and an empty result is a valid answer.
pub fn filter_papers<'a>(
    papers: &'a [ScoredPaper],
    category: &str,
    thresholds: Option<&QualityThresholds>,
) -> Vec<&'a ScoredPaper> {
    let mut steps: Vec<Box<dyn RecordFilter>> = vec![Box::new(CategoryFilter::new(category))];
    if let Some(thresholds) = thresholds {
        steps.push(Box::new(QualityThresholdFilter::new(*thresholds)));
    }
    FilterExecutor::new(steps).run(papers)
}

/// The dataset of one session: records loaded once, scored once, then only
/// read.
#[derive(Debug, Clone, Default)]
pub struct PaperCatalog {
    papers: Vec<ScoredPaper>,
}

impl PaperCatalog {
    pub fn from_records(records: Vec<PaperRecord>) -> Self {
        Self::from_records_with_progress(records, None)
    }

    /// Scores every record eagerly, advancing `progress` once per record.
    pub fn from_records_with_progress(
        records: Vec<PaperRecord>,
        progress: Option<&ProgressBar>,
    ) -> Self {
        let timer = SCORING_DURATION_SECONDS.start_timer();
        let papers: Vec<ScoredPaper> = records
            .into_iter()
            .map(|record| {
                let scores = score_record(&record);
                if let Some(pb) = progress {
                    pb.inc(1);
                }
                ScoredPaper { record, scores }
            })
            .collect();
        timer.observe_duration();
        if let Some(pb) = progress {
            pb.finish_with_message("Scored");
        }

        PAPERS_LOADED_TOTAL.inc_by(papers.len() as f64);
        info!(papers = papers.len(), "Catalog scored");
        PaperCatalog { papers }
    }

    /// Reads every record from `reader` and scores it.
    pub fn load_from<R: BaseReader + ?Sized>(
        reader: &R,
        progress: Option<&ProgressBar>,
    ) -> Result<Self> {
        let records = reader.read_records()?;
        if let Some(pb) = progress {
            pb.set_length(records.len() as u64);
        }
        Ok(Self::from_records_with_progress(records, progress))
    }

    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        Self::load_from(&CsvReader::new(path.as_ref()), None)
    }

    pub fn papers(&self) -> &[ScoredPaper] {
        &self.papers
    }

    pub fn len(&self) -> usize {
        self.papers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.papers.is_empty()
    }

    /// Distinct categories in order of first appearance.
    pub fn categories(&self) -> Vec<&str> {
        self.papers
            .iter()
            .map(|p| p.record.category.as_str())
            .unique()
            .collect()
    }

    /// `preferred` when some paper has that category, else the first category.
    pub fn default_category(&self, preferred: &str) -> Option<&str> {
        let categories = self.categories();
        categories
            .iter()
            .find(|c| **c == preferred)
            .or_else(|| categories.first())
            .copied()
    }

    /// Distinct titles of a category, in dataset order.
    pub fn titles(&self, category: &str) -> Vec<&str> {
        self.filtered_titles(category, None)
    }

    /// Distinct titles of the papers [`PaperCatalog::filter`] keeps.
    pub fn filtered_titles(
        &self,
        category: &str,
        thresholds: Option<&QualityThresholds>,
    ) -> Vec<&str> {
        self.filter(category, thresholds)
            .into_iter()
            .map(|p| p.record.title.as_str())
            .unique()
            .collect()
    }

    /// `preferred` when the category has a paper of that title, else the
    /// category's first title.
    pub fn default_title(&self, category: &str, preferred: &str) -> Option<&str> {
        self.default_filtered_title(category, None, preferred)
    }

    /// Like [`PaperCatalog::default_title`], choosing only among papers that
    /// reach `thresholds`.
    pub fn default_filtered_title(
        &self,
        category: &str,
        thresholds: Option<&QualityThresholds>,
        preferred: &str,
    ) -> Option<&str> {
        let titles = self.filtered_titles(category, thresholds);
        titles
            .iter()
            .find(|t| **t == preferred)
            .or_else(|| titles.first())
            .copied()
    }

    /// First paper with both the given category and title.
    pub fn select(&self, category: &str, title: &str) -> Option<&ScoredPaper> {
        self.select_filtered(category, title, None)
    }

    /// First paper with the given category and title that also reaches
    /// `thresholds`.
    pub fn select_filtered(
        &self,
        category: &str,
        title: &str,
        thresholds: Option<&QualityThresholds>,
    ) -> Option<&ScoredPaper> {
        let mut steps: Vec<Box<dyn RecordFilter>> = vec![
            Box::new(CategoryFilter::new(category)),
            Box::new(TitleFilter::new(title)),
        ];
        if let Some(thresholds) = thresholds {
            steps.push(Box::new(QualityThresholdFilter::new(*thresholds)));
        }
        let executor = FilterExecutor::new(steps);
        let found = self.papers.iter().find(|p| executor.accepts(p));
        debug!(category, title, found = found.is_some(), "Paper selection");
        found
    }

    /// See [`filter_papers`].
    pub fn filter(
        &self,
        category: &str,
        thresholds: Option<&QualityThresholds>,
    ) -> Vec<&ScoredPaper> {
        filter_papers(&self.papers, category, thresholds)
    }
}
