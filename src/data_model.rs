use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{LensError, Result};

/// Shown for metadata fields (authors, abstract, ...) that are absent or blank.
pub const NOT_AVAILABLE: &str = "Not available";
/// Shown for answer fields that are absent or blank.
pub const DATA_UNAVAILABLE: &str = "Data unavailable";

pub const CONCISE_QUESTIONS: [&str; 4] = [
    "What is the main research problem addressed in the paper?",
    "What methodology was used in the paper?",
    "What are the key findings or contributions?",
    "What are the limitations or challenges discussed?",
];

pub const DETAILED_QUESTIONS: [&str; 4] = [
    "Explain the main research problem addressed in this paper in detail.",
    "Describe in detail the methodology used in this study.",
    "Summarize the key findings and contributions in depth.",
    "What are the limitations or challenges discussed, and why are they significant?",
];

/// Which of the two answer sets a question belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnswerKind {
    Concise,
    Detailed,
}

impl fmt::Display for AnswerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnswerKind::Concise => write!(f, "Concise Answer"),
            AnswerKind::Detailed => write!(f, "Detailed Answer"),
        }
    }
}

/// The four subjects every paper is questioned about. Each topic has one
/// concise and one detailed question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Topic {
    ResearchProblem,
    Methodology,
    KeyFindings,
    Limitations,
}

impl Topic {
    pub const ALL: [Topic; 4] = [
        Topic::ResearchProblem,
        Topic::Methodology,
        Topic::KeyFindings,
        Topic::Limitations,
    ];

    pub fn index(self) -> usize {
        match self {
            Topic::ResearchProblem => 0,
            Topic::Methodology => 1,
            Topic::KeyFindings => 2,
            Topic::Limitations => 3,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Topic::ResearchProblem => "Research problem",
            Topic::Methodology => "Methodology",
            Topic::KeyFindings => "Key findings",
            Topic::Limitations => "Limitations",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Topic::ResearchProblem => "🔍",
            Topic::Methodology => "🧪",
            Topic::KeyFindings => "💡",
            Topic::Limitations => "⚠️",
        }
    }
}

/// One of the eight fixed questions. The question text doubles as the
/// dataset column name holding the answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Question {
    pub kind: AnswerKind,
    pub topic: Topic,
}

impl Question {
    pub const fn new(kind: AnswerKind, topic: Topic) -> Self {
        Question { kind, topic }
    }

    pub const fn detailed(topic: Topic) -> Self {
        Question::new(AnswerKind::Detailed, topic)
    }

    pub const fn concise(topic: Topic) -> Self {
        Question::new(AnswerKind::Concise, topic)
    }

    /// Verbatim question text.
    pub fn text(&self) -> &'static str {
        match self.kind {
            AnswerKind::Concise => CONCISE_QUESTIONS[self.topic.index()],
            AnswerKind::Detailed => DETAILED_QUESTIONS[self.topic.index()],
        }
    }

    pub fn label(&self) -> String {
        format!("{} {}", self.topic.icon(), self.topic.label())
    }

    /// The four questions of one answer kind, in display order.
    pub fn of_kind(kind: AnswerKind) -> [Question; 4] {
        Topic::ALL.map(|topic| Question::new(kind, topic))
    }

    /// All eight questions, concise first.
    pub fn all() -> Vec<Question> {
        Question::of_kind(AnswerKind::Concise)
            .into_iter()
            .chain(Question::of_kind(AnswerKind::Detailed))
            .collect()
    }

    /// Looks a question up by its exact text.
    pub fn from_text(text: &str) -> Result<Question> {
        Question::all()
            .into_iter()
            .find(|q| q.text() == text)
            .ok_or_else(|| LensError::UnknownQuestion(text.to_string()))
    }
}

impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

/// One row of the dataset. Every field besides the two selection keys may be
/// missing; blank cells are stored as `None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PaperRecord {
    pub title: String,
    pub category: String,
    pub authors: Option<String>,
    pub publication_date: Option<String>,
    #[serde(rename = "abstract")]
    pub abstract_text: Option<String>,
    pub generated_summary: Option<String>,
    pub full_text: Option<String>,
    pub concise_answers: [Option<String>; 4],
    pub detailed_answers: [Option<String>; 4],
}

impl PaperRecord {
    pub fn answer(&self, question: Question) -> Option<&str> {
        let answers = match question.kind {
            AnswerKind::Concise => &self.concise_answers,
            AnswerKind::Detailed => &self.detailed_answers,
        };
        answers[question.topic.index()].as_deref()
    }

    /// Answer text for display, falling back to [`DATA_UNAVAILABLE`].
    pub fn answer_or_unavailable(&self, question: Question) -> &str {
        match self.answer(question) {
            Some(text) if !text.trim().is_empty() => text,
            _ => DATA_UNAVAILABLE,
        }
    }
}

/// Metadata value for display, falling back to [`NOT_AVAILABLE`].
pub fn or_not_available(value: Option<&str>) -> &str {
    match value {
        Some(text) if !text.trim().is_empty() => text,
        _ => NOT_AVAILABLE,
    }
}

/// Quality scores of the four detailed answers, indexed by [`Topic`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct QualityScores(pub [f64; 4]);

impl QualityScores {
    pub fn get(&self, topic: Topic) -> f64 {
        self.0[topic.index()]
    }

    /// True when every topic's score reaches that topic's threshold.
    pub fn meets(&self, thresholds: &QualityThresholds) -> bool {
        Topic::ALL
            .iter()
            .all(|&topic| self.get(topic) >= thresholds.get(topic).as_f64())
    }
}

/// A record paired with the scores derived from it at load time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredPaper {
    pub record: PaperRecord,
    pub scores: QualityScores,
}

/// A minimum quality score, an integer in `0..=100`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct QualityThreshold(u8);

impl QualityThreshold {
    pub const MAX: u8 = 100;

    pub fn new(value: i64) -> Result<Self> {
        if (0..=i64::from(Self::MAX)).contains(&value) {
            Ok(QualityThreshold(value as u8))
        } else {
            Err(LensError::InvalidThreshold(value))
        }
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn as_f64(self) -> f64 {
        f64::from(self.0)
    }
}

impl TryFrom<i64> for QualityThreshold {
    type Error = LensError;

    fn try_from(value: i64) -> Result<Self> {
        QualityThreshold::new(value)
    }
}

impl From<QualityThreshold> for u8 {
    fn from(threshold: QualityThreshold) -> u8 {
        threshold.0
    }
}

impl fmt::Display for QualityThreshold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Minimum quality per detailed question.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QualityThresholds([QualityThreshold; 4]);

impl QualityThresholds {
    /// The same threshold for all four detailed questions.
    pub fn uniform(threshold: QualityThreshold) -> Self {
        QualityThresholds([threshold; 4])
    }

    pub fn per_question(thresholds: [QualityThreshold; 4]) -> Self {
        QualityThresholds(thresholds)
    }

    pub fn get(&self, topic: Topic) -> QualityThreshold {
        self.0[topic.index()]
    }
}
