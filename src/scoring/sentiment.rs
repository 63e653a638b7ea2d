use once_cell::sync::Lazy;
use regex::Regex;

use crate::scoring::lexicon::{is_negation, lookup};

/// Word tokens (with an optional apostrophe suffix) and exclamation marks.
/// Runs on text whose typographic apostrophes were folded to `'`.
static TOKEN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[a-z]+(?:'[a-z]+)?|!").expect("valid token regex"));

const NEGATION_FACTOR: f64 = -0.5;
const EXCLAMATION_BOOST: f64 = 1.25;

/// Sentiment of a passage.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Sentiment {
    /// In [-1, 1].
    pub polarity: f64,
    /// In [0, 1]; 0 is fully objective.
    pub subjectivity: f64,
}

/// A group of lexicon words read as one opinion, e.g. "not very good".
#[derive(Debug, Clone, Copy)]
struct Assessment {
    polarity: f64,
    subjectivity: f64,
    intensity: f64,
    negated: bool,
}

fn clamp_unit(value: f64, min: f64) -> f64 {
    value.clamp(min, 1.0)
}

/// Lexicon-based polarity and subjectivity.
///
/// Known words produce assessments. A modifier ("very") scales the known word
/// after it, a negation ("not") flips the assessment it precedes, and `!`
/// boosts the polarity of the latest assessment. The result is the mean over
/// all assessments, or zero for text with no known words.
pub fn analyze(text: &str) -> Sentiment {
    let lowered = text.to_lowercase().replace('\u{2019}', "'");
    let mut assessments: Vec<Assessment> = Vec::new();
    let mut modifier_pending = false;
    let mut negation_pending = false;

    for token in TOKEN_RE.find_iter(&lowered).map(|m| m.as_str()) {
        match lookup(token) {
            Some(entry) => {
                match assessments.last_mut() {
                    Some(last) if modifier_pending => {
                        last.polarity = clamp_unit(entry.polarity * last.intensity, -1.0);
                        last.subjectivity = clamp_unit(entry.subjectivity * last.intensity, 0.0);
                        last.intensity = entry.intensity;
                    }
                    _ => assessments.push(Assessment {
                        polarity: entry.polarity,
                        subjectivity: entry.subjectivity,
                        intensity: entry.intensity,
                        negated: false,
                    }),
                }
                if negation_pending {
                    if let Some(last) = assessments.last_mut() {
                        last.negated = true;
                        last.intensity = 1.0 / last.intensity;
                    }
                }
                modifier_pending = entry.is_modifier();
                negation_pending = false;
            }
            None => {
                if is_negation(token) {
                    negation_pending = true;
                } else if negation_pending && token.trim_matches('\'').chars().count() > 1 {
                    // "not a good" keeps the negation across one-letter words
                    negation_pending = false;
                }

                if negation_pending && modifier_pending {
                    // "really not good" negates the modifier's assessment
                    if let Some(last) = assessments.last_mut() {
                        last.negated = true;
                    }
                    negation_pending = false;
                } else if modifier_pending && token.chars().count() > 2 {
                    modifier_pending = false;
                }

                if token == "!" {
                    if let Some(last) = assessments.last_mut() {
                        last.polarity = clamp_unit(last.polarity * EXCLAMATION_BOOST, -1.0);
                    }
                }
            }
        }
    }

    if assessments.is_empty() {
        return Sentiment::default();
    }

    let n = assessments.len() as f64;
    let polarity = assessments
        .iter()
        .map(|a| {
            if a.negated {
                a.polarity * NEGATION_FACTOR
            } else {
                a.polarity
            }
        })
        .sum::<f64>()
        / n;
    let subjectivity = assessments.iter().map(|a| a.subjectivity).sum::<f64>() / n;

    Sentiment {
        polarity,
        subjectivity,
    }
}
