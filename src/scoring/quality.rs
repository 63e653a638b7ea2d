use serde::Serialize;

use crate::scoring::readability::readability_component;
use crate::scoring::sentiment::analyze;

/// The three components of a quality score and their combination.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct QualityBreakdown {
    /// Polarity × 100, roughly [-100, 100] and never clamped.
    pub polarity: f64,
    /// (1 − subjectivity) × 100.
    pub objectivity: f64,
    /// Flesch Reading Ease clamped into [0, 100].
    pub readability: f64,
    /// Mean of the three components, rounded to two decimals.
    pub score: f64,
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Scores a detailed answer.
///
/// Only the readability component is clamped, so strongly negative text can
/// push the combined score below 0.
pub fn score_breakdown(text: &str) -> QualityBreakdown {
    let sentiment = analyze(text);
    let polarity = sentiment.polarity * 100.0;
    let objectivity = (1.0 - sentiment.subjectivity) * 100.0;
    let readability = readability_component(text);

    QualityBreakdown {
        polarity,
        objectivity,
        readability,
        score: round2((polarity + objectivity + readability) / 3.0),
    }
}

/// Quality score of `text`; see [`score_breakdown`].
pub fn score(text: &str) -> f64 {
    score_breakdown(text).score
}

#[cfg(test)]
mod tests {
    use super::*;

    const NEUTRAL: &str = "We train the model on a set of text. Then we test it on held out \
                           text. The model finds the topic of each text.";

    #[test]
    fn test_empty_text_has_defined_score() {
        let b = score_breakdown("");
        assert_eq!(b.polarity, 0.0);
        assert_eq!(b.objectivity, 100.0);
        assert_eq!(b.readability, 100.0);
        assert_eq!(b.score, 66.67);
    }

    #[test]
    fn test_neutral_readable_text_scores_high() {
        let b = score_breakdown(NEUTRAL);
        assert_eq!(b.polarity, 0.0);
        assert_eq!(b.objectivity, 100.0);
        assert_eq!(b.readability, 100.0);
        assert_eq!(b.score, 66.67);
    }

    #[test]
    fn test_negative_text_falls_below_zero() {
        let b = score_breakdown("Terrible, awful work!");
        assert_eq!(b.polarity, -100.0);
        assert_eq!(b.objectivity, 0.0);
        assert!((b.readability - 34.59).abs() < 1e-9);
        // Polarity is not clamped, so the mean leaves [0, 100].
        assert_eq!(b.score, -21.8);
        assert!(b.score < 0.0);
    }

    #[test]
    fn test_score_is_deterministic() {
        for text in ["", NEUTRAL, "A very good paper!", "It is not a good result."] {
            assert_eq!(score(text), score(text));
            assert!(score(text).is_finite());
        }
    }

    #[test]
    fn test_readability_component_stays_in_range() {
        for text in ["", "Go.", NEUTRAL, "Incomprehensibilities notwithstanding."] {
            let b = score_breakdown(text);
            assert!((0.0..=100.0).contains(&b.readability));
        }
    }
}
