// English sentiment lexicon: (word, polarity, subjectivity, intensity).
//
// Polarity is in [-1, 1], subjectivity in [0, 1]. An intensity other than 1.0
// marks the word as a modifier that scales the word following it.

use once_cell::sync::Lazy;
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LexiconEntry {
    pub polarity: f64,
    pub subjectivity: f64,
    pub intensity: f64,
}

impl LexiconEntry {
    pub fn is_modifier(&self) -> bool {
        (self.intensity - 1.0).abs() > f64::EPSILON
    }
}

/// Words that flip the polarity of the next assessment.
pub const NEGATIONS: &[&str] = &["not", "never", "no", "n't", "cannot", "without"];

#[rustfmt::skip]
const ENTRIES: &[(&str, f64, f64, f64)] = &[
    // modifiers
    ("very", 0.2, 0.3, 1.3),
    ("really", 0.2, 0.2, 1.3),
    ("extremely", 0.0, 0.5, 1.5),
    ("highly", 0.16, 0.54, 1.3),
    ("incredibly", 0.9, 0.9, 1.5),
    ("truly", 0.0, 0.0, 1.2),
    ("quite", 0.0, 1.0, 1.1),
    ("too", 0.0, 0.5, 1.1),
    ("so", 0.0, 0.0, 1.2),
    ("most", 0.5, 0.5, 1.2),
    ("more", 0.5, 0.5, 1.1),
    ("less", -0.167, 0.067, 0.8),
    ("slightly", -0.167, 0.167, 0.6),
    ("somewhat", 0.0, 0.0, 0.8),
    ("rather", 0.0, 0.0, 0.9),
    ("fairly", 0.7, 0.9, 0.9),
    // positive
    ("good", 0.7, 0.6, 1.0),
    ("great", 0.8, 0.75, 1.0),
    ("excellent", 1.0, 1.0, 1.0),
    ("best", 1.0, 0.3, 1.0),
    ("better", 0.5, 0.5, 1.0),
    ("nice", 0.6, 1.0, 1.0),
    ("wonderful", 1.0, 1.0, 1.0),
    ("amazing", 0.6, 0.9, 1.0),
    ("awesome", 1.0, 1.0, 1.0),
    ("fantastic", 0.4, 0.9, 1.0),
    ("brilliant", 0.9, 1.0, 1.0),
    ("perfect", 1.0, 1.0, 1.0),
    ("impressive", 1.0, 1.0, 1.0),
    ("outstanding", 0.5, 0.75, 1.0),
    ("remarkable", 0.75, 0.75, 1.0),
    ("superior", 0.7, 0.9, 1.0),
    ("beautiful", 0.85, 1.0, 1.0),
    ("elegant", 0.5, 1.0, 1.0),
    ("happy", 0.8, 1.0, 1.0),
    ("love", 0.5, 0.6, 1.0),
    ("like", 0.0, 0.0, 1.0),
    ("interesting", 0.5, 0.5, 1.0),
    ("exciting", 0.3, 0.8, 1.0),
    ("promising", 0.5, 0.5, 1.0),
    ("successful", 0.75, 0.95, 1.0),
    ("effective", 0.6, 0.8, 1.0),
    ("useful", 0.3, 0.0, 1.0),
    ("valuable", 0.6, 0.7, 1.0),
    ("important", 0.4, 1.0, 1.0),
    ("significant", 0.375, 0.875, 1.0),
    ("strong", 0.433, 0.733, 1.0),
    ("easy", 0.433, 0.833, 1.0),
    ("clear", 0.1, 0.383, 1.0),
    ("right", 0.286, 0.536, 1.0),
    ("correct", 0.0, 0.0, 1.0),
    ("accurate", 0.4, 0.567, 1.0),
    ("powerful", 0.3, 1.0, 1.0),
    ("positive", 0.227, 0.545, 1.0),
    ("innovative", 0.5, 0.5, 1.0),
    ("favorable", 0.6, 0.8, 1.0),
    ("fun", 0.3, 0.2, 1.0),
    ("glad", 0.5, 1.0, 1.0),
    ("pleasant", 0.733, 0.967, 1.0),
    ("superb", 1.0, 1.0, 1.0),
    ("clever", 0.5, 0.5, 1.0),
    // negative
    ("bad", -0.7, 0.667, 1.0),
    ("worse", -0.4, 0.6, 1.0),
    ("worst", -1.0, 1.0, 1.0),
    ("terrible", -1.0, 1.0, 1.0),
    ("awful", -1.0, 1.0, 1.0),
    ("horrible", -1.0, 1.0, 1.0),
    ("dreadful", -1.0, 1.0, 1.0),
    ("poor", -0.4, 0.6, 1.0),
    ("ugly", -0.7, 1.0, 1.0),
    ("hate", -0.8, 0.9, 1.0),
    ("sad", -0.5, 1.0, 1.0),
    ("boring", -1.0, 1.0, 1.0),
    ("stupid", -0.8, 1.0, 1.0),
    ("useless", -0.5, 0.0, 1.0),
    ("wrong", -0.5, 0.9, 1.0),
    ("weak", -0.375, 0.625, 1.0),
    ("difficult", -0.5, 1.0, 1.0),
    ("hard", -0.292, 0.542, 1.0),
    ("disappointing", -0.6, 0.7, 1.0),
    ("unfortunate", -0.5, 1.0, 1.0),
    ("unfortunately", -0.5, 1.0, 1.0),
    ("negative", -0.3, 0.4, 1.0),
    ("flawed", -0.5, 0.6, 1.0),
    ("inadequate", -0.5, 0.5, 1.0),
    ("insufficient", -0.5, 0.5, 1.0),
    ("problematic", -0.5, 0.5, 1.0),
    ("confusing", -0.3, 0.7, 1.0),
    ("annoying", -0.8, 0.9, 1.0),
    ("ridiculous", -0.333, 1.0, 1.0),
    ("pathetic", -1.0, 1.0, 1.0),
    ("mediocre", -0.5, 0.8, 1.0),
    ("painful", -0.7, 0.9, 1.0),
    ("slow", -0.3, 0.39, 1.0),
    ("expensive", -0.5, 0.7, 1.0),
    // subjective, mostly neutral
    ("obviously", 0.0, 0.5, 1.0),
    ("clearly", 0.1, 0.383, 1.0),
    ("surprising", 0.0, 1.0, 1.0),
    ("strange", 0.0, 0.15, 1.0),
    ("honestly", 0.6, 0.9, 1.0),
    ("believe", 0.0, 0.5, 1.0),
    ("feel", 0.0, 0.5, 1.0),
    ("opinion", 0.0, 0.5, 1.0),
    ("certainly", 0.214, 0.571, 1.0),
    ("probably", 0.0, 0.5, 1.0),
    ("perhaps", 0.0, 0.5, 1.0),
    ("huge", 0.4, 0.9, 1.0),
    ("tiny", 0.0, 1.0, 1.0),
    ("large", 0.214, 0.429, 1.0),
    ("small", -0.25, 0.4, 1.0),
    ("high", 0.16, 0.54, 1.0),
    ("main", 0.167, 0.333, 1.0),
    ("new", 0.136, 0.455, 1.0),
    ("different", 0.0, 0.6, 1.0),
    ("limited", -0.071, 0.143, 1.0),
    ("simple", 0.0, 0.357, 1.0),
    ("complex", -0.3, 0.4, 1.0),
];

/// Lookup table built from [`ENTRIES`] on first use.
pub static LEXICON: Lazy<HashMap<&'static str, LexiconEntry>> = Lazy::new(|| {
    ENTRIES
        .iter()
        .map(|&(word, polarity, subjectivity, intensity)| {
            (
                word,
                LexiconEntry {
                    polarity,
                    subjectivity,
                    intensity,
                },
            )
        })
        .collect()
});

pub fn lookup(word: &str) -> Option<LexiconEntry> {
    LEXICON.get(word).copied()
}

/// Negation words and `n't` contractions, with either apostrophe.
pub fn is_negation(word: &str) -> bool {
    NEGATIONS.contains(&word) || word.ends_with("n't") || word.ends_with("n\u{2019}t")
}
