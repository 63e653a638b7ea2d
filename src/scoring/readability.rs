use crate::utils::text::{split_into_sentences, split_into_words};

const FRE_BASE: f64 = 206.835;
const FRE_SENTENCE_WEIGHT: f64 = 1.015;
const FRE_SYLLABLE_WEIGHT: f64 = 84.6;

/// Counts syllables as groups of consecutive vowels (`y` included), dropping a
/// silent trailing `e` unless the word ends in `-le`. Every word containing a
/// letter has at least one syllable.
pub fn count_syllables(word: &str) -> usize {
    let letters: Vec<char> = word
        .chars()
        .filter(|c| c.is_alphabetic())
        .flat_map(char::to_lowercase)
        .collect();
    if letters.is_empty() {
        return 0;
    }

    let is_vowel = |c: char| matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'y');
    let mut count = 0;
    let mut prev_vowel = false;
    for &c in &letters {
        let vowel = is_vowel(c);
        if vowel && !prev_vowel {
            count += 1;
        }
        prev_vowel = vowel;
    }

    let n = letters.len();
    let silent_e = letters[n - 1] == 'e' && !(n >= 2 && letters[n - 2] == 'l');
    if silent_e && count > 1 {
        count -= 1;
    }
    count.max(1)
}

/// Raw Flesch Reading Ease, rounded to two decimals. Not clamped: very short
/// or polysyllabic text can fall below 0 and trivial text can exceed 100.
///
/// Text without words scores the formula's base value.
pub fn flesch_reading_ease(text: &str) -> f64 {
    let words = split_into_words(text);
    let sentence_count = split_into_sentences(text).len().max(1);

    let (words_per_sentence, syllables_per_word) = if words.is_empty() {
        (0.0, 0.0)
    } else {
        let syllables: usize = words.iter().map(|w| count_syllables(w)).sum();
        (
            words.len() as f64 / sentence_count as f64,
            syllables as f64 / words.len() as f64,
        )
    };

    let raw = FRE_BASE
        - FRE_SENTENCE_WEIGHT * words_per_sentence
        - FRE_SYLLABLE_WEIGHT * syllables_per_word;
    (raw * 100.0).round() / 100.0
}

/// Reading ease clamped into [0, 100].
pub fn readability_component(text: &str) -> f64 {
    flesch_reading_ease(text).clamp(0.0, 100.0)
}
