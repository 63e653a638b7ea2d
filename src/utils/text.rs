// Text segmentation helpers shared by the readability and sentiment scorers.

use icu::segmenter::{SentenceSegmenter, WordSegmenter};
use itertools::Itertools;
use once_cell::sync::Lazy;
use std::collections::HashSet;

/// Literal punctuation characters, ASCII plus the typographic marks common in
/// extracted paper text.
const PUNCTUATION_LIT: &str =
    "!/—”:％&(、，；+^]~“„';’{|∶´[=-`*．（–？！：$～«,><)?）。…@_.\"}»#%\\";

/// Control-character code point ranges treated as punctuation (end exclusive).
const PUNCTUATION_RANGES: &[(u32, u32)] = &[(0, 9), (11, 32), (127, 160)];

/// Lazily built set of every punctuation char.
pub static PUNCTUATION: Lazy<HashSet<char>> = Lazy::new(|| {
    let mut set: HashSet<char> = PUNCTUATION_LIT.chars().collect();
    for &(start, end) in PUNCTUATION_RANGES {
        set.extend((start..end).filter_map(char::from_u32));
    }
    set
});

/// True if the segment holds at least one char that is neither punctuation
/// nor whitespace.
fn is_word_like(segment: &str) -> bool {
    segment
        .chars()
        .any(|c| !PUNCTUATION.contains(&c) && !c.is_whitespace())
}

/// Splits text into trimmed, non-empty sentences using UAX #29 sentence breaks.
pub fn split_into_sentences(text: &str) -> Vec<&str> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }

    let segmenter = SentenceSegmenter::new();
    let sentences: Vec<&str> = segmenter
        .segment_str(trimmed)
        .tuple_windows()
        .map(|(start, end)| trimmed[start..end].trim())
        .filter(|s| !s.is_empty())
        .collect();

    if sentences.is_empty() {
        vec![trimmed]
    } else {
        sentences
    }
}

/// Splits text into words using UAX #29 word breaks, dropping segments made of
/// punctuation or whitespace only.
pub fn split_into_words(text: &str) -> Vec<&str> {
    if text.is_empty() {
        return Vec::new();
    }
    let segmenter = WordSegmenter::new_auto();
    segmenter
        .segment_str(text)
        .tuple_windows()
        .map(|(start, end)| text[start..end].trim())
        .filter(|segment| !segment.is_empty() && is_word_like(segment))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_sentences_empty_and_simple() {
        assert_eq!(split_into_sentences(""), Vec::<&str>::new());
        assert_eq!(split_into_sentences("   "), Vec::<&str>::new());
        assert_eq!(split_into_sentences("Hello world."), vec!["Hello world."]);
        assert_eq!(split_into_sentences("  Hello world.  "), vec!["Hello world."]);
        assert_eq!(split_into_sentences("SingleWord"), vec!["SingleWord"]);
    }

    #[test]
    fn test_split_sentences_multiple() {
        let text = "  We train the model.   Then we test it!  Does it work?  ";
        assert_eq!(
            split_into_sentences(text),
            vec!["We train the model.", "Then we test it!", "Does it work?"]
        );
        assert_eq!(
            split_into_sentences("This is a sentence. This is another"),
            vec!["This is a sentence.", "This is another"]
        );
    }

    #[test]
    fn test_split_words() {
        assert_eq!(split_into_words(""), Vec::<&str>::new());
        assert_eq!(split_into_words("hello"), vec!["hello"]);
        assert_eq!(split_into_words("hello, world!"), vec!["hello", "world"]);
        assert_eq!(
            split_into_words("first. second; third?"),
            vec!["first", "second", "third"]
        );
        assert_eq!(split_into_words("... --- !!!"), Vec::<&str>::new());
    }

    #[test]
    fn test_punctuation_set_contents() {
        assert!(PUNCTUATION.contains(&'.'));
        assert!(PUNCTUATION.contains(&'!'));
        assert!(PUNCTUATION.contains(&'"'));
        assert!(PUNCTUATION.contains(&'\u{0000}'));
        assert!(PUNCTUATION.contains(&'\u{001F}'));
        assert!(!PUNCTUATION.contains(&'a'));
        assert!(!PUNCTUATION.contains(&'5'));
        assert!(!PUNCTUATION.contains(&' '));
    }
}
