// Readability scoring of monologue text.
//
// score = 0.39 * (words / sentences) + 11.8 * round(syllables / words, 1) - 15.59
//
// Sentences and words are UAX #29 segments. Punctuation marks count as word
// tokens, matching Treebank-style tokenization. Newlines are removed (not
// replaced) before counting.

use unicode_segmentation::UnicodeSegmentation;

use crate::monologue::ComplexityCategory;

/// Counts feeding the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextStats {
    pub sentences: usize,
    pub words: usize,
    pub syllables: usize,
}

/// A computed score and its band.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Readability {
    pub stats: TextStats,
    pub score: f64,
    pub category: Option<ComplexityCategory>,
}

/// Number of sentences holding at least one alphanumeric character.
///
/// A stop followed by closing quotes still ends its sentence (`villain.’ And`);
/// a stop followed by a lowercase word does not (`me. and`).
pub fn sentence_count(text: &str) -> usize {
    text.unicode_sentences().count()
}

/// Word tokens, including standalone punctuation marks.
pub fn word_tokens(text: &str) -> Vec<&str> {
    text.split_word_bounds()
        .filter(|t| !t.trim().is_empty())
        .collect()
}

/// Syllables in a single word: vowel groups, minus a silent final `e`.
pub fn word_syllables(word: &str) -> usize {
    let letters: Vec<char> = word
        .chars()
        .filter(|c| c.is_ascii_alphabetic())
        .map(|c| c.to_ascii_lowercase())
        .collect();
    if letters.is_empty() {
        return 0;
    }

    let is_vowel = |c: char| matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'y');
    let mut groups = 0;
    let mut prev_vowel = false;
    for &c in &letters {
        let v = is_vowel(c);
        if v && !prev_vowel {
            groups += 1;
        }
        prev_vowel = v;
    }

    let n = letters.len();
    if groups > 1 && letters[n - 1] == 'e' {
        // "-le" after a consonant keeps its syllable (ta-ble)
        let consonant_le = n >= 3 && letters[n - 2] == 'l' && !is_vowel(letters[n - 3]);
        let double_vowel = is_vowel(letters[n - 2]);
        if !consonant_le && !double_vowel {
            groups -= 1;
        }
    }

    groups.max(1)
}

/// Total syllables over the alphabetic words of a text.
pub fn syllable_count(text: &str) -> usize {
    word_tokens(text)
        .into_iter()
        .filter(|t| t.chars().any(|c| c.is_alphabetic()))
        .map(word_syllables)
        .sum()
}

/// Collect the counts for a text after stripping newlines.
pub fn text_stats(text: &str) -> TextStats {
    let text = text.replace('\n', "");
    TextStats {
        sentences: sentence_count(&text),
        words: word_tokens(&text).len(),
        syllables: syllable_count(&text),
    }
}

/// Round half away from zero to `places` decimals.
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

/// Score counts. `None` when there are no words or no sentences.
pub fn score_stats(stats: TextStats) -> Option<f64> {
    if stats.words == 0 || stats.sentences == 0 {
        return None;
    }
    let avg_sentence_len = stats.words as f64 / stats.sentences as f64;
    let avg_syllables = round_to(stats.syllables as f64 / stats.words as f64, 1);
    let score = 0.39 * avg_sentence_len + 11.8 * avg_syllables - 15.59;
    Some(round_to(score, 2))
}

/// Score a text and band it.
pub fn assess(text: &str) -> Option<Readability> {
    let stats = text_stats(text);
    let score = score_stats(stats)?;
    Some(Readability {
        stats,
        score,
        category: ComplexityCategory::from_score(score),
    })
}
