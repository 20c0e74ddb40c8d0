use unicode_normalization::UnicodeNormalization;

/// Rewrites applied after article stripping, in order.
const TITLE_REWRITES: [(&str, &str); 6] = [
    ("\u{2019}", "'"),
    ("Labor", "Labour"),
    ("Part 1", "Part I"),
    ("Part 2", "Part II"),
    ("Part 3", "Part III"),
    ("About", "about"),
];

/// Normalize a corpus play title so it matches the genre table's spelling.
///
/// Drops a leading "A " and then a leading "The ", converts the typographic
/// apostrophe, and rewrites the spellings that differ between the two sources
/// ("Labor" vs "Labour", arabic vs roman part numbers, "About" casing).
///
/// Each article is stripped at most once, so the result is a fixed point only
/// for titles with a single leading article. A stacked "The A ..." keeps its
/// "A " after one pass and loses it on the next.
pub fn normalize_title(title: &str) -> String {
    let nfc: String = title.nfc().collect();
    let stripped = nfc.strip_prefix("A ").unwrap_or(&nfc);
    let stripped = stripped.strip_prefix("The ").unwrap_or(stripped);

    TITLE_REWRITES
        .iter()
        .fold(stripped.to_string(), |acc, (from, to)| acc.replace(from, to))
}

/// Collapse runs of whitespace into single spaces and trim the ends.
pub fn collapse_whitespace(input: &str) -> String {
    input.split_whitespace().collect::<Vec<_>>().join(" ")
}
