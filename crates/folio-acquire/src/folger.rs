// Monologue listings from the digital-text site.
//
// A listing page is a run of `Name (lines) <a href=...>` fragments: each
// anchor links to one monologue and the text node just before it carries the
// speaker and line count.

use ego_tree::NodeRef;
use folio_model::MonologueEntry;
use regex::Regex;
use reqwest::Url;
use scraper::{Html, Node, Selector};
use std::ops::Deref;
use std::sync::LazyLock;

use crate::error::{AcquireError, Result};

/// Short code on the digital-text site paired with the corpus slug.
pub const PLAY_CODES: [(&str, &str); 37] = [
    ("AWW", "all-s-well-that-ends-well"),
    ("Ant", "antony-and-cleopatra"),
    ("AYL", "as-you-like-it"),
    ("Err", "the-comedy-of-errors"),
    ("Cor", "coriolanus"),
    ("Cym", "cymbeline"),
    ("Ham", "hamlet"),
    ("1H4", "henry-iv-part-i"),
    ("2H4", "henry-iv-part-ii"),
    ("H5", "henry-v"),
    ("1H6", "henry-vi-part-1"),
    ("2H6", "henry-vi-part-2"),
    ("3H6", "henry-vi-part-3"),
    ("H8", "henry-viii"),
    ("JC", "julius-caesar"),
    ("Jn", "king-john"),
    ("Lr", "king-lear"),
    ("LLL", "love-s-labor-s-lost"),
    ("Mac", "macbeth"),
    ("MM", "measure-for-measure"),
    ("MV", "the-merchant-of-venice"),
    ("Wiv", "the-merry-wives-of-windsor"),
    ("MND", "a-midsummer-night-s-dream"),
    ("Ado", "much-ado-about-nothing"),
    ("Oth", "othello"),
    ("Per", "pericles"),
    ("R2", "richard-ii"),
    ("R3", "richard-iii"),
    ("Rom", "romeo-and-juliet"),
    ("Shr", "the-taming-of-the-shrew"),
    ("Tmp", "the-tempest"),
    ("Tim", "timon-of-athens"),
    ("Tit", "titus-andronicus"),
    ("Tro", "troilus-and-cressida"),
    ("TN", "twelfth-night"),
    ("TGV", "two-gentlemen-of-verona"),
    ("WT", "the-winter-s-tale"),
];

pub fn play_for_code(code: &str) -> Option<&'static str> {
    PLAY_CODES.iter().find(|(c, _)| *c == code).map(|(_, p)| *p)
}

pub fn code_for_play(play: &str) -> Option<&'static str> {
    PLAY_CODES.iter().find(|(_, p)| *p == play).map(|(c, _)| *c)
}

static SPEAKER_LINES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(.*?)\s*\((.*?)\)").expect("valid regex"));

/// Split "Name (lines)" into its parts. The first match in the text wins.
pub fn parse_speaker_label(text: &str) -> Option<(String, u32)> {
    let caps = SPEAKER_LINES.captures(text)?;
    let name = caps[1].trim().to_string();
    let lines = caps[2].trim().parse().ok()?;
    Some((name, lines))
}

/// Parse a monologue listing page.
///
/// Anchors whose preceding sibling is not a `Name (lines)` text node are
/// skipped. Relative links are resolved against `page_url`.
pub fn parse_listing(html: &str, page_url: &str) -> Result<Vec<MonologueEntry>> {
    let base = Url::parse(page_url).map_err(|e| AcquireError::Url {
        url: page_url.to_string(),
        reason: e.to_string(),
    })?;

    let document = Html::parse_document(html);
    let anchor_sel = Selector::parse("a").expect("valid selector");

    let mut entries = Vec::new();
    for anchor in document.select(&anchor_sel) {
        let Some(href) = anchor.value().attr("href") else {
            continue;
        };
        let Some(label) = preceding_text(*anchor) else {
            tracing::debug!(href = %href, "Skipping anchor without a preceding text label");
            continue;
        };
        let Some((name, line_num)) = parse_speaker_label(label) else {
            tracing::debug!(href = %href, label = %label.trim(), "Skipping anchor with unparseable label");
            continue;
        };
        let link = match base.join(href) {
            Ok(link) => link.to_string(),
            Err(e) => {
                tracing::warn!(href = %href, error = %e, "Skipping unresolvable monologue link");
                continue;
            }
        };

        entries.push(MonologueEntry {
            name,
            monologue_link: link,
            line_num,
        });
    }

    Ok(entries)
}

fn preceding_text<'a>(node: NodeRef<'a, Node>) -> Option<&'a str> {
    match node.prev_sibling()?.value() {
        Node::Text(text) => Some(text.deref()),
        _ => None,
    }
}

/// All text content of an HTML page.
pub fn page_text(html: &str) -> String {
    Html::parse_document(html).root_element().text().collect()
}
