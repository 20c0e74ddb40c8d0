// End-to-end catalog builds against fixed snapshots of the remote sources.

use folio_acquire::{Endpoints, HttpFetcher, Sources, StaticFetcher, StatusCode};
use folio_catalog::{
    CatalogError, MonologueCatalog, MonologueCatalogConfig, PlayCatalog, PlayCatalogConfig,
    PlaySelection,
};
use folio_model::{ComplexityCategory, Gender, GenderFilter, Tier};
use tempfile::TempDir;

fn metadata_json() -> String {
    // (title, name, link count, average degree, spoken words, speakers)
    let plays = [
        ("The Comedy of Errors", "the-comedy-of-errors", 400, 13.0, 16_000, 18),
        ("Julius Caesar", "julius-caesar", 900, 12.0, 19_000, 51),
        ("Timon of Athens", "timon-of-athens", 500, 11.0, 17_000, 68),
        ("Henry VI, Part 1", "henry-vi-part-1", 300, 10.0, 18_000, 63),
        ("Hamlet", "hamlet", 1500, 9.5, 30_000, 40),
        ("King Lear", "king-lear", 1200, 9.0, 29_000, 41),
        ("Macbeth", "macbeth", 1300, 8.5, 21_000, 38),
        ("Othello", "othello", 1100, 8.0, 26_000, 27),
        ("Henry V", "henry-v", 600, 7.5, 28_000, 46),
        ("Romeo and Juliet", "romeo-and-juliet", 1400, 7.0, 27_000, 43),
        ("Twelfth Night", "twelfth-night", 950, 6.0, 22_000, 18),
        ("The Tempest", "the-tempest", 1000, 5.0, 20_000, 20),
    ];
    let records: Vec<serde_json::Value> = plays
        .iter()
        .enumerate()
        .map(|(i, (title, name, links, degree, words, speakers))| {
            serde_json::json!({
                "id": format!("shake{:06}", i + 1),
                "name": name,
                "title": title,
                "wikipediaLinkCount": links,
                "averageDegree": degree,
                "wordCountSp": words,
                "numOfSpeakers": speakers,
                "numOfSpeakersMale": speakers - 4,
                "numOfSpeakersFemale": 3,
                "numOfSpeakersUnknown": 1,
                "numOfSegments": 20 + i,
            })
        })
        .collect();
    serde_json::to_string(&records).unwrap()
}

const GENRE_PAGE: &str = r#"<html><body>
<table><tr><td>Plays by word count</td></tr></table>
<table>
<tr><td>Words</td><td>Play</td><td>Genre</td></tr>
<tr><td>30,557</td><td>Hamlet</td><td>Tragedy</td></tr>
<tr><td>29,278</td><td>King Lear</td><td>Tragedy</td></tr>
<tr><td>27,589</td><td>Henry V</td><td>History</td></tr>
<tr><td>25,689</td><td>Othello</td><td>Tragedy</td></tr>
<tr><td>24,545</td><td>Romeo and Juliet</td><td>Tragedy</td></tr>
<tr><td>20,689</td><td>Henry VI, Part I</td><td>History</td></tr>
<tr><td>19,837</td><td>Julius Caesar</td><td>Tragedy</td></tr>
<tr><td>19,303</td><td>Twelfth Night</td><td>Comedy</td></tr>
<tr><td>17,704</td><td>Timon of Athens</td><td>Tragedy</td></tr>
<tr><td>17,121</td><td>Macbeth</td><td>Tragedy</td></tr>
<tr><td>16,036</td><td>Tempest</td><td>Comedy</td></tr>
<tr><td>14,438</td><td>Comedy of Errors</td><td>Comedy</td></tr>
<tr><td>9,211</td><td>Venus and Adonis</td><td>Poem</td></tr>
</table>
</body></html>"#;

fn play_sources() -> Sources<StaticFetcher> {
    let e = Endpoints::default();
    let fetcher = StaticFetcher::new()
        .with_ok(e.metadata_url(), metadata_json())
        .with_ok(e.word_count_url(), GENRE_PAGE)
        .with_ok(e.tei_url("julius-caesar"), "<TEI><title>Julius Caesar</title></TEI>");
    Sources::new(fetcher, e)
}

const HAMLET_CAST: &str = r#"[
    {"id": "hamlet", "name": "Hamlet", "isGroup": false, "degree": 29},
    {"id": "ghost", "name": "The Ghost", "gender": "", "isGroup": false, "degree": 5},
    {"id": "claudius", "name": "Claudius", "gender": "MALE", "isGroup": false, "degree": 20},
    {"id": "gertrude", "name": "Gertrude", "gender": "FEMALE", "isGroup": false, "degree": 15},
    {"id": "players", "name": "Players", "gender": "MALE", "isGroup": true, "degree": 10}
]"#;

const ROMEO_CAST: &str = r#"[
    {"id": "romeo", "name": "Romeo", "gender": "MALE", "isGroup": false, "degree": 25},
    {"id": "juliet", "name": "Juliet", "gender": "FEMALE", "isGroup": false, "degree": 22},
    {"id": "friar", "name": "Friar Lawrence", "gender": "MALE", "isGroup": false, "degree": 18},
    {"id": "nurse", "name": "Nurse", "gender": "FEMALE", "isGroup": false, "degree": 14}
]"#;

const HAMLET_LINK: &str = "http://www.folgerdigitaltexts.org/Ham/segment/sp-1639";
const GHOST_LINK: &str = "http://www.folgerdigitaltexts.org/Ham/segment/sp-0767";
const FRIAR_LINK: &str = "http://www.folgerdigitaltexts.org/Rom/segment/sp-1950";

fn listing(entries: &[(&str, u32, &str)]) -> String {
    let body: String = entries
        .iter()
        .map(|(name, lines, link)| format!("{name} ({lines}) <a href=\"{link}\">text</a><br/>\n"))
        .collect();
    format!("<html><body>\n{body}</body></html>")
}

fn monologue_sources() -> Sources<StaticFetcher> {
    let e = Endpoints::default();
    let fetcher = StaticFetcher::new()
        .with_ok(e.cast_url("hamlet"), HAMLET_CAST)
        .with_ok(e.cast_url("romeo-and-juliet"), ROMEO_CAST)
        .with_ok(
            e.monologue_listing_url("Ham", 50),
            listing(&[
                ("Hamlet", 60, HAMLET_LINK),
                ("Polonius", 55, "http://www.folgerdigitaltexts.org/Ham/segment/sp-0560"),
                ("Players", 52, "http://www.folgerdigitaltexts.org/Ham/segment/sp-1400"),
                ("The Ghost", 50, GHOST_LINK),
            ]),
        )
        .with_ok(
            e.monologue_listing_url("Rom", 50),
            listing(&[("Friar Lawrence", 51, FRIAR_LINK)]),
        )
        .with_ok(
            e.monologue_listing_url("Ham", 40),
            listing(&[
                ("Hamlet", 60, HAMLET_LINK),
                ("The Ghost", 50, GHOST_LINK),
                ("Gertrude", 45, "http://www.folgerdigitaltexts.org/Ham/segment/sp-2100"),
            ]),
        )
        .with_ok(
            e.monologue_listing_url("Rom", 40),
            listing(&[
                ("Friar Lawrence", 51, FRIAR_LINK),
                ("Juliet", 48, "http://www.folgerdigitaltexts.org/Rom/segment/sp-1300"),
                ("Romeo", 44, "http://www.folgerdigitaltexts.org/Rom/segment/sp-0800"),
                ("Nurse", 42, "http://www.folgerdigitaltexts.org/Rom/segment/sp-0300"),
            ]),
        )
        .with_ok(
            e.monologue_listing_url("Ham", 60),
            listing(&[("Hamlet", 60, HAMLET_LINK)]),
        )
        .with(e.monologue_listing_url("Rom", 60), StatusCode::NOT_FOUND, "")
        .with_ok(
            HAMLET_LINK,
            "<html><body><p>I am thy father's spirit, doomed for a certain term to walk the night.</p></body></html>",
        )
        .with_ok(
            FRIAR_LINK,
            "<html><body><p>Within the infant rind of this weak flower\npoison hath residence, and medicine power.</p></body></html>",
        )
        .with_ok(GHOST_LINK, "<html><body><p>Mark me.</p></body></html>");
    Sources::new(fetcher, e)
}

fn selection(codes: &[&str]) -> PlaySelection {
    PlaySelection::Only(codes.iter().map(|c| c.to_string()).collect())
}

#[tokio::test]
async fn test_play_catalog_high_complexity_low_length() {
    let sources = play_sources();
    let config = PlayCatalogConfig::from_args(40, Some("Low"), Some("High")).unwrap();
    let catalog = PlayCatalog::fetch(&sources, config).await.unwrap();

    let summary = catalog.summary();
    let titles: Vec<&str> = summary.iter().map(|s| s.title.as_str()).collect();
    assert_eq!(titles, vec!["Julius Caesar", "Timon of Athens", "Henry VI, Part I"]);

    let genres: Vec<Option<&str>> = summary.iter().map(|s| s.genre.as_deref()).collect();
    assert_eq!(genres, vec![Some("Tragedy"), Some("Tragedy"), Some("History")]);
    let popularity: Vec<Option<Tier>> = summary.iter().map(|s| s.popularity).collect();
    assert_eq!(popularity, vec![Some(Tier::Medium), Some(Tier::Low), Some(Tier::Low)]);
    assert!(summary.iter().all(|s| s.play_length == Some(Tier::Low)));
    assert!(summary.iter().all(|s| s.play_complexity == Some(Tier::High)));

    let detail_titles: Vec<String> = catalog.detail().into_iter().map(|d| d.title).collect();
    assert_eq!(detail_titles, titles);
}

#[tokio::test]
async fn test_play_catalog_respects_min_cast_size() {
    let sources = play_sources();
    for min_cast_size in [1, 20, 40, 50, 70] {
        let config = PlayCatalogConfig { min_cast_size, ..Default::default() };
        let catalog = PlayCatalog::fetch(&sources, config).await.unwrap();
        assert!(catalog
            .summary()
            .iter()
            .all(|s| s.num_character.is_some_and(|n| n >= min_cast_size)));
    }
}

#[tokio::test]
async fn test_play_catalog_filters_do_not_move_tiers() {
    let sources = play_sources();
    let everything = PlayCatalog::fetch(&sources, PlayCatalogConfig { min_cast_size: 1, ..Default::default() })
        .await
        .unwrap();
    for tier in Tier::ALL {
        let config = PlayCatalogConfig {
            min_cast_size: 40,
            length_tier: Some(tier),
            complexity_tier: None,
        };
        let filtered = PlayCatalog::fetch(&sources, config).await.unwrap();
        for row in filtered.rows() {
            let full = everything.rows().iter().find(|r| r.title == row.title).unwrap();
            assert_eq!(row.popularity, full.popularity);
            assert_eq!(row.play_complexity, full.play_complexity);
            assert_eq!(row.play_length, full.play_length);
        }
    }
}

#[tokio::test]
async fn test_play_catalog_remote_errors() {
    let e = Endpoints::default();
    let missing = Sources::new(StaticFetcher::new(), e.clone());
    let err = PlayCatalog::fetch(&missing, PlayCatalogConfig::default()).await.unwrap_err();
    assert!(err.is_not_found());

    let broken = Sources::new(
        StaticFetcher::new().with(e.metadata_url(), StatusCode::INTERNAL_SERVER_ERROR, ""),
        e,
    );
    let err = PlayCatalog::fetch(&broken, PlayCatalogConfig::default()).await.unwrap_err();
    assert!(err.is_server_error());
}

#[tokio::test]
async fn test_play_catalog_invalid_config_sends_nothing() {
    let sources = play_sources();
    let config = PlayCatalogConfig { min_cast_size: 0, ..Default::default() };
    let err = PlayCatalog::fetch(&sources, config).await.unwrap_err();
    assert!(matches!(err, CatalogError::InvalidArgument(_)));
    assert!(sources.fetcher().requested().is_empty());
}

#[tokio::test]
async fn test_play_download_script() {
    let sources = play_sources();
    let config = PlayCatalogConfig::from_args(40, Some("Low"), Some("High")).unwrap();
    let catalog = PlayCatalog::fetch(&sources, config).await.unwrap();

    let temp_dir = TempDir::new().unwrap();
    let path = catalog.download_script(&sources, 1, temp_dir.path()).await.unwrap();
    assert_eq!(path, temp_dir.path().join("julius-caesar_script.xml"));
    assert_eq!(
        std::fs::read_to_string(&path).unwrap(),
        "<TEI><title>Julius Caesar</title></TEI>"
    );
}

#[tokio::test]
async fn test_play_download_out_of_range_sends_nothing() {
    let sources = play_sources();
    let config = PlayCatalogConfig::from_args(40, Some("Low"), Some("High")).unwrap();
    let catalog = PlayCatalog::fetch(&sources, config).await.unwrap();
    let before = sources.fetcher().requested().len();

    let temp_dir = TempDir::new().unwrap();
    for row in [0, catalog.len() + 1, 100] {
        let err = catalog.download_script(&sources, row, temp_dir.path()).await.unwrap_err();
        assert!(matches!(err, CatalogError::IndexOutOfRange { .. }));
    }
    assert_eq!(sources.fetcher().requested().len(), before);
    assert_eq!(std::fs::read_dir(temp_dir.path()).unwrap().count(), 0);
}

#[tokio::test]
async fn test_monologue_catalog_romeo_and_hamlet() {
    let sources = monologue_sources();
    let plays = vec!["Rom".to_string(), "Ham".to_string()];
    let config = MonologueCatalogConfig::from_args("ALL", 50, false, Some(plays.as_slice())).unwrap();
    let catalog = MonologueCatalog::fetch(&sources, config).await.unwrap();

    let names: Vec<&str> = catalog.summary().iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Hamlet", "Friar Lawrence", "The Ghost"]);

    let plays: Vec<&str> = catalog.summary().iter().map(|r| r.play.as_str()).collect();
    assert_eq!(plays, vec!["hamlet", "romeo-and-juliet", "hamlet"]);
    let degrees: Vec<u32> = catalog.summary().iter().map(|r| r.degree).collect();
    assert_eq!(degrees, vec![29, 18, 5]);
    let lines: Vec<u32> = catalog.summary().iter().map(|r| r.line_num).collect();
    assert_eq!(lines, vec![60, 51, 50]);
    assert_eq!(catalog.summary()[2].monologue_link, GHOST_LINK);
    assert_eq!(catalog.summary()[0].gender, None);

    // Cast lists are fetched in table order, Hamlet before Romeo.
    let e = Endpoints::default();
    let requested = sources.fetcher().requested();
    assert_eq!(requested[0], e.cast_url("hamlet"));
    assert_eq!(requested[1], e.cast_url("romeo-and-juliet"));
}

#[tokio::test]
async fn test_monologue_catalog_male_keeps_unknowns() {
    let sources = monologue_sources();
    let config = MonologueCatalogConfig {
        gender: GenderFilter::Male,
        min_line_count: 40,
        selection: selection(&["Ham", "Rom"]),
    };
    let catalog = MonologueCatalog::fetch(&sources, config).await.unwrap();

    assert!(catalog.summary().iter().all(|r| r.gender != Some(Gender::Female)));
    let names: Vec<&str> = catalog.summary().iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Hamlet", "Romeo", "Friar Lawrence", "The Ghost"]);
}

#[tokio::test]
async fn test_monologue_listing_failure_is_skipped() {
    let sources = monologue_sources();
    let config = MonologueCatalogConfig {
        gender: GenderFilter::All,
        min_line_count: 60,
        selection: selection(&["Ham", "Rom"]),
    };
    let catalog = MonologueCatalog::fetch(&sources, config).await.unwrap();
    let names: Vec<&str> = catalog.summary().iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Hamlet"]);
}

#[tokio::test]
async fn test_monologue_cast_failure_is_fatal() {
    let e = Endpoints::default();
    let sources = Sources::new(
        StaticFetcher::new().with(e.cast_url("macbeth"), StatusCode::INTERNAL_SERVER_ERROR, ""),
        e.clone(),
    );
    let config = MonologueCatalogConfig {
        selection: selection(&["Mac"]),
        ..Default::default()
    };
    let err = MonologueCatalog::fetch(&sources, config).await.unwrap_err();
    assert!(err.is_server_error());

    let sources = Sources::new(StaticFetcher::new(), e);
    let config = MonologueCatalogConfig {
        selection: selection(&["Oth"]),
        ..Default::default()
    };
    let err = MonologueCatalog::fetch(&sources, config).await.unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_monologue_invalid_config_sends_nothing() {
    let sources = monologue_sources();
    let config = MonologueCatalogConfig {
        selection: PlaySelection::Only(Vec::new()),
        ..Default::default()
    };
    let err = MonologueCatalog::fetch(&sources, config).await.unwrap_err();
    assert!(matches!(err, CatalogError::InvalidArgument(_)));
    assert!(sources.fetcher().requested().is_empty());
}

#[tokio::test]
async fn test_monologue_complexity() {
    let sources = monologue_sources();
    let config = MonologueCatalogConfig {
        min_line_count: 50,
        selection: selection(&["Ham", "Rom"]),
        ..Default::default()
    };
    let mut catalog = MonologueCatalog::fetch(&sources, config).await.unwrap();

    let rows = catalog.complexity(&sources).await.unwrap();
    let scores: Vec<f64> = rows.iter().map(|r| r.complexity_score.unwrap()).collect();
    // Hamlet: 16 tokens, 1 sentence, 18 syllables -> 6.24 + 12.98 - 15.59
    assert!((scores[0] - 3.63).abs() < 1e-9);
    // Friar: removing the newline joins "flowerpoison", leaving 15 tokens and
    // 23 syllables -> 5.85 + 17.7 - 15.59
    assert!((scores[1] - 7.96).abs() < 1e-9);
    // Ghost: 3 tokens, 2 syllables -> 1.17 + 8.26 - 15.59
    assert!((scores[2] - (-6.16)).abs() < 1e-9);

    let categories: Vec<Option<ComplexityCategory>> = rows.iter().map(|r| r.complexity_category).collect();
    assert_eq!(
        categories,
        vec![Some(ComplexityCategory::Basic), Some(ComplexityCategory::Average), None]
    );

    // Same text, same scores.
    let again: Vec<f64> = catalog
        .complexity(&sources)
        .await
        .unwrap()
        .iter()
        .map(|r| r.complexity_score.unwrap())
        .collect();
    assert_eq!(again, scores);
}

#[tokio::test]
async fn test_monologue_complexity_failure_leaves_table_unscored() {
    let e = Endpoints::default();
    let fetcher = StaticFetcher::new()
        .with_ok(e.cast_url("hamlet"), HAMLET_CAST)
        .with_ok(
            e.monologue_listing_url("Ham", 50),
            listing(&[("Hamlet", 60, HAMLET_LINK), ("The Ghost", 50, GHOST_LINK)]),
        )
        .with_ok(HAMLET_LINK, "<p>Words, words, words.</p>");
    let sources = Sources::new(fetcher, e);
    let config = MonologueCatalogConfig {
        min_line_count: 50,
        selection: selection(&["Ham"]),
        ..Default::default()
    };
    let mut catalog = MonologueCatalog::fetch(&sources, config).await.unwrap();

    let err = catalog.complexity(&sources).await.unwrap_err();
    assert!(err.is_not_found());
    assert!(catalog.summary().iter().all(|r| r.complexity_score.is_none()));
}

#[tokio::test]
async fn test_monologue_download() {
    let sources = monologue_sources();
    let config = MonologueCatalogConfig {
        min_line_count: 50,
        selection: selection(&["Ham", "Rom"]),
        ..Default::default()
    };
    let catalog = MonologueCatalog::fetch(&sources, config).await.unwrap();

    let temp_dir = TempDir::new().unwrap();
    let path = catalog.download_script(&sources, 2, temp_dir.path()).await.unwrap();
    assert_eq!(path, temp_dir.path().join("romeo-and-juliet_Friar Lawrence_monologue.txt"));
    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text.starts_with("Within the infant rind"));

    let before = sources.fetcher().requested().len();
    let err = catalog.download_script(&sources, 4, temp_dir.path()).await.unwrap_err();
    assert!(matches!(err, CatalogError::IndexOutOfRange { row: 4, rows: 3 }));
    assert_eq!(sources.fetcher().requested().len(), before);
}

#[tokio::test]
#[ignore = "hits the live corpus and text sites"]
async fn test_live_sources() {
    let sources = Sources::new(HttpFetcher::new().unwrap(), Endpoints::default());

    let config = PlayCatalogConfig::from_args(40, Some("Low"), Some("High")).unwrap();
    let plays = PlayCatalog::fetch(&sources, config).await.unwrap();
    let titles: Vec<String> = plays.summary().into_iter().map(|s| s.title).collect();
    assert_eq!(titles, vec!["Julius Caesar", "Timon of Athens", "Henry VI, Part I"]);

    let codes = vec!["Rom".to_string(), "Ham".to_string()];
    let config = MonologueCatalogConfig::from_args("ALL", 50, false, Some(codes.as_slice())).unwrap();
    let monologues = MonologueCatalog::fetch(&sources, config).await.unwrap();
    let names: Vec<&str> = monologues.summary().iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Hamlet", "Friar Lawrence", "The Ghost"]);
}
