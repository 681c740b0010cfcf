//! End-to-end extraction over realistic listing titles.

use markscan::{extract_phrases, LexiconOverrides, PhraseExtractor};

fn check(cases: &[(&str, &[&str])]) {
    let extractor = PhraseExtractor::new();
    for (title, expected) in cases {
        let got = extractor.extract(title);
        assert_eq!(
            got, *expected,
            "title: {title:?}\n  got: {got:?}\n  want: {expected:?}"
        );
    }
}

#[test]
fn test_brand_and_acronym_titles() {
    check(&[
        (
            "APPLE logo decal for MacBook",
            &["APPLE", "MacBook", "APPLE logo", "logo decal"],
        ),
        ("NASA space program sweatshirt", &["NASA", "space program"]),
        ("DJI drone controller skin", &["DJI", "drone controller"]),
        ("GOAT sports legend tee", &["GOAT", "sports legend"]),
        ("F1 racing decal", &["F1", "racing decal"]),
        (
            "LED RGB USB Gaming Keyboard",
            &["LED", "RGB", "USB", "Gaming Keyboard"],
        ),
        ("AI-generated art shirt", &["AI-generated", "AI", "art shirt"]),
    ]);
}

#[test]
fn test_proper_noun_run_titles() {
    check(&[
        ("Taylor Swift era tour tee", &["Taylor Swift", "era tour", "Swift"]),
        ("Call of Duty gaming mat", &["Call of Duty", "gaming mat"]),
        ("Star Wars Jedi hoodie", &["Star Wars", "Jedi hoodie", "Jedi"]),
        (
            "Marvel Avengers Endgame mug",
            &["Avengers Endgame", "Endgame mug", "Marvel", "Avengers", "Endgame"],
        ),
        (
            "The Beatles tribute tee",
            &["The Beatles", "tribute", "tribute tee", "Beatles"],
        ),
        (
            "Custom Coca-Cola Christmas ornament",
            &["Custom Coca-Cola", "Christmas ornament", "Coca-Cola"],
        ),
        ("Elon Musk fan club tee", &["Elon Musk", "fan club"]),
    ]);
}

#[test]
fn test_digit_run_titles() {
    check(&[
        (
            "iPhone 15 Pro Max wallet case",
            &["iPhone 15 Pro Max", "wallet case"],
        ),
        (
            "NFL Super Bowl 2025 poster",
            &["NFL", "Super Bowl 2025", "Super Bowl"],
        ),
        ("Graduation 2025 keepsake gift", &["Graduation 2025", "keepsake"]),
        // A number after a consumed triple never joins a run; the pair
        // rules pick it up from both sides.
        ("Call of Duty 2 mat", &["Call of Duty", "Duty 2", "2 mat"]),
    ]);
}

#[test]
fn test_inspired_and_possessive_titles() {
    check(&[
        ("Inspired by Louis Vuitton", &["Louis Vuitton"]),
        ("Harry Potter inspired mug", &["Harry Potter"]),
        ("Anime inspired keychain", &["Anime", "Anime inspired"]),
        ("Fan inspired decal", &["fan inspired"]),
        (
            "Taylor’s version lyric shirt",
            &["Taylor", "Taylor’s version", "lyric shirt"],
        ),
        ("Nestlé’s chocolate lovers bundle", &["Nestlé", "chocolate lovers"]),
    ]);
}

#[test]
fn test_generic_and_lowercase_titles() {
    check(&[
        ("funny t-shirt for cat lovers", &["funny", "cat", "cat lovers"]),
        ("gift for men and women", &["men", "women"]),
        ("Disney princess nightgown", &["Disney", "princess", "Disney princess"]),
        (
            "Funny iPhone case with meme quote",
            &["iPhone", "iPhone case", "meme quote"],
        ),
        ("Swift action running shoes", &["Swift action", "running shoes"]),
        ("Barbiecore outfit aesthetic", &["Barbiecore", "Barbiecore outfit"]),
        ("Dog mom Starbucks parody mug", &["Dog", "Starbucks", "parody mug"]),
    ]);
}

#[test]
fn test_vs_titles() {
    check(&[(
        "Coca Cola vs Pepsi meme tee",
        &["Coca Cola", "Pepsi", "Coca Cola vs Pepsi"],
    )]);
}

#[test]
fn test_quoted_spans_pass_through_last() {
    let phrases = extract_phrases("He wears an \"Apple Inc\" shirt");
    assert_eq!(phrases, vec!["wears", "Apple Inc"]);
}

#[test]
fn test_degenerate_titles_yield_nothing() {
    for title in ["", "   ", "\t\n", "?! --- ..."] {
        assert!(extract_phrases(title).is_empty(), "title: {title:?}");
    }
}

#[test]
fn test_output_is_deterministic_and_unique() {
    let extractor = PhraseExtractor::new();
    let titles = [
        "APPLE logo decal for MacBook",
        "Marvel Avengers Endgame mug",
        "NFL Super Bowl 2025 poster",
        "funny t-shirt for cat lovers",
    ];
    for title in titles {
        let first = extractor.extract(title);
        assert_eq!(first, extractor.extract(title));

        let mut keys: Vec<String> = first.iter().map(|p| p.to_lowercase()).collect();
        keys.sort();
        keys.dedup();
        assert_eq!(keys.len(), first.len(), "duplicates in {first:?}");
    }
}

#[test]
fn test_phrases_are_substrings_of_normalized_title() {
    // Every emitted phrase is built from the title's own words; spot
    // check that each word of each phrase appears in the title.
    let extractor = PhraseExtractor::new();
    let title = "Marvel Avengers Endgame mug";
    for phrase in extractor.extract(title) {
        for word in phrase.split(' ') {
            assert!(
                title.to_lowercase().contains(&word.to_lowercase()),
                "word {word:?} not in title"
            );
        }
    }
}

#[test]
fn test_overridden_lexicons_drive_extraction() {
    let json = r#"{ "risk_terms": ["saddle"] }"#;
    let overrides: LexiconOverrides = serde_json::from_str(json).unwrap();
    assert!(overrides.validate(true).is_empty());

    let extractor = PhraseExtractor::with_overrides(&overrides);
    let phrases = extractor.extract("leather saddle kit");
    assert!(phrases.contains(&"leather saddle".to_string()));
}
