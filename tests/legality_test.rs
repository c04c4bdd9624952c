//! Clue legality properties against the shipped lexical capabilities.

mod common;

use catch_phrase::{LexicalFilter, Violation};
use catch_phrase_lexicon::{CmuRhymes, EnglishInflector, PorterStemmer, Stemmer};
use std::sync::Arc;

fn filter() -> LexicalFilter {
    LexicalFilter::new(
        Arc::new(PorterStemmer::new()),
        Arc::new(EnglishInflector::new()),
        Arc::new(CmuRhymes::parse(common::PRONUNCIATIONS)),
    )
}

#[test]
fn test_shared_stem_always_flags_the_clue() {
    let stemmer = PorterStemmer::new();
    let pairs = [
        ("running", "runs"),
        ("connection", "connected"),
        ("happily", "happy"),
        ("jumping", "jumped"),
        ("generous", "generously"),
        ("dog", "puppy"),
    ];

    for (word, clue) in pairs {
        if stemmer.stem(word) == stemmer.stem(clue) {
            assert_eq!(
                filter().evaluate_clue(word, &[clue]),
                Some(clue.to_string()),
                "{} should be flagged against {}",
                clue,
                word
            );
        }
    }
}

#[test]
fn test_plural_and_singular_flag_each_other() {
    assert_eq!(filter().evaluate_clue("cats", &["cat"]), Some("cat".to_string()));
    assert_eq!(filter().evaluate_clue("cat", &["cats"]), Some("cats".to_string()));
}

#[test]
fn test_rhyme_rule_needs_matching_plurality() {
    // Same class: both singular, both plural.
    let singular = filter().find_violation("cat", &["bat"]).expect("rhyme flagged");
    assert_eq!(singular.violation, Violation::Rhyme);
    let plural = filter().find_violation("cats", &["hats"]).expect("rhyme flagged");
    assert_eq!(plural.violation, Violation::Rhyme);

    // Mixed classes are allowed even though the sounds match.
    assert_eq!(filter().evaluate_clue("cat", &["hats"]), None);
    assert_eq!(filter().evaluate_clue("cats", &["hat"]), None);
}

#[test]
fn test_example_bag_is_legal() {
    assert_eq!(filter().evaluate_clue("dog", &["puppy", "canine"]), None);
}

#[test]
fn test_rhyme_found_from_either_side() {
    assert_eq!(filter().evaluate_clue("log", &["dog"]), Some("dog".to_string()));
    assert_eq!(filter().evaluate_clue("dog", &["log"]), Some("log".to_string()));
}

#[test]
fn test_report_names_token_and_rule() {
    let illegal = filter()
        .find_violation("snowman", &["frosty", "snow"])
        .expect("containment flagged");
    assert_eq!(illegal.token, "snow");
    assert_eq!(illegal.violation, Violation::Containment);
    assert_eq!(
        illegal.to_string(),
        "\"snow\" contains or is contained in the word"
    );
}
