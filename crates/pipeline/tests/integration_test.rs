//! Integration tests for the pipeline.
//!
//! These tests run the full suggestion pipeline over the kind of messy
//! output a generative backend produces.

use catalog::{MAX_SUGGESTIONS, SuggestionQuery};
use pipeline::filters::*;
use pipeline::FilterPipeline;

fn messy_suggestions() -> Vec<String> {
    vec![
        " The Lord of the Rings: The Fellowship of the Ring ",
        "",
        "The Lord of the Rings: The Two Towers",
        "the lord of the rings: the two towers",
        "The Lord of the Rings: The Return of the King",
        "   ",
        "Lord of War",
        "The Lords of Salem",
        "Lord of the Flies",
        "Greystoke: The Legend of Tarzan, Lord of the Apes",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

#[test]
fn test_full_pipeline_cleans_generative_output() {
    let query = SuggestionQuery::new("lord of").unwrap();
    let pipeline = FilterPipeline::for_suggestions();

    let cleaned = pipeline.apply(messy_suggestions(), &query).unwrap();

    assert_eq!(cleaned.len(), MAX_SUGGESTIONS);
    assert_eq!(
        cleaned,
        vec![
            "The Lord of the Rings: The Fellowship of the Ring",
            "The Lord of the Rings: The Two Towers",
            "The Lord of the Rings: The Return of the King",
            "Lord of War",
            "The Lords of Salem",
        ]
    );
}

#[test]
fn test_pipeline_output_invariants() {
    let query = SuggestionQuery::new("lord of").unwrap();
    let pipeline = FilterPipeline::for_suggestions();

    let cleaned = pipeline.apply(messy_suggestions(), &query).unwrap();

    assert!(cleaned.len() <= MAX_SUGGESTIONS);
    for title in &cleaned {
        assert!(!title.is_empty(), "No empty titles should survive");
        assert_eq!(title.trim(), title, "Titles should be trimmed");
    }
}

#[test]
fn test_limit_before_dedup_loses_titles() {
    // Order matters: capping first keeps a duplicate and drops a real title
    let query = SuggestionQuery::new("lord of").unwrap();
    let pipeline = FilterPipeline::new()
        .add_filter(TrimFilter)
        .add_filter(LimitFilter::new(3))
        .add_filter(DedupFilter);

    let cleaned = pipeline.apply(messy_suggestions(), &query).unwrap();

    assert_eq!(cleaned.len(), 2);
}
