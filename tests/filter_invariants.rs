mod common;

use catalog_discovery::content::ContentItem;
use catalog_discovery::discovery::{self, CatalogFilter, DiscoveryConfig, SubstringMatcher};
use catalog_discovery::types::FacetState;
use common::{blog_like_facets, ids, init_tracing, make_item};

fn collection() -> Vec<ContentItem> {
    vec![
        make_item(1, "Learning Python", "Scripts and notebooks", "tutorial"),
        make_item(2, "A year in review", "What went well", "personal"),
        make_item(3, "Async Rust", "Futures without tears", "tutorial"),
        make_item(4, "Why AI tutors work", "Notes on education", "insights"),
        make_item(5, "Two  spaces", "Typography habits", "personal"),
    ]
}

fn states() -> Vec<FacetState> {
    vec![
        FacetState::default(),
        FacetState::new("", "tutorial"),
        FacetState::new("python", "all"),
        FacetState::new("a", "personal"),
        FacetState::new("notes", "insights"),
        FacetState::new("zzz-no-match", "all"),
        FacetState::new("rust", "no-such-facet"),
    ]
}

#[test]
fn invariant_result_is_ordered_subsequence() {
    init_tracing();
    let items = collection();
    let facets = blog_like_facets();

    for state in states() {
        let visible = discovery::filter(&items, &facets, &state);

        // Every visible item appears in the collection, and positions increase
        let mut last_pos = None;
        for item in &visible {
            let pos = items
                .iter()
                .position(|candidate| candidate.id == item.id)
                .expect("visible item must come from the collection");
            if let Some(prev) = last_pos {
                assert!(pos > prev, "filter must preserve collection order for {state:?}");
            }
            last_pos = Some(pos);
        }
    }
}

#[test]
fn invariant_unfiltered_state_is_identity() {
    let items = collection();
    let facets = blog_like_facets();

    let visible = discovery::filter(&items, &facets, &FacetState::default());

    let expected: Vec<&ContentItem> = items.iter().collect();
    assert_eq!(visible, expected);
}

#[test]
fn invariant_filter_is_idempotent() {
    let items = collection();
    let facets = blog_like_facets();
    let engine = CatalogFilter::default();

    for state in states() {
        let once = engine.filter(&items, &facets, &state);
        let twice = engine.filter(&once, &facets, &state);

        let once_ids: Vec<_> = once.iter().map(|item| item.id.clone()).collect();
        let twice_ids: Vec<_> = twice.iter().map(|item| item.id.clone()).collect();
        assert_eq!(once_ids, twice_ids, "filtering twice must be a fixed point for {state:?}");
    }
}

#[test]
fn test_query_is_case_insensitive() {
    let items = collection();
    let facets = blog_like_facets();

    let visible = discovery::filter(&items, &facets, &FacetState::new("PYTHON", "all"));

    assert_eq!(ids(&visible), vec!["1"]);
}

#[test]
fn test_query_matches_title_or_summary_independently() {
    let items = collection();
    let facets = blog_like_facets();

    // "futures" only in summary of 3, "review" only in title of 2
    let by_summary = discovery::filter(&items, &facets, &FacetState::new("futures", "all"));
    let by_title = discovery::filter(&items, &facets, &FacetState::new("review", "all"));

    assert_eq!(ids(&by_summary), vec!["3"]);
    assert_eq!(ids(&by_title), vec!["2"]);
}

#[test]
fn test_query_and_facet_must_both_hold() {
    let items = collection();
    let facets = blog_like_facets();

    // "rust" matches 3 (tutorial); selecting personal excludes it
    let visible = discovery::filter(&items, &facets, &FacetState::new("rust", "personal"));
    assert!(visible.is_empty());

    let visible = discovery::filter(&items, &facets, &FacetState::new("rust", "tutorial"));
    assert_eq!(ids(&visible), vec!["3"]);
}

#[test]
fn test_empty_collection_yields_empty_result() {
    let items: Vec<ContentItem> = Vec::new();
    let facets = blog_like_facets();

    for state in states() {
        assert!(discovery::filter(&items, &facets, &state).is_empty());
    }
}

#[test]
fn test_unknown_facet_fails_open() {
    init_tracing();
    let items = collection();
    let facets = blog_like_facets();

    let visible = discovery::filter(&items, &facets, &FacetState::new("", "no-such-facet"));
    assert_eq!(visible.len(), items.len());

    let result = CatalogFilter::default().discover(
        &items,
        &facets,
        &FacetState::new("", "no-such-facet"),
    );
    assert_eq!(result.summary.selected_facet, "no-such-facet");
    assert_eq!(result.summary.effective_facet, "all");
}

#[test]
fn test_whitespace_only_query_trimmed_by_default() {
    let items = collection();
    let facets = blog_like_facets();

    let visible = discovery::filter(&items, &facets, &FacetState::new("   ", "all"));
    assert_eq!(visible.len(), items.len(), "trimmed whitespace query behaves as empty");

    let visible = discovery::filter(&items, &facets, &FacetState::new("  python ", "all"));
    assert_eq!(ids(&visible), vec!["1"]);
}

#[test]
fn test_whitespace_only_query_literal_policy() {
    let items = collection();
    let facets = blog_like_facets();
    let engine = CatalogFilter::new(DiscoveryConfig::literal(), SubstringMatcher);

    // Only item 5 literally contains two consecutive spaces
    let visible = engine.filter(&items, &facets, &FacetState::new("  ", "all"));
    assert_eq!(ids(&visible), vec!["5"]);

    let visible = engine.filter(&items, &facets, &FacetState::new("  python ", "all"));
    assert!(visible.is_empty());
}

#[test]
fn test_recomputation_is_stable() {
    let items = collection();
    let facets = blog_like_facets();
    let engine = CatalogFilter::default();
    let state = FacetState::new("a", "all");

    let first = engine.discover(&items, &facets, &state);
    for _ in 0..10 {
        let again = engine.discover(&items, &facets, &state);
        assert_eq!(again.visible, first.visible);
        assert_eq!(again.facet_counts, first.facet_counts);
        assert_eq!(again.distinct_tags, first.distinct_tags);
        assert_eq!(again.summary, first.summary);
    }
}
