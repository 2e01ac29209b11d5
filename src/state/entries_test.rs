use super::*;

fn entry(id: &str, title: &str, content: &str) -> JournalEntry {
    JournalEntry {
        id: id.to_owned(),
        title: title.to_owned(),
        content: content.to_owned(),
        date: None,
    }
}

// =============================================================
// Generation-guarded loads
// =============================================================

#[test]
fn begin_load_issues_increasing_generations() {
    let mut state = EntriesState::default();
    let first = state.begin_load();
    let second = state.begin_load();
    assert!(second > first);
    assert!(state.loading);
}

#[test]
fn stale_completion_is_discarded() {
    let mut state = EntriesState::default();
    let stale = state.begin_load();
    let current = state.begin_load();

    // The newer request resolves first.
    assert!(state.finish_load(current, Ok(vec![entry("1", "Fresh", "")])));
    // The older one straggles in afterwards and must not clobber it.
    assert!(!state.finish_load(stale, Ok(vec![entry("2", "Stale", "")])));

    assert_eq!(state.items.len(), 1);
    assert_eq!(state.items[0].title, "Fresh");
    assert!(!state.loading);
}

#[test]
fn failed_load_keeps_items_and_records_the_message() {
    let mut state = EntriesState::default();
    let generation = state.begin_load();
    assert!(state.finish_load(generation, Ok(vec![entry("1", "Kept", "")])));

    let generation = state.begin_load();
    assert!(state.finish_load(generation, Err("Failed to load journal entries".to_owned())));

    assert_eq!(state.items.len(), 1);
    assert_eq!(state.error.as_deref(), Some("Failed to load journal entries"));
    assert!(!state.loading);
}

#[test]
fn successful_load_clears_a_previous_error() {
    let mut state = EntriesState::default();
    let generation = state.begin_load();
    state.finish_load(generation, Err("boom".to_owned()));

    let generation = state.begin_load();
    state.finish_load(generation, Ok(vec![]));
    assert!(state.error.is_none());
}

// =============================================================
// Local delete and filtering
// =============================================================

#[test]
fn remove_drops_only_the_matching_entry() {
    let mut state = EntriesState::default();
    state.items = vec![entry("1", "a", ""), entry("2", "b", "")];
    state.remove("1");
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.items[0].id, "2");
}

#[test]
fn filtered_matches_title_and_content_case_insensitively() {
    let mut state = EntriesState::default();
    state.items = vec![
        entry("1", "Morning Run", "5k around the lake"),
        entry("2", "Groceries", "Milk and EGGS"),
        entry("3", "Untitled", "ran into an old friend"),
    ];

    let hits = state.filtered("RUN");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, "1");

    let hits = state.filtered("eggs");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, "2");
}

#[test]
fn blank_filter_returns_everything() {
    let mut state = EntriesState::default();
    state.items = vec![entry("1", "a", ""), entry("2", "b", "")];
    assert_eq!(state.filtered("   ").len(), 2);
}
