//! Tests for pagination module

use super::*;
use crate::cursor::Cursor;
use crate::types::{Direction, StringMap};
use pretty_assertions::assert_eq;
use std::sync::Arc;
use test_case::test_case;

/// Record with a single ordering field `v`
#[derive(Debug, Clone)]
struct Word(&'static str);

impl ValueProvider for Word {
    fn value_for(&self, order: &str) -> String {
        match order {
            "v" => self.0.to_string(),
            _ => String::new(),
        }
    }
}

#[derive(Debug)]
struct Comment {
    created_at: i64,
    updated_at: i64,
}

impl ValueProvider for Comment {
    fn value_for(&self, order: &str) -> String {
        match order {
            "created_at" => self.created_at.to_string(),
            "updated_at" => self.updated_at.to_string(),
            _ => String::new(),
        }
    }
}

fn words(values: &[&'static str]) -> Vec<Word> {
    values.iter().copied().map(Word).collect()
}

fn comments() -> Vec<Comment> {
    [(3, 5), (3, 5), (2, 5), (1, 4), (0, 4)]
        .into_iter()
        .map(|(created_at, updated_at)| Comment {
            created_at,
            updated_at,
        })
        .collect()
}

// ============================================================================
// Empty Input Tests
// ============================================================================

#[test_case(true ; "prefetched")]
#[test_case(false ; "not prefetched")]
fn test_next_no_items(prefetched: bool) {
    let cursor = Cursor::new("v", Direction::Asc, 10);
    let items: Vec<Word> = Vec::new();
    assert_eq!(next(&cursor, &items, prefetched), None);
}

#[test]
fn test_prev_no_items() {
    let cursor = Cursor::new("v", Direction::Asc, 10);
    let items: Vec<Word> = Vec::new();
    assert_eq!(prev(&cursor, &items), None);
}

// ============================================================================
// Next Tests
// ============================================================================

#[test_case(&["Hello", "world!"] ; "short page")]
#[test_case(&["a", "b", "c"] ; "exactly one page")]
fn test_next_prefetched_without_lookahead_is_last_page(values: &[&'static str]) {
    let cursor = Cursor::new("v", Direction::Asc, 3);
    assert_eq!(next(&cursor, &words(values), true), None);
}

#[test]
fn test_next_uses_lookahead_record() {
    let cursor = Cursor::new("v", Direction::Asc, 2);
    let next = next(&cursor, &words(&["a", "b", "c"]), true).unwrap();

    assert_eq!(next, Cursor::new("v", Direction::Asc, 2).at("c", 0));
}

#[test]
fn test_next_without_prefetch_uses_last_record() {
    let cursor = Cursor::new("v", Direction::Desc, 3);
    let next = next(&cursor, &words(&["c", "b", "b"]), false).unwrap();

    // Boundary is the last record and both "b"s are on this page
    assert_eq!(next, Cursor::new("v", Direction::Desc, 3).at("b", 2));
}

#[test]
fn test_next_short_page_without_prefetch() {
    let cursor = Cursor::new("v", Direction::Asc, 5);
    let next = next(&cursor, &words(&["a", "b"]), false).unwrap();
    assert_eq!(next.value, "b");
    assert_eq!(next.offset, 1);
    assert_eq!(next.count, 5);
}

#[test]
fn test_next_counts_ties_before_lookahead() {
    let cursor = Cursor::new("v", Direction::Asc, 3);
    let next = next(&cursor, &words(&["1", "2", "2", "2"]), true).unwrap();

    assert_eq!(next.value, "2");
    assert_eq!(next.offset, 2);
}

#[test]
fn test_next_keeps_order_and_direction() {
    let cursor = Cursor::new("updated_at", Direction::Desc, 2);
    let next = next(&cursor, &comments(), true).unwrap();

    assert_eq!(next.order, "updated_at");
    assert_eq!(next.direction, Direction::Desc);
    assert_eq!(next.value, "5");
    assert_eq!(next.offset, 2);
}

#[test]
fn test_next_created_at_sample() {
    let cursor = Cursor::new("created_at", Direction::Desc, 2);
    let next = next(&cursor, &comments(), true).unwrap();

    assert_eq!(next.value, "2");
    assert_eq!(next.offset, 0);
}

#[test]
fn test_next_unknown_order_key_ties_everything() {
    let cursor = Cursor::new("missing", Direction::Asc, 2);
    let next = next(&cursor, &words(&["a", "b", "c"]), true).unwrap();

    assert_eq!(next.value, "");
    assert_eq!(next.offset, 2);
}

// ============================================================================
// Tie Run Tests
// ============================================================================

#[test]
fn test_tie_run_first_page_does_not_chain() {
    let cursor = Cursor::new("v", Direction::Asc, 2);
    let next = next(&cursor, &words(&["1", "1", "1", "2"]), true).unwrap();

    assert_eq!(next.value, "1");
    assert_eq!(next.offset, 2);
}

#[test]
fn test_tie_run_chains_across_full_pages() {
    let first = Cursor::new("v", Direction::Asc, 2);
    let second = next(&first, &words(&["1", "1", "1"]), true).unwrap();
    assert_eq!(second.offset, 2);

    // Store skips 2, page is still all "1"
    let third = next(&second, &words(&["1", "1", "1"]), true).unwrap();
    assert_eq!(third.value, "1");
    assert_eq!(third.offset, 4);

    let fourth = next(&third, &words(&["1", "1", "2"]), true).unwrap();
    assert_eq!(fourth.value, "2");
    assert_eq!(fourth.offset, 0);
}

#[test]
fn test_tie_run_does_not_chain_on_new_value() {
    let cursor = Cursor::new("v", Direction::Asc, 2).at("1", 3);
    let next = next(&cursor, &words(&["2", "2", "2"]), true).unwrap();

    assert_eq!(next.value, "2");
    assert_eq!(next.offset, 2);
}

#[test]
fn test_partial_tie_does_not_chain() {
    let cursor = Cursor::new("v", Direction::Asc, 3).at("1", 5);
    let next = next(&cursor, &words(&["0", "1", "1", "1"]), true).unwrap();

    assert_eq!(next.value, "1");
    assert_eq!(next.offset, 2);
}

// ============================================================================
// Prev Tests
// ============================================================================

#[test_case(Direction::Asc, Direction::Desc ; "ascending")]
#[test_case(Direction::Desc, Direction::Asc ; "descending")]
fn test_prev_inverts_direction(current: Direction, expected: Direction) {
    let cursor = Cursor::new("v", current, 2);
    let prev = prev(&cursor, &words(&["a", "b", "c"])).unwrap();
    assert_eq!(prev.direction, expected);
}

#[test]
fn test_prev_anchors_on_first_record() {
    let cursor = Cursor::new("v", Direction::Asc, 3).at("a", 1);
    let prev = prev(&cursor, &words(&["b", "b", "c", "d"])).unwrap();

    assert_eq!(prev.value, "b");
    assert_eq!(prev.offset, 2);
    assert_eq!(prev.count, 3);
}

#[test]
fn test_prev_ignores_page_size() {
    let cursor = Cursor::new("v", Direction::Asc, 10);
    let prev = prev(&cursor, &words(&["only"])).unwrap();
    assert_eq!(prev.value, "only");
    assert_eq!(prev.offset, 1);
}

#[test]
fn test_prev_updated_at_sample() {
    let cursor = Cursor::new("updated_at", Direction::Desc, 2);
    let prev = prev(&cursor, &comments()).unwrap();

    assert_eq!(prev.value, "5");
    assert_eq!(prev.offset, 2);
    assert_eq!(prev.direction, Direction::Asc);
}

// ============================================================================
// Purity Tests
// ============================================================================

#[test]
fn test_inputs_are_not_consumed() {
    let cursor = Cursor::new("v", Direction::Asc, 1);
    let items = words(&["a", "b"]);

    let first = cursor.next(&items, true);
    let second = cursor.next(&items, true);

    assert_eq!(first, second);
    assert_eq!(cursor, Cursor::new("v", Direction::Asc, 1));
    assert_eq!(items.len(), 2);
}

#[test]
fn test_method_forms_match_functions() {
    let cursor = Cursor::new("v", Direction::Desc, 2);
    let items = words(&["c", "b", "a"]);

    assert_eq!(cursor.next(&items, true), next(&cursor, &items, true));
    assert_eq!(cursor.prev(&items), prev(&cursor, &items));
}

// ============================================================================
// Helper Tests
// ============================================================================

#[test]
fn test_fetch_limit() {
    let cursor = Cursor::new("v", Direction::Asc, 20);
    assert_eq!(fetch_limit(&cursor, true), 21);
    assert_eq!(fetch_limit(&cursor, false), 20);
}

#[test]
fn test_page_items_strips_lookahead() {
    let cursor = Cursor::new("v", Direction::Asc, 2);
    let items = words(&["a", "b", "c"]);
    assert_eq!(page_items(&cursor, &items).len(), 2);

    let short = words(&["a"]);
    assert_eq!(page_items(&cursor, &short).len(), 1);
}

// ============================================================================
// ValueProvider Tests
// ============================================================================

#[test]
fn test_trait_objects_and_smart_pointers() {
    let cursor = Cursor::new("v", Direction::Asc, 1);

    let boxed: Vec<Box<dyn ValueProvider>> = vec![Box::new(Word("x")), Box::new(Word("y"))];
    assert_eq!(next(&cursor, &boxed, true).unwrap().value, "y");

    let shared: Vec<Arc<Word>> = vec![Arc::new(Word("x")), Arc::new(Word("y"))];
    assert_eq!(next(&cursor, &shared, true).unwrap().value, "y");

    let source = words(&["x", "y"]);
    let borrowed: Vec<&Word> = source.iter().collect();
    assert_eq!(next(&cursor, &borrowed, true).unwrap().value, "y");
}

#[test]
fn test_string_map_provider() {
    let mut row = StringMap::new();
    row.insert("id".to_string(), "42".to_string());

    assert_eq!(row.value_for("id"), "42");
    assert_eq!(row.value_for("other"), "");
}
