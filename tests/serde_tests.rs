#![cfg(feature = "serde")]

//! Integration tests for serde support of the collections.

use rstest::rstest;
use seqext::collections::{SortedDictionary, SortedList, SortedSet};
use seqext::comparer::{NaturalOrder, ReverseOrder};

// =============================================================================
// SortedSet
// =============================================================================

#[rstest]
fn test_set_serializes_in_order() {
    let set: SortedSet<i32> = [3, 1, 2].into_iter().collect();
    assert_eq!(serde_json::to_string(&set).unwrap(), "[1,2,3]");
}

#[rstest]
fn test_set_json_roundtrip_with_comparer() {
    let set: SortedSet<i32, ReverseOrder<NaturalOrder>> = [3, 1, 2, 3].into_iter().collect();
    let json = serde_json::to_string(&set).unwrap();
    assert_eq!(json, "[3,2,1]");
    let restored: SortedSet<i32, ReverseOrder<NaturalOrder>> = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, set);
}

#[rstest]
fn test_set_deserialize_merges_duplicates() {
    let set: SortedSet<u8> = serde_json::from_str("[5,1,5,3]").unwrap();
    assert_eq!(set.into_iter().collect::<Vec<_>>(), vec![1, 3, 5]);
}

// =============================================================================
// SortedDictionary / SortedList
// =============================================================================

#[rstest]
fn test_dictionary_json_roundtrip() {
    let mut dictionary = SortedDictionary::new();
    for (key, value) in [("b", 2), ("a", 1), ("c", 3)] {
        assert!(dictionary.try_insert(key.to_owned(), value).is_ok());
    }
    let json = serde_json::to_string(&dictionary).unwrap();
    assert_eq!(json, r#"{"a":1,"b":2,"c":3}"#);
    let restored: SortedDictionary<String, i32> = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, dictionary);
}

#[rstest]
fn test_list_json_roundtrip() {
    let mut list = SortedList::new();
    for (key, value) in [("y", true), ("x", false)] {
        assert!(list.try_insert(key.to_owned(), value).is_ok());
    }
    let json = serde_json::to_string(&list).unwrap();
    assert_eq!(json, r#"{"x":false,"y":true}"#);
    let restored: SortedList<String, bool> = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, list);
}

#[rstest]
#[case::dictionary(serde_json::from_str::<SortedDictionary<String, i32>>(r#"{"a":1,"a":2}"#).map(|_| ()))]
#[case::list(serde_json::from_str::<SortedList<String, i32>>(r#"{"a":1,"a":2}"#).map(|_| ()))]
fn test_duplicate_keys_are_rejected(#[case] result: Result<(), serde_json::Error>) {
    let error = result.unwrap_err();
    assert!(error.to_string().contains("duplicate key"));
}
