//! Field-default resolution.
//!
//! Each specialized section has one `resolve` function that turns a
//! [`ContentBlock`](crate::course::ContentBlock) into a serializable view
//! model, substituting the section's built-in copy for every field that is
//! absent, blank, or an empty list. Fields are resolved independently.

pub mod course_intro;
pub mod database_types;
pub mod entity_relationship;
pub mod generic;
pub mod hero;
pub mod introduction;
pub mod key_concepts;
pub mod legacy;
pub mod marketing_intro;
pub mod normalization;
pub mod product;
pub mod sql_basics;
pub mod transactions;

use crate::util::text::is_blank;

/// The value when present and non-blank, otherwise `default`.
pub fn text(value: Option<&str>, default: &str) -> String {
    opt_text(value).unwrap_or_else(|| default.to_string())
}

/// `Some` only for a present, non-blank value.
pub fn opt_text(value: Option<&str>) -> Option<String> {
    value.filter(|v| !is_blank(v)).map(str::to_string)
}

/// The list when present and non-empty, otherwise the default list.
pub fn list(value: Option<&[String]>, default: &[&str]) -> Vec<String> {
    match value {
        Some(items) if !items.is_empty() => items.to_vec(),
        _ => default.iter().map(|s| s.to_string()).collect(),
    }
}

/// The list when present, otherwise empty.
pub fn opt_list(value: Option<&[String]>) -> Vec<String> {
    value.map(<[String]>::to_vec).unwrap_or_default()
}

/// First non-blank value among the candidates, otherwise `default`.
pub fn first_text(candidates: &[Option<&str>], default: &str) -> String {
    candidates
        .iter()
        .find_map(|c| opt_text(*c))
        .unwrap_or_else(|| default.to_string())
}

/// Positional accessor that tolerates short or missing lists.
pub fn nth<T>(items: Option<&[T]>, index: usize) -> Option<&T> {
    items.and_then(|v| v.get(index))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_falls_back_on_missing_and_blank() {
        assert_eq!(text(None, "d"), "d");
        assert_eq!(text(Some(""), "d"), "d");
        assert_eq!(text(Some("  "), "d"), "d");
        assert_eq!(text(Some("v"), "d"), "v");
    }

    #[test]
    fn list_falls_back_on_empty() {
        let empty: Vec<String> = Vec::new();
        assert_eq!(list(Some(&empty), &["a"]), vec!["a".to_string()]);
        assert_eq!(list(None, &["a", "b"]).len(), 2);
        let given = vec!["x".to_string()];
        assert_eq!(list(Some(&given), &["a", "b"]), given);
    }

    #[test]
    fn first_text_skips_blank_candidates() {
        assert_eq!(first_text(&[None, Some(" "), Some("c")], "d"), "c");
        assert_eq!(first_text(&[None, Some("")], "d"), "d");
    }

    #[test]
    fn nth_tolerates_short_lists() {
        let items = vec![1, 2];
        assert_eq!(nth(Some(&items[..]), 1), Some(&2));
        assert_eq!(nth(Some(&items[..]), 2), None);
        assert_eq!(nth::<i32>(None, 0), None);
    }
}
