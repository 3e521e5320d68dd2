// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Identifier normalization
//!
//! Table, column and index names are compared case-insensitively. Every
//! lookup key in this workspace is produced by [`normalize_identifier`];
//! nothing else lowercases names.

use std::borrow::Cow;

/// Fold an identifier to its lookup key (Unicode lowercase).
///
/// Borrows the input when it is already lowercase, so the common case of a
/// binder passing lowercase names does not allocate.
///
/// # Examples
///
/// ```rust
/// use std::borrow::Cow;
/// use sql_binder_metadata::normalize_identifier;
///
/// assert_eq!(normalize_identifier("Orders"), "orders");
/// assert!(matches!(normalize_identifier("orders"), Cow::Borrowed(_)));
/// ```
pub fn normalize_identifier(name: &str) -> Cow<'_, str> {
    if name.chars().all(is_lowercase_invariant) {
        Cow::Borrowed(name)
    } else {
        Cow::Owned(name.to_lowercase())
    }
}

fn is_lowercase_invariant(c: char) -> bool {
    let mut lower = c.to_lowercase();
    lower.next() == Some(c) && lower.next().is_none()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_ascii() {
        assert_eq!(normalize_identifier("USERS"), "users");
        assert_eq!(normalize_identifier("Order_Items"), "order_items");
        assert_eq!(normalize_identifier("t1"), "t1");
    }

    #[test]
    fn test_normalize_borrows_lowercase_input() {
        assert!(matches!(normalize_identifier("users"), Cow::Borrowed("users")));
        assert!(matches!(normalize_identifier(""), Cow::Borrowed("")));
        assert!(matches!(normalize_identifier("Users"), Cow::Owned(_)));
    }

    #[test]
    fn test_normalize_unicode() {
        assert_eq!(normalize_identifier("ÜBERSICHT"), "übersicht");
        assert_eq!(normalize_identifier("ΤΙΜΗ"), "τιμη");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        for name in ["Users", "ÄÖÜ", "mixed_Case_1", ""] {
            let once = normalize_identifier(name).into_owned();
            assert_eq!(normalize_identifier(&once), once);
        }
    }
}
