use serde::{Deserialize, Serialize};

use pantry_core::ItemId;

/// A pantry item as held by the backing store.
///
/// `name` is stored normalized (see [`normalize_name`]) and acts as the
/// natural key: at most one item per distinct normalized name exists at
/// any time. `id` is the store-assigned surrogate key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub quantity: u32,
}

/// Canonicalize a raw item name: trim surrounding whitespace, then
/// uppercase the first character. The rest of the string keeps its case
/// ("Capitalize" here is first-letter-only, not title case).
pub fn normalize_name(raw: &str) -> String {
    let trimmed = raw.trim();
    let mut chars = trimmed.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().chain(chars).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn normalize_trims_and_capitalizes_first_letter_only() {
        assert_eq!(normalize_name("  milk "), "Milk");
        assert_eq!(normalize_name("olive Oil"), "Olive Oil");
        // Rest of the string keeps its case; this is not title case.
        assert_eq!(normalize_name("fooBar"), "FooBar");
        assert_eq!(normalize_name("MILK"), "MILK");
        assert_eq!(normalize_name("   "), "");
        assert_eq!(normalize_name(""), "");
    }

    #[test]
    fn normalize_handles_non_ascii_first_char() {
        assert_eq!(normalize_name("éclair"), "Éclair");
    }

    proptest! {
        #[test]
        fn normalize_is_idempotent(s in ".*") {
            let once = normalize_name(&s);
            prop_assert_eq!(normalize_name(&once), once);
        }

        #[test]
        fn normalize_preserves_tail(s in "[a-zA-Z][a-zA-Z ]{0,30}") {
            let normalized = normalize_name(&s);
            let tail: String = s.trim().chars().skip(1).collect();
            prop_assert!(normalized.ends_with(&tail));
        }
    }
}
