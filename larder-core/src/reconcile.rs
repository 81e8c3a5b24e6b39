//! Pantry reconciliation after a recipe is cooked.
//!
//! Matching is deliberately coarse: a pantry entry is considered used when
//! its lowercased name appears anywhere inside a recipe ingredient string.
//! Recipe ingredients are free-form ("2 boneless chicken breasts, diced")
//! and pantry names are short labels ("chicken breasts"), so substring
//! containment handles the common case without any language parsing. An
//! entry named "oil" will match "sesame oil"; that imprecision is part of
//! the contract.

use std::collections::HashSet;

use uuid::Uuid;

use crate::types::PantryEntry;

/// Ids of the pantry entries a cooked recipe used.
///
/// For each used-ingredient string, the first entry (in pantry order) whose
/// name is contained in it is marked. Marking a set of ids keeps duplicate
/// mentions idempotent. Strings matching nothing are ignored; they refer to
/// staples the model assumed rather than tracked entries.
pub fn matched_ids(entries: &[PantryEntry], used_ingredients: &[String]) -> HashSet<Uuid> {
    let mut marked = HashSet::new();

    for used in used_ingredients {
        let used_lower = used.to_lowercase();
        let hit = entries
            .iter()
            .find(|entry| used_lower.contains(&entry.name.to_lowercase()));
        if let Some(entry) = hit {
            marked.insert(entry.id);
        }
    }

    marked
}

/// Remove the entries a cooked recipe used, preserving the order of the
/// rest. Cannot fail; empty inputs pass through unchanged.
pub fn consume(entries: &[PantryEntry], used_ingredients: &[String]) -> Vec<PantryEntry> {
    let marked = matched_ids(entries, used_ingredients);
    entries
        .iter()
        .filter(|entry| !marked.contains(&entry.id))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pantry() -> Vec<PantryEntry> {
        vec![
            PantryEntry::new("chicken breasts", "3", None),
            PantryEntry::new("rice", "1 cup", None),
        ]
    }

    #[test]
    fn substring_match_removes_used_entries() {
        let entries = pantry();
        let used = vec!["2 cups of rice".to_string(), "salt to taste".to_string()];

        let remaining = consume(&entries, &used);

        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].name, "chicken breasts");
        assert_eq!(remaining[0].id, entries[0].id);
    }

    #[test]
    fn match_is_case_insensitive() {
        let entries = pantry();
        let used = vec!["2 diced Chicken Breasts".to_string()];

        let remaining = consume(&entries, &used);
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].name, "rice");
    }

    #[test]
    fn duplicate_mentions_remove_entry_once() {
        let entries = pantry();
        let used = vec![
            "1 cup of rice".to_string(),
            "rice, rinsed well".to_string(),
        ];

        let marked = matched_ids(&entries, &used);
        assert_eq!(marked.len(), 1);

        let remaining = consume(&entries, &used);
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].name, "chicken breasts");
    }

    #[test]
    fn untracked_ingredients_are_ignored() {
        let entries = pantry();
        let used = vec!["2 tablespoons of soy sauce".to_string()];

        let remaining = consume(&entries, &used);
        assert_eq!(remaining.len(), 2);
    }

    #[test]
    fn first_matching_entry_wins_among_duplicates() {
        let entries = vec![
            PantryEntry::new("rice", "1 cup", None),
            PantryEntry::new("rice", "2 cups", None),
        ];
        let used = vec!["1 cup of rice".to_string()];

        let remaining = consume(&entries, &used);
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id, entries[1].id);
    }

    #[test]
    fn order_of_remaining_entries_is_preserved() {
        let entries = vec![
            PantryEntry::new("eggs", "6", None),
            PantryEntry::new("rice", "1 cup", None),
            PantryEntry::new("broccoli", "1 head", None),
        ];
        let used = vec!["1 cup of rice".to_string()];

        let remaining = consume(&entries, &used);
        assert_eq!(remaining[0].name, "eggs");
        assert_eq!(remaining[1].name, "broccoli");
    }

    #[test]
    fn empty_inputs_are_no_ops() {
        assert!(consume(&[], &["anything".to_string()]).is_empty());

        let entries = pantry();
        let remaining = consume(&entries, &[]);
        assert_eq!(remaining, entries);
    }
}
