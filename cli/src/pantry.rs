//! Pantry subcommands.

use anyhow::{bail, Result};
use chrono::NaiveDate;
use larder_core::{Msg, PantryEntry, Store};

pub fn add(store: &Store, name: &str, quantity: &str, expires: Option<&str>) -> Result<()> {
    let name = name.trim();
    let quantity = quantity.trim();
    if name.is_empty() || quantity.is_empty() {
        bail!("ingredient name and quantity must not be empty");
    }

    let expiry_date = match expires {
        Some(date) => Some(
            NaiveDate::parse_from_str(date, "%Y-%m-%d")
                .map_err(|e| anyhow::anyhow!("invalid expiry date {date:?}: {e}"))?,
        ),
        None => None,
    };

    let mut entries = store.load_pantry();
    let entry = PantryEntry::new(name, quantity, expiry_date);
    println!("Added {} of {} ({})", entry.quantity, entry.name, entry.id);
    entries.push(entry);
    save_pantry(store, &entries);

    Ok(())
}

pub fn list(store: &Store) {
    let language = store.load_language();
    let entries = store.load_pantry();

    println!("{}", Msg::PantryHeading.text(language));
    if entries.is_empty() {
        println!("{}", Msg::PantryEmpty.text(language));
        return;
    }

    for entry in &entries {
        let expiry = entry
            .expiry_date
            .map(|d| format!("  expires {d}"))
            .unwrap_or_default();
        println!("  {}  {} of {}{}", entry.id, entry.quantity, entry.name, expiry);
    }
}

pub fn remove(store: &Store, id_prefix: &str) -> Result<()> {
    let entries = store.load_pantry();

    let matches: Vec<&PantryEntry> = entries
        .iter()
        .filter(|e| e.id.to_string().starts_with(id_prefix))
        .collect();

    match matches.as_slice() {
        [] => bail!("no pantry entry with id starting with {id_prefix:?}"),
        [entry] => {
            let id = entry.id;
            println!("Removed {} of {}", entry.quantity, entry.name);
            let remaining: Vec<PantryEntry> =
                entries.iter().filter(|e| e.id != id).cloned().collect();
            save_pantry(store, &remaining);
            Ok(())
        }
        _ => bail!("id prefix {id_prefix:?} is ambiguous ({} matches)", matches.len()),
    }
}

/// Save, keeping the session going on failure; the in-memory state already
/// reflects the change.
pub fn save_pantry(store: &Store, entries: &[PantryEntry]) {
    if let Err(e) = store.save_pantry(entries) {
        tracing::warn!(error = %e, "failed to save pantry");
    }
}
