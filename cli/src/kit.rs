//! Equipment, condiment, and language subcommands.
//!
//! Equipment and condiments share the same shape: an unordered set of
//! labels toggled independently.

use anyhow::{bail, Result};
use clap::Subcommand;
use larder_core::{Language, Msg, Store};

#[derive(Subcommand)]
pub enum KitCommands {
    /// Add an item
    Add { item: String },
    /// Remove an item
    Remove { item: String },
    /// List items
    List,
}

#[derive(Debug, Clone, Copy)]
pub enum Kit {
    Equipment,
    Condiments,
}

impl Kit {
    fn heading(self) -> Msg {
        match self {
            Kit::Equipment => Msg::EquipmentHeading,
            Kit::Condiments => Msg::CondimentsHeading,
        }
    }

    fn load(self, store: &Store) -> Vec<String> {
        match self {
            Kit::Equipment => store.load_equipment(),
            Kit::Condiments => store.load_condiments(),
        }
    }

    fn save(self, store: &Store, items: &[String]) {
        let result = match self {
            Kit::Equipment => store.save_equipment(items),
            Kit::Condiments => store.save_condiments(items),
        };
        if let Err(e) = result {
            tracing::warn!(kit = ?self, error = %e, "failed to save");
        }
    }
}

pub fn run(store: &Store, kit: Kit, command: KitCommands) -> Result<()> {
    match command {
        KitCommands::Add { item } => {
            let item = item.trim().to_string();
            if item.is_empty() {
                bail!("item must not be empty");
            }
            let mut items = kit.load(store);
            if items.iter().any(|i| i.eq_ignore_ascii_case(&item)) {
                println!("{item} is already listed");
                return Ok(());
            }
            println!("Added {item}");
            items.push(item);
            kit.save(store, &items);
        }
        KitCommands::Remove { item } => {
            let mut items = kit.load(store);
            let before = items.len();
            items.retain(|i| !i.eq_ignore_ascii_case(&item));
            if items.len() == before {
                bail!("{item:?} is not listed");
            }
            println!("Removed {item}");
            kit.save(store, &items);
        }
        KitCommands::List => {
            let language = store.load_language();
            println!("{}", kit.heading().text(language));
            for item in kit.load(store) {
                println!("  {item}");
            }
        }
    }
    Ok(())
}

pub fn set_language(store: &Store, language: &str) -> Result<()> {
    let Some(language) = Language::from_str(language) else {
        bail!("unknown language {language:?}; expected \"en\" or \"zh\"");
    };
    if let Err(e) = store.save_language(language) {
        tracing::warn!(error = %e, "failed to save language");
    }
    println!("Language set to {}", language.as_str());
    Ok(())
}
