//! Generate, cook, and show subcommands.

use anyhow::{bail, Result};
use chrono::Local;
use larder_core::llm::provider_from_env;
use larder_core::{
    reconcile, Diet, Language, MaxTotalTime, MealType, Msg, Preferences, Recipe, Store,
};

/// Run the full generation flow: precondition check, compose, request,
/// render, and stash the result as the pending recipe.
pub async fn generate(
    store: &Store,
    meal_type: &str,
    diet: &str,
    max_time: &str,
    craving: String,
) -> Result<()> {
    let language = store.load_language();
    let entries = store.load_pantry();

    // Blocking precondition: no network call with an empty pantry
    if entries.is_empty() {
        println!("{}", Msg::PantryEmptyError.text(language));
        return Ok(());
    }

    let prefs = Preferences {
        meal_type: parse_enum(meal_type, MealType::from_str, MealType::ALL.iter().map(|m| m.as_str()))?,
        diet: parse_enum(diet, Diet::from_str, Diet::ALL.iter().map(|d| d.as_str()))?,
        max_total_time: parse_enum(
            max_time,
            MaxTotalTime::from_str,
            MaxTotalTime::ALL.iter().map(|t| t.as_str()),
        )?,
        craving: craving.trim().to_string(),
        equipment: store.load_equipment(),
        condiments: store.load_condiments(),
        language,
    };

    let provider = provider_from_env()?;
    let today = Local::now().date_naive();

    match larder_core::generate(&entries, &prefs, provider.as_ref(), today).await {
        Ok(recipe) => {
            render(&recipe, language);
            if let Err(e) = store.save_pending_recipe(&recipe) {
                tracing::warn!(error = %e, "failed to save pending recipe");
            }
        }
        Err(e) => {
            // Details go to the log; the user gets the localized message
            tracing::error!(error = %e, "recipe generation failed");
            println!("{}", Msg::RecipeError.text(language));
        }
    }

    Ok(())
}

/// Consume the pending recipe: remove matched pantry entries and clear it.
pub fn cook(store: &Store) {
    let language = store.load_language();

    let Some(recipe) = store.load_pending_recipe() else {
        println!("{}", Msg::NoPendingRecipe.text(language));
        return;
    };

    let entries = store.load_pantry();
    let marked = reconcile::matched_ids(&entries, &recipe.ingredients);

    if marked.is_empty() {
        println!("{}", Msg::NothingConsumed.text(language));
    } else {
        println!("{}", Msg::CookConfirmed.text(language));
        for entry in entries.iter().filter(|e| marked.contains(&e.id)) {
            println!("  {} of {}", entry.quantity, entry.name);
        }
    }

    let remaining = reconcile::consume(&entries, &recipe.ingredients);
    crate::pantry::save_pantry(store, &remaining);

    if let Err(e) = store.clear_pending_recipe() {
        tracing::warn!(error = %e, "failed to clear pending recipe");
    }
}

pub fn show(store: &Store) {
    let language = store.load_language();
    match store.load_pending_recipe() {
        Some(recipe) => render(&recipe, language),
        None => println!("{}", Msg::NoPendingRecipe.text(language)),
    }
}

fn render(recipe: &Recipe, language: Language) {
    println!("\n{}", recipe.title);
    if !recipe.description.is_empty() {
        println!("{}", recipe.description);
    }
    println!();

    println!(
        "{}: {}   {}: {}",
        Msg::PrepTime.text(language),
        recipe.prep_time,
        Msg::CookTime.text(language),
        recipe.cook_time,
    );
    if let Some(total) = &recipe.total_time {
        println!("{}: {}", Msg::TotalTime.text(language), total);
    }

    println!("\n{}:", Msg::Ingredients.text(language));
    for ingredient in &recipe.ingredients {
        println!("  - {ingredient}");
    }

    println!("\n{}:", Msg::Instructions.text(language));
    for (i, step) in recipe.instructions.iter().enumerate() {
        println!("  {}. {}", i + 1, step);
    }
    println!();
}

fn parse_enum<T>(
    input: &str,
    parse: impl Fn(&str) -> Option<T>,
    legal: impl Iterator<Item = &'static str>,
) -> Result<T> {
    match parse(input) {
        Some(value) => Ok(value),
        None => {
            let options: Vec<&str> = legal.collect();
            bail!("unknown value {input:?}; expected one of: {}", options.join(", "))
        }
    }
}
