//! Prompt composition for recipe generation.
//!
//! Pure string assembly: a pantry snapshot plus preferences become a
//! (system, user) instruction pair. `today` is an explicit input so the
//! expiry annotations are reproducible in tests.

use chrono::NaiveDate;

use crate::types::{Diet, MaxTotalTime, PantryEntry, Preferences};

/// Maximum days-until-expiry that still gets an "expires in" annotation.
const EXPIRY_CALLOUT_DAYS: i64 = 7;

/// JSON shape the model must produce, embedded in the system instruction.
const RECIPE_SCHEMA_DESCRIPTION: &str = r#"{
  "title": "string (A creative and catchy title for the recipe.)",
  "description": "string (A short, appealing description of the dish.)",
  "prepTime": "string (Estimated preparation time, e.g., '15 minutes'.)",
  "cookTime": "string (Estimated cooking time, e.g., '30 minutes'.)",
  "totalTime": "string (The total combined prep and cook time, e.g., '45 minutes'.)",
  "ingredients": "string[] (A list of all necessary ingredients, including quantities.)",
  "instructions": "string[] (Step-by-step instructions for preparing the meal.)"
}"#;

/// A composed instruction pair, ready for the provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    pub system: String,
    pub user: String,
}

/// Compose the instruction pair for a generation request.
///
/// Deterministic for identical inputs. Callers must not invoke this with an
/// empty pantry; the generate flow enforces that precondition.
pub fn compose(entries: &[PantryEntry], prefs: &Preferences, today: NaiveDate) -> Prompt {
    let ingredients = entries
        .iter()
        .map(|entry| pantry_fragment(entry, today))
        .collect::<Vec<_>>()
        .join(", ");

    let user = format!(
        "You are an expert chef and nutritionist focused on minimizing food waste. \
         Create a delicious {meal} recipe using mainly these ingredients: {ingredients}.\
         {condiments}{diet}{time}{equipment}{craving} \
         Prioritize using ingredients that are expiring soon. \
         Be creative and ensure the recipe is easy to follow. \
         Provide a full list of ingredients with quantities, and clear, step-by-step instructions.\
         {language}",
        meal = prefs.meal_type.as_str(),
        ingredients = ingredients,
        condiments = condiments_clause(&prefs.condiments),
        diet = diet_clause(prefs.diet),
        time = time_clause(prefs.max_total_time),
        equipment = equipment_clause(&prefs.equipment),
        craving = craving_clause(&prefs.craving),
        language = language_clause(prefs),
    );

    let system = format!(
        "You are a helpful assistant that generates recipes. You must respond with a valid \
         JSON object that follows this structure: {RECIPE_SCHEMA_DESCRIPTION}. Do not include \
         any other text, explanations, or markdown formatting around the JSON object."
    );

    Prompt { system, user }
}

/// Render one pantry entry as "<quantity> of <name>", annotated with how
/// close to expiry it is. Dates carry no time-of-day, so the difference is
/// already a whole-day count.
fn pantry_fragment(entry: &PantryEntry, today: NaiveDate) -> String {
    let mut fragment = format!("{} of {}", entry.quantity, entry.name);

    if let Some(expiry) = entry.expiry_date {
        let days_left = (expiry - today).num_days();
        if days_left < 0 {
            fragment.push_str(&format!(" (expired {} day(s) ago)", -days_left));
        } else if days_left <= EXPIRY_CALLOUT_DAYS {
            fragment.push_str(&format!(" (expires in {} day(s))", days_left));
        }
    }

    fragment
}

fn diet_clause(diet: Diet) -> String {
    match diet {
        Diet::None => String::new(),
        Diet::MuscleBuilding => {
            " The recipe must be high in protein and suitable for muscle building.".to_string()
        }
        Diet::WeightLoss => {
            " The recipe must be low in calories and suitable for weight loss.".to_string()
        }
        Diet::LowGlycemic => {
            " The recipe must be low on the glycemic index, suitable for managing blood sugar levels."
                .to_string()
        }
        Diet::HeartHealthy => {
            " The recipe must be heart-healthy, meaning low in sodium and saturated fats."
                .to_string()
        }
        other => format!(" The recipe must be {}.", other.as_str()),
    }
}

fn time_clause(time: MaxTotalTime) -> &'static str {
    match time {
        MaxTotalTime::Any => "",
        MaxTotalTime::Under15Mins => {
            " The total cooking time (prep + cook) must be less than 15 minutes."
        }
        MaxTotalTime::Under30Mins => {
            " The total cooking time (prep + cook) must be less than 30 minutes."
        }
        MaxTotalTime::Under1Hour => {
            " The total cooking time (prep + cook) must be less than 1 hour."
        }
        MaxTotalTime::Over1Hour => {
            " This should be a recipe that takes more than 1 hour to prepare and cook, \
             for a more complex or slow-cooked meal."
        }
    }
}

fn equipment_clause(equipment: &[String]) -> String {
    if equipment.is_empty() {
        " Assume the user has a standard stovetop and basic kitchen utensils.".to_string()
    } else {
        format!(
            " The user has the following equipment available: {}. The recipe must only use these items.",
            equipment.join(", ")
        )
    }
}

fn condiments_clause(condiments: &[String]) -> String {
    if condiments.is_empty() {
        " Assume basic salt and pepper are available.".to_string()
    } else {
        format!(
            " The user also has the following condiments and spices available, \
             which can be used as needed: {}.",
            condiments.join(", ")
        )
    }
}

fn craving_clause(craving: &str) -> String {
    if craving.is_empty() {
        String::new()
    } else {
        format!(
            " The user is specifically craving something like \"{craving}\", \
             so try to incorporate that idea."
        )
    }
}

fn language_clause(prefs: &Preferences) -> &'static str {
    match prefs.language {
        crate::types::Language::En => "",
        crate::types::Language::Zh => " Please provide the entire recipe in Chinese (Simplified).",
    }
}
