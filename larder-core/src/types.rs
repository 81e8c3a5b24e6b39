use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single tracked ingredient with quantity and optional expiry.
///
/// Entries are never edited in place: replace by remove + add. Names are
/// not required to be unique; the id is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PantryEntry {
    pub id: Uuid,
    pub name: String,
    pub quantity: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiry_date: Option<NaiveDate>,
}

impl PantryEntry {
    /// Create a new entry with a fresh id.
    pub fn new(
        name: impl Into<String>,
        quantity: impl Into<String>,
        expiry_date: Option<NaiveDate>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            quantity: quantity.into(),
            expiry_date,
        }
    }
}

/// Meal type selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MealType {
    Breakfast,
    Lunch,
    #[default]
    Dinner,
    Snack,
    Dessert,
    Appetizer,
    Soup,
    BakingCake,
    Cocktail,
    ColdDrink,
}

impl MealType {
    pub const ALL: &'static [MealType] = &[
        MealType::Breakfast,
        MealType::Lunch,
        MealType::Dinner,
        MealType::Snack,
        MealType::Dessert,
        MealType::Appetizer,
        MealType::Soup,
        MealType::BakingCake,
        MealType::Cocktail,
        MealType::ColdDrink,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MealType::Breakfast => "Breakfast",
            MealType::Lunch => "Lunch",
            MealType::Dinner => "Dinner",
            MealType::Snack => "Snack",
            MealType::Dessert => "Dessert",
            MealType::Appetizer => "Appetizer",
            MealType::Soup => "Soup",
            MealType::BakingCake => "Baking/Cake",
            MealType::Cocktail => "Cocktail",
            MealType::ColdDrink => "Cold Drink",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|m| m.as_str().eq_ignore_ascii_case(s.trim()))
    }
}

/// Dietary restriction selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Diet {
    #[default]
    None,
    Vegetarian,
    Vegan,
    GlutenFree,
    Keto,
    Paleo,
    MuscleBuilding,
    WeightLoss,
    LowGlycemic,
    HeartHealthy,
}

impl Diet {
    pub const ALL: &'static [Diet] = &[
        Diet::None,
        Diet::Vegetarian,
        Diet::Vegan,
        Diet::GlutenFree,
        Diet::Keto,
        Diet::Paleo,
        Diet::MuscleBuilding,
        Diet::WeightLoss,
        Diet::LowGlycemic,
        Diet::HeartHealthy,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Diet::None => "None",
            Diet::Vegetarian => "Vegetarian",
            Diet::Vegan => "Vegan",
            Diet::GlutenFree => "Gluten-Free",
            Diet::Keto => "Keto",
            Diet::Paleo => "Paleo",
            Diet::MuscleBuilding => "Muscle Building",
            Diet::WeightLoss => "Weight Loss",
            Diet::LowGlycemic => "Low Glycemic",
            Diet::HeartHealthy => "Heart-Healthy",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|d| d.as_str().eq_ignore_ascii_case(s.trim()))
    }
}

/// Upper bound on total (prep + cook) time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MaxTotalTime {
    #[default]
    Any,
    Under15Mins,
    Under30Mins,
    Under1Hour,
    Over1Hour,
}

impl MaxTotalTime {
    pub const ALL: &'static [MaxTotalTime] = &[
        MaxTotalTime::Any,
        MaxTotalTime::Under15Mins,
        MaxTotalTime::Under30Mins,
        MaxTotalTime::Under1Hour,
        MaxTotalTime::Over1Hour,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MaxTotalTime::Any => "Any",
            MaxTotalTime::Under15Mins => "< 15 mins",
            MaxTotalTime::Under30Mins => "< 30 mins",
            MaxTotalTime::Under1Hour => "< 1 hour",
            MaxTotalTime::Over1Hour => "> 1 hour",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|t| t.as_str().eq_ignore_ascii_case(s.trim()))
    }
}

/// Output language for generated text and user-facing labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Zh,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Zh => "zh",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" => Some(Language::En),
            "zh" => Some(Language::Zh),
            _ => None,
        }
    }
}

/// Everything the composer needs besides the pantry itself.
#[derive(Debug, Clone, Default)]
pub struct Preferences {
    pub meal_type: MealType,
    pub diet: Diet,
    pub max_total_time: MaxTotalTime,
    /// Free-text craving; empty means not specified.
    pub craving: String,
    pub equipment: Vec<String>,
    pub condiments: Vec<String>,
    pub language: Language,
}

/// A generated recipe, as returned by the provider.
///
/// All time fields are opaque display strings; nothing here is parsed
/// further. Valid only with non-empty title, ingredients and instructions
/// (enforced by the requester, see `generate`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub title: String,
    pub description: String,
    pub prep_time: String,
    pub cook_time: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_time: Option<String>,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
}
