pub mod error;
pub mod generate;
pub mod llm;
pub mod messages;
pub mod prompt;
pub mod reconcile;
pub mod store;
pub mod types;

pub use error::{GenerateError, StoreError};
pub use generate::{generate, request_recipe};
pub use messages::Msg;
pub use prompt::{compose, Prompt};
pub use reconcile::{consume, matched_ids};
pub use store::Store;
pub use types::{
    Diet, Language, MaxTotalTime, MealType, PantryEntry, Preferences, Recipe,
};
