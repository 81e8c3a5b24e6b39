//! Recipe generation: request, parse, and shape-validate.
//!
//! One outbound call per invocation, no retries. A failed generation never
//! mutates any persisted state; callers only act on a returned `Recipe`.

use chrono::NaiveDate;
use serde::Deserialize;

use crate::error::GenerateError;
use crate::llm::LlmProvider;
use crate::prompt::{compose, Prompt};
use crate::types::{PantryEntry, Preferences, Recipe};

/// Wire shape of the provider's recipe JSON. Everything is optional here;
/// the required-field rules live in `validate`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RecipeWire {
    #[serde(default)]
    title: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    prep_time: String,
    #[serde(default)]
    cook_time: String,
    #[serde(default)]
    total_time: Option<String>,
    #[serde(default)]
    ingredients: Vec<String>,
    #[serde(default)]
    instructions: Vec<String>,
}

impl RecipeWire {
    /// Enforce the validity contract: title, ingredients and instructions
    /// must all be present and non-empty. Other fields stay opaque.
    fn validate(self) -> Result<Recipe, GenerateError> {
        if self.title.trim().is_empty() {
            return Err(GenerateError::InvalidShape("missing title".to_string()));
        }
        if self.ingredients.is_empty() {
            return Err(GenerateError::InvalidShape(
                "missing ingredients".to_string(),
            ));
        }
        if self.instructions.is_empty() {
            return Err(GenerateError::InvalidShape(
                "missing instructions".to_string(),
            ));
        }

        Ok(Recipe {
            title: self.title,
            description: self.description,
            prep_time: self.prep_time,
            cook_time: self.cook_time,
            total_time: self.total_time,
            ingredients: self.ingredients,
            instructions: self.instructions,
        })
    }
}

/// Generate a recipe from the current pantry and preferences.
///
/// Errors with [`GenerateError::EmptyPantry`] before composing or touching
/// the network when there is nothing in the pantry.
pub async fn generate(
    entries: &[PantryEntry],
    prefs: &Preferences,
    provider: &dyn LlmProvider,
    today: NaiveDate,
) -> Result<Recipe, GenerateError> {
    if entries.is_empty() {
        return Err(GenerateError::EmptyPantry);
    }

    let prompt = compose(entries, prefs, today);
    request_recipe(provider, &prompt).await
}

/// Send a composed prompt to the provider and validate the response.
pub async fn request_recipe(
    provider: &dyn LlmProvider,
    prompt: &Prompt,
) -> Result<Recipe, GenerateError> {
    let content = provider.complete(&prompt.system, &prompt.user).await?;

    let text = strip_code_fence(content.trim());

    // Parse first so an unparseable body and a parseable-but-wrong body
    // fail differently.
    let value: serde_json::Value = serde_json::from_str(text)
        .map_err(|e| GenerateError::MalformedResponse(e.to_string()))?;

    let wire: RecipeWire = serde_json::from_value(value)
        .map_err(|e| GenerateError::InvalidShape(e.to_string()))?;

    let recipe = wire.validate()?;

    tracing::debug!(
        provider = provider.provider_name(),
        model = provider.model_name(),
        title = %recipe.title,
        "generated recipe"
    );

    Ok(recipe)
}

/// Strip a surrounding markdown code fence, if the model added one despite
/// instructions. Leaves anything else untouched.
fn strip_code_fence(text: &str) -> &str {
    let Some(rest) = text.strip_prefix("```") else {
        return text;
    };
    let Some(body) = rest.strip_suffix("```") else {
        return text;
    };
    // Drop the optional language tag on the opening fence line
    match body.split_once('\n') {
        Some((first_line, remainder)) if first_line.trim().chars().all(char::is_alphanumeric) => {
            remainder.trim()
        }
        _ => body.trim(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_code_fence_handles_tagged_fence() {
        let fenced = "```json\n{\"title\": \"x\"}\n```";
        assert_eq!(strip_code_fence(fenced), "{\"title\": \"x\"}");
    }

    #[test]
    fn strip_code_fence_handles_bare_fence() {
        let fenced = "```\n{\"a\": 1}\n```";
        assert_eq!(strip_code_fence(fenced), "{\"a\": 1}");
    }

    #[test]
    fn strip_code_fence_leaves_plain_json_alone() {
        let plain = "{\"title\": \"x\"}";
        assert_eq!(strip_code_fence(plain), plain);
    }

    #[test]
    fn validate_rejects_empty_ingredient_list() {
        let wire = RecipeWire {
            title: "Toast".to_string(),
            description: String::new(),
            prep_time: String::new(),
            cook_time: String::new(),
            total_time: None,
            ingredients: vec![],
            instructions: vec!["Toast the bread.".to_string()],
        };
        assert!(matches!(
            wire.validate(),
            Err(GenerateError::InvalidShape(_))
        ));
    }

    #[test]
    fn validate_rejects_blank_title() {
        let wire = RecipeWire {
            title: "   ".to_string(),
            description: String::new(),
            prep_time: String::new(),
            cook_time: String::new(),
            total_time: None,
            ingredients: vec!["bread".to_string()],
            instructions: vec!["Toast it.".to_string()],
        };
        assert!(matches!(
            wire.validate(),
            Err(GenerateError::InvalidShape(_))
        ));
    }
}
