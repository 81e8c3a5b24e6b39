//! End-to-end tests for the generate flow against the fake provider.

use chrono::NaiveDate;
use larder_core::llm::FakeProvider;
use larder_core::{generate, GenerateError, PantryEntry, Preferences};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 10).unwrap()
}

fn pantry() -> Vec<PantryEntry> {
    vec![
        PantryEntry::new("chicken breasts", "3", None),
        PantryEntry::new("rice", "1 cup", None),
    ]
}

#[tokio::test]
async fn valid_response_becomes_a_recipe() {
    let provider = FakeProvider::with_canned_recipe();

    let recipe = generate(&pantry(), &Preferences::default(), &provider, today())
        .await
        .unwrap();

    assert_eq!(recipe.title, "Fried Rice with Chicken");
    assert_eq!(recipe.ingredients.len(), 3);
    assert_eq!(recipe.instructions.len(), 3);
    assert_eq!(recipe.total_time.as_deref(), Some("25 minutes"));
}

#[tokio::test]
async fn fenced_response_is_still_parsed() {
    let provider = FakeProvider::new().with_default_response(
        "```json\n{\"title\": \"Plain Rice\", \"description\": \"\", \"prepTime\": \"5 minutes\", \
         \"cookTime\": \"15 minutes\", \"ingredients\": [\"1 cup of rice\"], \
         \"instructions\": [\"Boil the rice.\"]}\n```",
    );

    let recipe = generate(&pantry(), &Preferences::default(), &provider, today())
        .await
        .unwrap();
    assert_eq!(recipe.title, "Plain Rice");
    assert!(recipe.total_time.is_none());
}

#[tokio::test]
async fn partial_payload_is_an_invalid_shape() {
    let provider = FakeProvider::new().with_default_response("{\"title\": \"X\"}");

    let err = generate(&pantry(), &Preferences::default(), &provider, today())
        .await
        .unwrap_err();
    assert!(matches!(err, GenerateError::InvalidShape(_)));
}

#[tokio::test]
async fn non_json_body_is_malformed() {
    let provider =
        FakeProvider::new().with_default_response("Here is a lovely recipe for you: rice!");

    let err = generate(&pantry(), &Preferences::default(), &provider, today())
        .await
        .unwrap_err();
    assert!(matches!(err, GenerateError::MalformedResponse(_)));
}

#[tokio::test]
async fn wrongly_typed_fields_are_an_invalid_shape() {
    let provider = FakeProvider::new().with_default_response(
        "{\"title\": \"X\", \"ingredients\": \"rice\", \"instructions\": [\"Boil.\"]}",
    );

    let err = generate(&pantry(), &Preferences::default(), &provider, today())
        .await
        .unwrap_err();
    assert!(matches!(err, GenerateError::InvalidShape(_)));
}

#[tokio::test]
async fn empty_pantry_never_reaches_the_provider() {
    // A FakeProvider with no responses errors on any call, so reaching it
    // would surface GenerateError::Provider instead of EmptyPantry.
    let provider = FakeProvider::new();

    let err = generate(&[], &Preferences::default(), &provider, today())
        .await
        .unwrap_err();
    assert!(matches!(err, GenerateError::EmptyPantry));
}

#[tokio::test]
async fn provider_failure_is_propagated() {
    let provider = FakeProvider::new();

    let err = generate(&pantry(), &Preferences::default(), &provider, today())
        .await
        .unwrap_err();
    assert!(matches!(err, GenerateError::Provider(_)));
}

#[tokio::test]
async fn pantry_contents_flow_into_the_prompt() {
    // Keyed on a pantry name: proves the composed user prompt carries the
    // pantry snapshot to the provider.
    let provider = FakeProvider::with_response(
        "chicken breasts",
        "{\"title\": \"Chicken Dinner\", \"description\": \"\", \"prepTime\": \"\", \
         \"cookTime\": \"\", \"ingredients\": [\"chicken\"], \"instructions\": [\"Cook.\"]}",
    );

    let recipe = generate(&pantry(), &Preferences::default(), &provider, today())
        .await
        .unwrap();
    assert_eq!(recipe.title, "Chicken Dinner");
}
