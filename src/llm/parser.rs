//! Food input parsing
//!
//! Turns a free-text utterance ("1 big mac and 500ml coke") into structured
//! food items via a chat-completion call. The prompt carries the food/non-food
//! category rules, unit conversions, and worked examples; the reply must
//! contain exactly one JSON array.
//!
//! An empty array is a valid result: every mentioned item was judged
//! non-food. That is distinct from a malformed reply, which is an error.

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;

use super::client::LlmError;
use super::{extract, ChatModel, CompletionParams};

const SYSTEM_PROMPT: &str =
    "You are a food parsing assistant. Parse food inputs into structured JSON arrays.";

const PARAMS: CompletionParams = CompletionParams {
    temperature: 0.1,
    max_tokens: 500,
};

/// A candidate food item extracted from user input
///
/// Exactly one of `grams`/`quantity_items` is normally non-zero.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ParsedFood {
    pub food_name: String,
    #[serde(default)]
    pub grams: f64,
    #[serde(default)]
    pub quantity_items: f64,
}

/// Extracts structured food items from free-text input
pub struct FoodParser {
    model: Arc<dyn ChatModel>,
}

impl FoodParser {
    pub fn new(model: Arc<dyn ChatModel>) -> Self {
        Self { model }
    }

    /// Parse a non-empty utterance into food items
    ///
    /// The caller-side boundary rejects empty input before it reaches here.
    pub async fn parse(&self, text: &str) -> Result<Vec<ParsedFood>, ParseError> {
        let reply = self
            .model
            .complete(SYSTEM_PROMPT, &build_prompt(text), PARAMS)
            .await?;

        tracing::debug!(input = %text, reply = %reply, "Food parser model reply");

        let json = extract::json_array(&reply).ok_or_else(|| {
            ParseError::MalformedResponse("no JSON array found in response".to_string())
        })?;

        let foods: Vec<ParsedFood> = serde_json::from_str(json)
            .map_err(|e| ParseError::MalformedResponse(e.to_string()))?;

        Ok(sanitize(foods))
    }
}

/// Drop empty-named items and clamp bad quantities
///
/// One malformed element from the model should not discard valid siblings.
fn sanitize(foods: Vec<ParsedFood>) -> Vec<ParsedFood> {
    foods
        .into_iter()
        .filter_map(|mut food| {
            food.food_name = food.food_name.trim().to_string();
            if food.food_name.is_empty() {
                return None;
            }
            if !food.grams.is_finite() || food.grams < 0.0 {
                food.grams = 0.0;
            }
            if !food.quantity_items.is_finite() || food.quantity_items < 0.0 {
                food.quantity_items = 0.0;
            }
            Some(food)
        })
        .collect()
}

fn build_prompt(text: &str) -> String {
    format!(
        r#"Parse the following input and extract food items. Be permissive with food items but reject obvious non-food items.

Input: "{text}"

EXTRACT FOOD ITEMS:
- Fruits: banana, apple, orange, etc.
- Vegetables: carrot, broccoli, spinach, etc.
- Meats: chicken, beef, fish, etc.
- Grains: rice, bread, pasta, etc.
- Dairy: milk, cheese, yogurt, etc.
- Drinks: water, juice, coffee, etc.
- Snacks: chips, cookies, nuts, etc.
- Meals: pizza, burger, salad, etc.

IGNORE NON-FOOD ITEMS:
- Games: pokemon, mario, etc.
- Movies: star wars, etc.
- Books: harry potter, etc.
- People: john, mary, etc.
- Places: paris, new york, etc.
- Objects: car, phone, etc.
- Animals: dog, cat (unless it's food like "chicken")

Return a JSON array of food objects with this exact structure:
[
    {{
        "food_name": "clean food name",
        "grams": number,
        "quantity_items": number
    }}
]

Food parsing rules:
- Prefer grams for weight-based foods (meat, vegetables, liquids)
- Use quantity_items for discrete items (apples, sandwiches, slices)
- Convert all weights to grams (kg*1000, oz*28.35, lb*453.6)
- If both weight and count apply, use the more appropriate one
- Extract ALL food items mentioned in the input

Examples:
- "banana" -> [{{"food_name": "banana", "grams": 0, "quantity_items": 1}}]
- "2 apples" -> [{{"food_name": "apples", "grams": 0, "quantity_items": 2}}]
- "200g chicken breast" -> [{{"food_name": "chicken breast", "grams": 200, "quantity_items": 0}}]
- "pokemon" -> []
- "I played pokemon and ate 1 banana" -> [{{"food_name": "banana", "grams": 0, "quantity_items": 1}}]
- "1 big mac and 500ml coke" -> [{{"food_name": "big mac", "grams": 0, "quantity_items": 1}}, {{"food_name": "coke", "grams": 500, "quantity_items": 0}}]

Only return the JSON array, no other text."#
    )
}

/// Errors that can occur during food extraction
#[derive(Error, Debug)]
pub enum ParseError {
    /// The reply held no parseable JSON array
    #[error("Malformed model response: {0}")]
    MalformedResponse(String),

    /// The underlying model call failed (network/auth/timeout)
    #[error("Language-model service error: {0}")]
    ServiceUnavailable(#[from] LlmError),
}
