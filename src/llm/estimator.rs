//! Nutrition estimation
//!
//! Asks the model for calorie/macro values scaled to the total logged
//! quantity. Estimation never fails outward: any call failure, malformed
//! reply, or invalid field degrades to all-zero nutrition so one bad
//! estimate never blocks a logged entry.

use std::sync::Arc;

use crate::foodlog::Nutrition;

use super::{extract, ChatModel, CompletionParams};

const SYSTEM_PROMPT: &str =
    "You are a nutrition assistant. Provide accurate nutrition data in JSON format.";

const PARAMS: CompletionParams = CompletionParams {
    temperature: 0.1,
    max_tokens: 200,
};

/// Grams assumed per discrete item when no weight was given
const GRAMS_PER_ITEM: f64 = 100.0;

/// Estimates nutrition for parsed food items
pub struct NutritionEstimator {
    model: Arc<dyn ChatModel>,
}

impl NutritionEstimator {
    pub fn new(model: Arc<dyn ChatModel>) -> Self {
        Self { model }
    }

    /// Estimate nutrition for the total specified quantity
    ///
    /// Always returns a value; the zero fallback covers every failure mode.
    pub async fn estimate(&self, food_name: &str, grams: f64, quantity_items: f64) -> Nutrition {
        let total_grams = if grams > 0.0 {
            grams
        } else {
            quantity_items * GRAMS_PER_ITEM
        };

        let reply = match self
            .model
            .complete(SYSTEM_PROMPT, &build_prompt(food_name, total_grams), PARAMS)
            .await
        {
            Ok(reply) => reply,
            Err(e) => {
                tracing::warn!(food = %food_name, error = %e, "Nutrition call failed, using zero fallback");
                return Nutrition::zero();
            }
        };

        match parse_reply(&reply) {
            Some(nutrition) => nutrition,
            None => {
                tracing::warn!(food = %food_name, reply = %reply, "Unusable nutrition reply, using zero fallback");
                Nutrition::zero()
            }
        }
    }
}

/// Extract and validate the nutrition object from a model reply
fn parse_reply(reply: &str) -> Option<Nutrition> {
    let json = extract::json_object(reply)?;
    let nutrition: Nutrition = serde_json::from_str(json).ok()?;
    nutrition.is_valid().then_some(nutrition)
}

fn build_prompt(food_name: &str, total_grams: f64) -> String {
    format!(
        r#"Provide nutrition data for this food item. Return ONLY a JSON object with these exact fields:

Food: {food_name}
Amount: {total_grams}g

Return this JSON structure:
{{
    "calories": number,
    "protein": number,
    "carbs": number,
    "fat": number,
    "fiber": number
}}

Values should be per {total_grams}g of {food_name}.
Only return the JSON object, no other text."#
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::client::LlmError;
    use crate::llm::testing::ScriptedModel;

    fn estimator_with_reply(reply: &str) -> NutritionEstimator {
        NutritionEstimator::new(Arc::new(ScriptedModel::always(reply)))
    }

    #[tokio::test]
    async fn test_valid_reply() {
        let estimator = estimator_with_reply(
            r#"{"calories": 330, "protein": 62, "carbs": 0, "fat": 7.2, "fiber": 0}"#,
        );

        let nutrition = estimator.estimate("chicken breast", 200.0, 0.0).await;
        assert_eq!(nutrition.calories, 330.0);
        assert_eq!(nutrition.protein, 62.0);
    }

    #[tokio::test]
    async fn test_reply_wrapped_in_prose() {
        let estimator = estimator_with_reply(
            "Here is the data: {\"calories\": 89, \"protein\": 1.1, \"carbs\": 23, \"fat\": 0.3, \"fiber\": 2.6} for one banana.",
        );

        let nutrition = estimator.estimate("banana", 0.0, 1.0).await;
        assert_eq!(nutrition.carbs, 23.0);
    }

    #[tokio::test]
    async fn test_malformed_reply_falls_back_to_zero() {
        let estimator = estimator_with_reply("I don't know that food.");
        let nutrition = estimator.estimate("mystery", 100.0, 0.0).await;
        assert_eq!(nutrition, Nutrition::zero());
    }

    #[tokio::test]
    async fn test_missing_field_falls_back_to_zero() {
        let estimator = estimator_with_reply(r#"{"calories": 100, "protein": 5}"#);
        let nutrition = estimator.estimate("rice", 100.0, 0.0).await;
        assert_eq!(nutrition, Nutrition::zero());
    }

    #[tokio::test]
    async fn test_negative_field_falls_back_to_zero() {
        let estimator = estimator_with_reply(
            r#"{"calories": 100, "protein": -5, "carbs": 0, "fat": 0, "fiber": 0}"#,
        );
        let nutrition = estimator.estimate("rice", 100.0, 0.0).await;
        assert_eq!(nutrition, Nutrition::zero());
    }

    #[tokio::test]
    async fn test_service_failure_falls_back_to_zero() {
        let estimator =
            NutritionEstimator::new(Arc::new(ScriptedModel::new(vec![Err(LlmError::Timeout)])));
        let nutrition = estimator.estimate("rice", 100.0, 0.0).await;
        assert_eq!(nutrition, Nutrition::zero());
    }

    #[test]
    fn test_prompt_scales_items_to_grams() {
        // 3 items at the 100g/item heuristic
        let prompt = build_prompt("apples", 300.0);
        assert!(prompt.contains("Amount: 300g"));
        assert!(prompt.contains("per 300g of apples"));
    }
}
