//! Prompt templates for the stylist agent.

use shapefit_body::BodyShape;

/// Outfit categories requested from the model, in prompt order
pub const RECOMMENDATION_CATEGORIES: [&str; 4] = ["casual", "formal", "workwear", "accessories"];

/// Items requested per category
pub const ITEMS_PER_CATEGORY: usize = 3;

/// Build the outfit recommendation prompt for a body shape and gender
pub fn format_recommendation_prompt(gender: &str, shape: &BodyShape) -> String {
    format!(
        r#"
Based on the following details:
Gender: {}
Type: {}
Description: {}
Features: {}

Give me outfit recommendations for the categories: {}.
Each category should include {} items with:
- name
- description
- image (valid URL)
- tags
- reasonText

Format as:
{{
  "casual": [...],
  "formal": [...],
  "workwear": [...],
  "accessories": [...]
}}
"#,
        gender,
        shape.name(),
        shape.description(),
        shape.features().join(", "),
        RECOMMENDATION_CATEGORIES.join(", "),
        ITEMS_PER_CATEGORY
    )
}

/// Slice from the first `{` to the last `}` inclusive.
///
/// Models often wrap JSON in prose or code fences; this strips both.
pub fn extract_json_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;

    if end < start {
        None
    } else {
        Some(&text[start..=end])
    }
}
