use crate::currency::format_usd;
use serde::{Deserialize, Deserializer, Serialize};

/// Body of a successful `POST /api/recommend` response.
///
/// Only `recommendations` is read; anything else the service echoes back is
/// ignored. An absent or `null` list counts as empty.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RecommendResponse {
    #[serde(default)]
    pub recommendations: Option<Vec<RecommendationItem>>,
}

impl RecommendResponse {
    pub fn into_items(self) -> Vec<RecommendationItem> {
        self.recommendations.unwrap_or_default()
    }
}

/// One scholarship match as returned by the service.
///
/// Every field falls back to its default when missing or `null` so partially
/// populated items still render.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RecommendationItem {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub provider: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(deserialize_with = "null_as_default")]
    pub eligible: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub match_score: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub award_amount: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub deadline: String,
    #[serde(deserialize_with = "null_as_default")]
    pub country: String,
    #[serde(deserialize_with = "null_as_default")]
    pub field: String,
    #[serde(deserialize_with = "null_as_default")]
    pub min_gpa: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub reasons: Vec<String>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Renders like a JS number; `-0` prints as `0`.
fn plain_number(value: f64) -> String {
    let normalized = if value == 0.0 { 0.0 } else { value };
    normalized.to_string()
}

impl RecommendationItem {
    pub fn eligibility_label(&self) -> &'static str {
        if self.eligible { "Eligible" } else { "Not eligible" }
    }

    pub fn match_score_label(&self) -> String {
        format!("{}%", plain_number(self.match_score))
    }

    pub fn award_label(&self) -> String {
        format_usd(self.award_amount)
    }

    pub fn min_gpa_label(&self) -> String {
        plain_number(self.min_gpa)
    }

    /// Comma-joined reasons, or `None` when there are none to show.
    pub fn eligibility_notes(&self) -> Option<String> {
        if self.reasons.is_empty() {
            None
        } else {
            Some(self.reasons.join(", "))
        }
    }
}
