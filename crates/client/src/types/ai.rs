//! AI-assisted messaging and prediction records

use serde::{Deserialize, Serialize};
use serde_json::Value;
use serde_with::serde_as;

use super::Amount;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    #[default]
    Formal,
    Friendly,
    Casual,
}

#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ThankYouRequest {
    pub donor_name: String,
    pub campaign_title: String,
    #[serde_as(as = "Amount")]
    pub amount: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tone: Option<Tone>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ThankYouResponse {
    pub message: String,
    #[serde(default)]
    pub tone: Option<Tone>,
}

#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DescriptionRequest {
    pub title: String,
    pub category: String,
    #[serde_as(as = "Amount")]
    pub goal: f64,
    pub brief_description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DescriptionResponse {
    pub description: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    #[default]
    Neutral,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SentimentScores {
    pub vader_positive: f64,
    pub vader_negative: f64,
    pub vader_neutral: f64,
    pub vader_compound: f64,
    pub textblob_polarity: f64,
    pub textblob_subjectivity: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SentimentAnalysis {
    pub sentiment: Sentiment,
    /// `high`, `medium` or `low`
    pub confidence: String,
    pub scores: SentimentScores,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedbackClassification {
    pub sentiment: Sentiment,
    pub confidence: String,
    pub categories: Vec<String>,
    pub scores: Value,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TestimonialQuality {
    pub quality_score: f64,
    pub word_count: u64,
    pub sentiment: Sentiment,
    pub suggestions: Vec<String>,
}

#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DonorStatistics {
    pub total_donations: u64,
    #[serde_as(as = "Amount")]
    pub total_amount: f64,
    #[serde_as(as = "Amount")]
    pub avg_donation: f64,
    pub days_since_last_donation: i64,
    pub campaigns_supported: u64,
    pub account_age_days: i64,
}

/// Retention prediction for the current donor. `statistics` is absent when
/// the donor has no history yet.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RetentionPrediction {
    pub retention_probability: f64,
    pub statistics: Option<DonorStatistics>,
    pub recommendation: String,
    pub message: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SuccessPrediction {
    pub campaign_id: u64,
    pub success_probability: f64,
    pub current_progress: f64,
    pub days_remaining: i64,
    pub suggestions: Vec<String>,
}

#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LikelyDonor {
    pub donor_id: u64,
    pub donor_name: String,
    pub donor_email: String,
    pub retention_probability: f64,
    pub total_donations: u64,
    #[serde_as(as = "Amount")]
    pub total_amount: f64,
    pub days_since_last_donation: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LikelyDonors {
    pub count: u64,
    pub donors: Vec<LikelyDonor>,
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct TextRequest<'a> {
    pub text: &'a str,
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct FeedbackRequest<'a> {
    pub feedback: &'a str,
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct TestimonialRequest<'a> {
    pub testimonial: &'a str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retention_without_history() {
        let prediction: RetentionPrediction = serde_json::from_str(
            r#"{
                "retention_probability": 0.5,
                "message": "Not enough data for accurate prediction",
                "recommendation": "Make your first donation to start building your impact profile!"
            }"#,
        )
        .unwrap();
        assert_eq!(prediction.retention_probability, 0.5);
        assert!(prediction.statistics.is_none());
        assert!(prediction.message.is_some());
    }

    #[test]
    fn test_thank_you_request_without_tone() {
        let request = ThankYouRequest {
            donor_name: "Meera".into(),
            campaign_title: "Scholarships".into(),
            amount: 1000.0,
            tone: None,
        };
        let value = serde_json::to_value(&request).unwrap();
        assert!(value.get("tone").is_none());
        assert_eq!(value["donor_name"], "Meera");
    }
}
