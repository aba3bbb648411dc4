//! AI messaging and prediction API client methods

use super::{ClientError, NostosClient};
use crate::types::{
    DescriptionRequest, DescriptionResponse, FeedbackClassification, FeedbackRequest,
    LikelyDonors, RetentionPrediction, SentimentAnalysis, SuccessPrediction, TestimonialQuality,
    TestimonialRequest, TextRequest, ThankYouRequest, ThankYouResponse,
};

impl NostosClient {
    /// Draft a thank-you note for a donor
    pub async fn generate_thank_you(
        &self,
        request: &ThankYouRequest,
    ) -> Result<ThankYouResponse, ClientError> {
        self.post("/ai/generate-thank-you/", request).await
    }

    /// Draft a campaign description (admin only)
    pub async fn generate_description(
        &self,
        request: &DescriptionRequest,
    ) -> Result<DescriptionResponse, ClientError> {
        self.post("/ai/generate-description/", request).await
    }

    pub async fn analyze_sentiment(&self, text: &str) -> Result<SentimentAnalysis, ClientError> {
        self.post("/ai/analyze-sentiment/", &TextRequest { text })
            .await
    }

    pub async fn analyze_feedback(
        &self,
        feedback: &str,
    ) -> Result<FeedbackClassification, ClientError> {
        self.post("/ai/analyze-feedback/", &FeedbackRequest { feedback })
            .await
    }

    pub async fn analyze_testimonial(
        &self,
        testimonial: &str,
    ) -> Result<TestimonialQuality, ClientError> {
        self.post("/ai/analyze-testimonial/", &TestimonialRequest { testimonial })
            .await
    }

    /// Likelihood that the current donor gives again
    pub async fn predict_retention(&self) -> Result<RetentionPrediction, ClientError> {
        self.get("/ai/predict-retention/").await
    }

    pub async fn predict_success(&self, campaign_id: u64) -> Result<SuccessPrediction, ClientError> {
        self.get(&format!("/ai/predict-success/{campaign_id}/"))
            .await
    }

    /// Donors ranked by retention probability (admin only)
    pub async fn likely_donors(&self) -> Result<LikelyDonors, ClientError> {
        self.get("/ai/likely-donors/").await
    }
}
