//! Campaign API client methods

use super::{ClientError, NostosClient};
use crate::types::{
    Campaign, CampaignInput, CampaignListParams, CampaignStatistics, CampaignTestimonial,
    CampaignUpdate, CampaignUpdateInput, ListResponse, Page, TestimonialInput, with_query,
};

impl NostosClient {
    /// List campaigns matching `params`
    pub async fn list_campaigns(
        &self,
        params: &CampaignListParams,
    ) -> Result<Page<Campaign>, ClientError> {
        let response: ListResponse<Campaign> = self.get(&params.to_path()).await?;
        Ok(response.into_page())
    }

    pub async fn get_campaign(&self, id: u64) -> Result<Campaign, ClientError> {
        self.get(&format!("/campaigns/{id}/")).await
    }

    pub async fn create_campaign(&self, input: &CampaignInput) -> Result<Campaign, ClientError> {
        self.post("/campaigns/", input).await
    }

    pub async fn update_campaign(
        &self,
        id: u64,
        input: &CampaignInput,
    ) -> Result<Campaign, ClientError> {
        self.put(&format!("/campaigns/{id}/"), input).await
    }

    pub async fn delete_campaign(&self, id: u64) -> Result<(), ClientError> {
        self.delete(&format!("/campaigns/{id}/")).await
    }

    pub async fn campaign_statistics(&self) -> Result<CampaignStatistics, ClientError> {
        self.get("/campaigns/statistics/").await
    }

    /// Best-funded campaigns, at most `limit`
    pub async fn top_campaigns(&self, limit: u32) -> Result<Vec<Campaign>, ClientError> {
        self.get(&with_query("/campaigns/top/", [("limit", limit.to_string())]))
            .await
    }

    pub async fn campaign_updates(
        &self,
        campaign_id: u64,
    ) -> Result<Page<CampaignUpdate>, ClientError> {
        let response: ListResponse<CampaignUpdate> = self
            .get(&format!("/campaigns/{campaign_id}/updates/"))
            .await?;
        Ok(response.into_page())
    }

    pub async fn add_campaign_update(
        &self,
        campaign_id: u64,
        input: &CampaignUpdateInput,
    ) -> Result<CampaignUpdate, ClientError> {
        self.post(&format!("/campaigns/{campaign_id}/updates/"), input)
            .await
    }

    pub async fn campaign_testimonials(
        &self,
        campaign_id: u64,
    ) -> Result<Page<CampaignTestimonial>, ClientError> {
        let response: ListResponse<CampaignTestimonial> = self
            .get(&format!("/campaigns/{campaign_id}/testimonials/"))
            .await?;
        Ok(response.into_page())
    }

    pub async fn add_campaign_testimonial(
        &self,
        campaign_id: u64,
        input: &TestimonialInput,
    ) -> Result<CampaignTestimonial, ClientError> {
        self.post(&format!("/campaigns/{campaign_id}/testimonials/"), input)
            .await
    }
}
