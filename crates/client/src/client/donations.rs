//! Donation API client methods

use super::{ClientError, NostosClient, RequestOptions};
use crate::types::{
    Donation, DonationCreate, DonationReceipt, DonationStatistics, HistoryPoint,
    LeaderboardEntry, ListResponse, Page, with_query,
};

impl NostosClient {
    /// Donations visible to the current user (all of them for admins)
    pub async fn list_donations(&self) -> Result<Page<Donation>, ClientError> {
        let response: ListResponse<Donation> = self.get("/donations/").await?;
        Ok(response.into_page())
    }

    pub async fn get_donation(&self, id: u64) -> Result<Donation, ClientError> {
        self.get(&format!("/donations/{id}/")).await
    }

    pub async fn create_donation(&self, donation: &DonationCreate) -> Result<Donation, ClientError> {
        self.post("/donations/create/", donation).await
    }

    pub async fn donation_statistics(&self) -> Result<DonationStatistics, ClientError> {
        self.get("/donations/statistics/").await
    }

    /// Monthly totals over the last `months` months
    pub async fn donation_history(&self, months: u32) -> Result<Vec<HistoryPoint>, ClientError> {
        self.get(&with_query(
            "/donations/history-chart/",
            [("months", months.to_string())],
        ))
        .await
    }

    /// Top named donors of a campaign
    pub async fn campaign_leaderboard(
        &self,
        campaign_id: u64,
        limit: u32,
    ) -> Result<Vec<LeaderboardEntry>, ClientError> {
        self.get(&with_query(
            &format!("/donations/campaign/{campaign_id}/leaderboard/"),
            [("limit", limit.to_string())],
        ))
        .await
    }

    pub async fn generate_receipt(&self, donation_id: u64) -> Result<DonationReceipt, ClientError> {
        self.request(
            &format!("/donations/{donation_id}/receipt/"),
            RequestOptions::post(),
        )
        .await
    }
}
