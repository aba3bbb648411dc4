//! Analytics API client methods

use super::{ClientError, NostosClient};
use crate::types::{
    CampaignPerformance, CategoryBreakdown, DashboardStatistics, DonationTrends, DonorAnalytics,
    ExportReport, SentimentReport, TrendPeriod, with_query,
};

impl NostosClient {
    pub async fn dashboard(&self) -> Result<DashboardStatistics, ClientError> {
        self.get("/analytics/dashboard/").await
    }

    /// Donation totals bucketed by `period` over the last `months` months
    pub async fn donation_trends(
        &self,
        period: TrendPeriod,
        months: u32,
    ) -> Result<DonationTrends, ClientError> {
        self.get(&with_query(
            "/analytics/donation-trends/",
            [
                ("period", period.as_str().to_string()),
                ("months", months.to_string()),
            ],
        ))
        .await
    }

    pub async fn campaign_performance(&self) -> Result<Vec<CampaignPerformance>, ClientError> {
        self.get("/analytics/campaign-performance/").await
    }

    pub async fn donor_analytics(&self) -> Result<DonorAnalytics, ClientError> {
        self.get("/analytics/donor-analytics/").await
    }

    pub async fn sentiment_report(&self) -> Result<SentimentReport, ClientError> {
        self.get("/analytics/sentiment-report/").await
    }

    pub async fn category_breakdown(&self) -> Result<Vec<CategoryBreakdown>, ClientError> {
        self.get("/analytics/category-breakdown/").await
    }

    /// Export a report of the given kind, e.g. `summary`
    pub async fn export_report(&self, kind: &str) -> Result<ExportReport, ClientError> {
        self.get(&with_query(
            "/analytics/export-report/",
            [("type", kind.to_string())],
        ))
        .await
    }
}
