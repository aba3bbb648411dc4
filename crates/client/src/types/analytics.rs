//! Aggregate analytics records

use serde::{Deserialize, Serialize};
use serde_with::serde_as;
use std::fmt;

use super::{Amount, Sentiment};

#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DonationTotals {
    #[serde_as(as = "Amount")]
    pub total_amount: f64,
    pub total_count: u64,
    #[serde_as(as = "Amount")]
    pub recent_amount: f64,
    pub recent_count: u64,
}

#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CampaignTotals {
    pub total: u64,
    pub active: u64,
    pub completed: u64,
    #[serde_as(as = "Amount")]
    pub total_goal: f64,
    #[serde_as(as = "Amount")]
    pub total_raised: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlumniTotals {
    pub total_count: u64,
    pub active_donors: u64,
}

#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TopCampaign {
    pub id: u64,
    pub title: String,
    #[serde_as(as = "Amount")]
    pub raised: f64,
}

/// Admin dashboard summary
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardStatistics {
    pub donations: DonationTotals,
    pub campaigns: CampaignTotals,
    pub alumni: AlumniTotals,
    pub top_campaign: Option<TopCampaign>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendPeriod {
    Day,
    Week,
    #[default]
    Month,
}

impl TrendPeriod {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Day => "day",
            Self::Week => "week",
            Self::Month => "month",
        }
    }
}

impl fmt::Display for TrendPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DonationTrend {
    pub period: String,
    #[serde_as(as = "Amount")]
    pub total_amount: f64,
    pub donation_count: u64,
    #[serde_as(as = "Amount")]
    pub avg_amount: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DonationTrends {
    pub period: TrendPeriod,
    pub data: Vec<DonationTrend>,
}

#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CampaignPerformance {
    pub campaign_id: u64,
    pub title: String,
    pub category: String,
    pub status: String,
    #[serde_as(as = "Amount")]
    pub goal: f64,
    #[serde_as(as = "Amount")]
    pub raised: f64,
    #[serde_as(as = "Amount")]
    pub progress_percentage: f64,
    pub donor_count: u64,
    #[serde_as(as = "Amount")]
    pub avg_donation: f64,
    pub days_active: i64,
    pub daily_donation_rate: f64,
    pub update_count: u64,
    pub testimonial_count: u64,
}

#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DonorSummary {
    pub donor_id: u64,
    pub donor_name: String,
    #[serde_as(as = "Amount")]
    pub total_donated: f64,
    pub donation_count: u64,
    #[serde_as(as = "Amount")]
    pub avg_donation: f64,
    pub campaigns_supported: u64,
    pub days_since_last_donation: i64,
    pub is_active: bool,
    pub is_regular: bool,
    pub is_high_value: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DonorAnalytics {
    pub total_donors: u64,
    pub active_donors: u64,
    pub regular_donors: u64,
    pub high_value_donors: u64,
    pub top_donors: Vec<DonorSummary>,
    pub all_donors: Vec<DonorSummary>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SentimentDistribution {
    pub positive: u64,
    pub neutral: u64,
    pub negative: u64,
    pub positive_percentage: f64,
    pub neutral_percentage: f64,
    pub negative_percentage: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TestimonialSentiment {
    pub campaign_id: u64,
    pub campaign_title: String,
    pub donor_name: String,
    pub rating: u8,
    pub sentiment: Sentiment,
    pub message_length: u64,
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SentimentReport {
    pub total_testimonials: u64,
    pub sentiment_distribution: SentimentDistribution,
    pub testimonials: Vec<TestimonialSentiment>,
}

#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CategoryBreakdown {
    pub category: String,
    pub campaign_count: u64,
    #[serde_as(as = "Amount")]
    pub total_goal: f64,
    #[serde_as(as = "Amount")]
    pub total_raised: f64,
    pub donation_count: u64,
    #[serde_as(as = "Amount")]
    pub avg_progress: f64,
}

#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportSummary {
    #[serde_as(as = "Amount")]
    pub total_donations_amount: f64,
    pub total_donation_count: u64,
    pub total_campaigns: u64,
    pub active_campaigns: u64,
    pub total_alumni: u64,
    pub active_donors: u64,
}

#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportCampaign {
    pub title: String,
    pub category: String,
    #[serde_as(as = "Amount")]
    pub goal: f64,
    #[serde_as(as = "Amount")]
    pub raised: f64,
    #[serde_as(as = "Amount")]
    pub progress: f64,
}

#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportDonor {
    pub name: String,
    #[serde_as(as = "Amount")]
    pub total_donated: f64,
    pub donation_count: u64,
}

/// Exported report; `report_type` echoes the requested kind
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportReport {
    pub generated_at: Option<String>,
    pub report_type: String,
    pub summary: ReportSummary,
    pub top_campaigns: Vec<ReportCampaign>,
    pub top_donors: Vec<ReportDonor>,
    pub category_breakdown: Vec<CategoryBreakdown>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dashboard_without_top_campaign() {
        let stats: DashboardStatistics = serde_json::from_str(
            r#"{
                "donations": {"total_amount": 1200.0, "total_count": 4, "recent_amount": 0, "recent_count": 0},
                "campaigns": {"total": 2, "active": 1, "completed": 1, "total_goal": "9000.00", "total_raised": 1200},
                "alumni": {"total_count": 30, "active_donors": 3}
            }"#,
        )
        .unwrap();
        assert_eq!(stats.campaigns.total_goal, 9000.0);
        assert_eq!(stats.alumni.active_donors, 3);
        assert!(stats.top_campaign.is_none());
    }

    #[test]
    fn test_trend_period_wire_format() {
        assert_eq!(TrendPeriod::Week.to_string(), "week");
        let trends: DonationTrends =
            serde_json::from_str(r#"{"period": "day", "data": []}"#).unwrap();
        assert_eq!(trends.period, TrendPeriod::Day);
    }
}
