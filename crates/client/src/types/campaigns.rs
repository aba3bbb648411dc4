//! Campaign records

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_with::serde_as;
use std::fmt;

use super::{Amount, User, with_query};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CampaignStatus {
    #[default]
    Draft,
    Active,
    Completed,
}

impl CampaignStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Active => "active",
            Self::Completed => "completed",
        }
    }
}

impl fmt::Display for CampaignStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A fundraising campaign.
///
/// List endpoints return a reduced record, so everything beyond the id and
/// title is optional or defaulted.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Campaign {
    pub id: u64,
    pub title: String,
    pub description: Option<String>,
    pub category: String,
    #[serde_as(as = "Amount")]
    pub goal: f64,
    #[serde_as(as = "Amount")]
    pub raised: f64,
    pub deadline: Option<NaiveDate>,
    pub status: CampaignStatus,
    pub image: Option<String>,
    #[serde_as(as = "Amount")]
    pub progress_percentage: f64,
    pub donor_count: u64,
    pub created_by: Option<User>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Filters for the campaign listing. Unset fields are left out of the query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CampaignListParams {
    pub status: Option<CampaignStatus>,
    pub category: Option<String>,
    pub search: Option<String>,
    pub ordering: Option<String>,
    pub page: Option<u32>,
}

impl CampaignListParams {
    pub fn status(mut self, status: CampaignStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    /// Sort key, e.g. `-raised` or `deadline`
    pub fn ordering(mut self, ordering: impl Into<String>) -> Self {
        self.ordering = Some(ordering.into());
        self
    }

    pub fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let text = |name, value: &Option<String>| {
            value
                .as_deref()
                .filter(|v| !v.is_empty())
                .map(|v| (name, v.to_string()))
        };

        [
            self.status.map(|s| ("status", s.as_str().to_string())),
            text("category", &self.category),
            text("search", &self.search),
            text("ordering", &self.ordering),
            self.page.map(|p| ("page", p.to_string())),
        ]
        .into_iter()
        .flatten()
        .collect()
    }

    /// Listing path with its query string
    pub fn to_path(&self) -> String {
        with_query("/campaigns/", self.query_pairs())
    }
}

/// Campaign create/update payload
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CampaignInput {
    pub title: String,
    pub description: String,
    pub category: String,
    #[serde_as(as = "Amount")]
    pub goal: f64,
    pub deadline: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<CampaignStatus>,
}

#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CampaignStatistics {
    pub total_campaigns: u64,
    pub active_campaigns: u64,
    pub completed_campaigns: u64,
    #[serde_as(as = "Amount")]
    pub total_raised: f64,
}

/// Progress post on a campaign
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CampaignUpdate {
    pub id: u64,
    pub campaign: u64,
    pub title: String,
    pub message: String,
    pub created_by: Option<User>,
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CampaignUpdateInput {
    pub title: String,
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CampaignTestimonial {
    pub id: u64,
    pub campaign: u64,
    pub donor: Option<User>,
    pub message: String,
    pub rating: u8,
    pub is_approved: bool,
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestimonialInput {
    pub message: String,
    pub rating: u8,
}
