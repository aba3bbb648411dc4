//! Donation records

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::serde_as;

use super::{Amount, Campaign, User};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    #[default]
    Upi,
    Card,
    Netbanking,
    Wallet,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DonationStatus {
    #[default]
    Pending,
    Completed,
    Failed,
    Refunded,
}

#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Donation {
    pub id: u64,
    pub transaction_id: String,
    pub donor: Option<User>,
    pub campaign: Option<Campaign>,
    #[serde_as(as = "Amount")]
    pub amount: f64,
    pub payment_method: PaymentMethod,
    pub status: DonationStatus,
    pub message: Option<String>,
    pub is_anonymous: bool,
    pub receipt_number: String,
    pub receipt_sent: bool,
    pub created_at: Option<DateTime<Utc>>,
    pub completed_at: Option<DateTime<Utc>>,
}

/// New donation payload
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DonationCreate {
    pub campaign: u64,
    #[serde_as(as = "Amount")]
    pub amount: f64,
    pub payment_method: PaymentMethod,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_anonymous: Option<bool>,
}

#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DonationStatistics {
    #[serde_as(as = "Amount")]
    pub total_donated: f64,
    pub donation_count: u64,
    pub campaigns_supported: u64,
    pub recent_donations: Vec<Donation>,
}

/// Monthly total for the donation history chart
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HistoryPoint {
    /// `YYYY-MM`
    pub month: String,
    #[serde_as(as = "Amount")]
    pub amount: f64,
}

#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LeaderboardEntry {
    #[serde(rename = "donor__id")]
    pub donor_id: u64,
    #[serde(rename = "donor__name")]
    pub donor_name: String,
    #[serde_as(as = "Amount")]
    pub total_amount: f64,
    pub donation_count: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DonationReceipt {
    pub id: u64,
    pub donation: Option<Donation>,
    pub receipt_file: Option<String>,
    pub generated_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leaderboard_entry_field_names() {
        let entries: Vec<LeaderboardEntry> = serde_json::from_str(
            r#"[{"donor__id": 4, "donor__name": "Ravi", "total_amount": "2500.00", "donation_count": 3}]"#,
        )
        .unwrap();
        assert_eq!(entries[0].donor_id, 4);
        assert_eq!(entries[0].total_amount, 2500.0);
    }

    #[test]
    fn test_donation_create_payload() {
        let payload = DonationCreate {
            campaign: 9,
            amount: 500.0,
            payment_method: PaymentMethod::Netbanking,
            message: None,
            is_anonymous: Some(true),
        };
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["payment_method"], "netbanking");
        assert_eq!(value["amount"], 500.0);
        assert_eq!(value["is_anonymous"], true);
        assert!(value.get("message").is_none());
    }
}
