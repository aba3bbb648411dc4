//! CLI commands

use anyhow::{Result, anyhow};
use clap::{Subcommand, ValueEnum};
use nostos_client::NostosClient;
use nostos_client::types::{
    CampaignListParams, CampaignStatus, DonationCreate, PaymentMethod, RegisterRequest, Role,
    ThankYouRequest, Tone, TrendPeriod,
};
use serde::Serialize;

#[derive(Subcommand)]
pub enum Commands {
    /// Log in and store the session
    Login {
        #[arg(long)]
        email: String,

        #[arg(long, env = "NOSTOS_PASSWORD", hide_env_values = true)]
        password: String,

        #[arg(long, value_enum, default_value = "alumni")]
        role: RoleArg,
    },

    /// Create an account and store the session
    Register {
        #[arg(long)]
        email: String,

        #[arg(long, env = "NOSTOS_PASSWORD", hide_env_values = true)]
        password: String,

        #[arg(long)]
        name: String,

        #[arg(long)]
        phone: String,

        #[arg(long, value_enum, default_value = "alumni")]
        role: RoleArg,

        #[arg(long)]
        department: Option<String>,

        #[arg(long)]
        graduation_year: Option<i32>,
    },

    /// End the session
    Logout,

    /// Show the current user
    Whoami {
        /// Print the cached user without contacting the server
        #[arg(long)]
        cached: bool,
    },

    /// Campaign operations
    Campaigns {
        #[command(subcommand)]
        command: CampaignCommands,
    },

    /// Donation operations
    Donations {
        #[command(subcommand)]
        command: DonationCommands,
    },

    /// AI messaging and analysis
    Ai {
        #[command(subcommand)]
        command: AiCommands,
    },

    /// Analytics reports
    Analytics {
        #[command(subcommand)]
        command: AnalyticsCommands,
    },
}

#[derive(Subcommand)]
pub enum CampaignCommands {
    /// List campaigns
    List {
        #[arg(long, value_enum)]
        status: Option<StatusArg>,

        #[arg(long)]
        category: Option<String>,

        #[arg(long)]
        search: Option<String>,

        /// Sort field, prefix with - for descending
        #[arg(long)]
        ordering: Option<String>,

        #[arg(long)]
        page: Option<u32>,
    },

    /// Show one campaign
    Get { id: u64 },

    /// Best-funded campaigns
    Top {
        #[arg(long, default_value_t = 10)]
        limit: u32,
    },

    /// Campaign statistics
    Stats,
}

#[derive(Subcommand)]
pub enum DonationCommands {
    /// List donations
    List,

    /// Donation statistics for the current user
    Stats,

    /// Monthly donation history
    History {
        #[arg(long, default_value_t = 12)]
        months: u32,
    },

    /// Donate to a campaign
    Donate {
        /// Campaign id
        campaign: u64,

        amount: f64,

        #[arg(long, value_enum, default_value = "upi")]
        method: PaymentMethodArg,

        #[arg(long)]
        message: Option<String>,

        #[arg(long)]
        anonymous: bool,
    },
}

#[derive(Subcommand)]
pub enum AiCommands {
    /// Draft a thank-you note
    ThankYou {
        #[arg(long)]
        donor_name: String,

        #[arg(long)]
        campaign_title: String,

        #[arg(long)]
        amount: f64,

        #[arg(long, value_enum)]
        tone: Option<ToneArg>,
    },

    /// Analyze the sentiment of a text
    Sentiment { text: String },
}

#[derive(Subcommand)]
pub enum AnalyticsCommands {
    /// Dashboard statistics
    Dashboard,

    /// Donation trends
    Trends {
        #[arg(long, value_enum, default_value = "month")]
        period: PeriodArg,

        #[arg(long, default_value_t = 12)]
        months: u32,
    },

    /// Export a report
    Export {
        #[arg(long = "type", default_value = "summary")]
        kind: String,
    },
}

impl Commands {
    pub async fn execute(self, client: &NostosClient) -> Result<()> {
        match self {
            Commands::Login {
                email,
                password,
                role,
            } => {
                let response = client.login(&email, &password, role.into()).await?;
                print_json(&response.user)
            }
            Commands::Register {
                email,
                password,
                name,
                phone,
                role,
                department,
                graduation_year,
            } => {
                let request = RegisterRequest {
                    email,
                    password2: password.clone(),
                    password,
                    name,
                    phone,
                    role: role.into(),
                    department,
                    graduation_year,
                };
                let response = client.register(&request).await?;
                print_json(&response.user)
            }
            Commands::Logout => {
                client.logout().await;
                println!("Logged out");
                Ok(())
            }
            Commands::Whoami { cached } => {
                if cached {
                    let user = client
                        .session()
                        .user()
                        .ok_or_else(|| anyhow!("Not logged in"))?;
                    print_json(&user)
                } else {
                    print_json(&client.profile().await?)
                }
            }
            Commands::Campaigns { command } => command.execute(client).await,
            Commands::Donations { command } => command.execute(client).await,
            Commands::Ai { command } => command.execute(client).await,
            Commands::Analytics { command } => command.execute(client).await,
        }
    }
}

impl CampaignCommands {
    pub async fn execute(self, client: &NostosClient) -> Result<()> {
        match self {
            CampaignCommands::List {
                status,
                category,
                search,
                ordering,
                page,
            } => {
                let params = CampaignListParams {
                    status: status.map(Into::into),
                    category,
                    search,
                    ordering,
                    page,
                };
                print_json(&client.list_campaigns(&params).await?)
            }
            CampaignCommands::Get { id } => print_json(&client.get_campaign(id).await?),
            CampaignCommands::Top { limit } => print_json(&client.top_campaigns(limit).await?),
            CampaignCommands::Stats => print_json(&client.campaign_statistics().await?),
        }
    }
}

impl DonationCommands {
    pub async fn execute(self, client: &NostosClient) -> Result<()> {
        match self {
            DonationCommands::List => print_json(&client.list_donations().await?),
            DonationCommands::Stats => print_json(&client.donation_statistics().await?),
            DonationCommands::History { months } => {
                print_json(&client.donation_history(months).await?)
            }
            DonationCommands::Donate {
                campaign,
                amount,
                method,
                message,
                anonymous,
            } => {
                let donation = DonationCreate {
                    campaign,
                    amount,
                    payment_method: method.into(),
                    message,
                    is_anonymous: anonymous.then_some(true),
                };
                print_json(&client.create_donation(&donation).await?)
            }
        }
    }
}

impl AiCommands {
    pub async fn execute(self, client: &NostosClient) -> Result<()> {
        match self {
            AiCommands::ThankYou {
                donor_name,
                campaign_title,
                amount,
                tone,
            } => {
                let request = ThankYouRequest {
                    donor_name,
                    campaign_title,
                    amount,
                    tone: tone.map(Into::into),
                };
                print_json(&client.generate_thank_you(&request).await?)
            }
            AiCommands::Sentiment { text } => print_json(&client.analyze_sentiment(&text).await?),
        }
    }
}

impl AnalyticsCommands {
    pub async fn execute(self, client: &NostosClient) -> Result<()> {
        match self {
            AnalyticsCommands::Dashboard => print_json(&client.dashboard().await?),
            AnalyticsCommands::Trends { period, months } => {
                print_json(&client.donation_trends(period.into(), months).await?)
            }
            AnalyticsCommands::Export { kind } => print_json(&client.export_report(&kind).await?),
        }
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum RoleArg {
    Alumni,
    Admin,
}

impl From<RoleArg> for Role {
    fn from(role: RoleArg) -> Self {
        match role {
            RoleArg::Alumni => Role::Alumni,
            RoleArg::Admin => Role::Admin,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum StatusArg {
    Draft,
    Active,
    Completed,
}

impl From<StatusArg> for CampaignStatus {
    fn from(status: StatusArg) -> Self {
        match status {
            StatusArg::Draft => CampaignStatus::Draft,
            StatusArg::Active => CampaignStatus::Active,
            StatusArg::Completed => CampaignStatus::Completed,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum PaymentMethodArg {
    Upi,
    Card,
    Netbanking,
    Wallet,
}

impl From<PaymentMethodArg> for PaymentMethod {
    fn from(method: PaymentMethodArg) -> Self {
        match method {
            PaymentMethodArg::Upi => PaymentMethod::Upi,
            PaymentMethodArg::Card => PaymentMethod::Card,
            PaymentMethodArg::Netbanking => PaymentMethod::Netbanking,
            PaymentMethodArg::Wallet => PaymentMethod::Wallet,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ToneArg {
    Formal,
    Friendly,
    Casual,
}

impl From<ToneArg> for Tone {
    fn from(tone: ToneArg) -> Self {
        match tone {
            ToneArg::Formal => Tone::Formal,
            ToneArg::Friendly => Tone::Friendly,
            ToneArg::Casual => Tone::Casual,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum PeriodArg {
    Day,
    Week,
    Month,
}

impl From<PeriodArg> for TrendPeriod {
    fn from(period: PeriodArg) -> Self {
        match period {
            PeriodArg::Day => TrendPeriod::Day,
            PeriodArg::Week => TrendPeriod::Week,
            PeriodArg::Month => TrendPeriod::Month,
        }
    }
}
