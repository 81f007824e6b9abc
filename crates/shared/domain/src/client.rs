//! The aggregate client record assembled by the intake wizard.
//!
//! Field names serialize in camelCase to stay byte-compatible with the state
//! layout an embedding shell persists. Every section is independently optional:
//! an empty string means "not provided", and `#[serde(default)]` keeps
//! partially-filled records loadable.

use serde::{Deserialize, Serialize};

/// Aggregate of all wizard sections for one client.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ClientRecord {
    /// Assigned on first save; empty for in-progress drafts.
    pub id: String,
    pub personal: PersonalInfo,
    pub business: BusinessInfo,
    pub branches: Vec<Branch>,
    pub competitors: Vec<Competitor>,
    pub segments: Vec<Segment>,
}

/// Contact person details collected by the first wizard step.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonalInfo {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub position: String,
}

/// Core business facts collected by the second wizard step.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BusinessInfo {
    pub business_name: String,
    pub category: String,
    pub description: String,
    pub main_office_address: String,
    pub established_year: String,
}

/// One branch office.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Branch {
    pub name: String,
    pub address: String,
    pub phone: String,
}

/// One competitor entry with its SWOT breakdown.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Competitor {
    pub name: String,
    pub description: String,
    pub website: String,
    pub social_links: String,
    pub swot: Swot,
}

/// Strengths/Weaknesses/Opportunities/Threats lists attached to a competitor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Swot {
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub opportunities: Vec<String>,
    pub threats: Vec<String>,
}

/// One target audience segment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Segment {
    pub name: String,
    pub description: String,
    pub target_age: String,
    pub target_gender: String,
    pub interests: String,
    pub income: String,
}
