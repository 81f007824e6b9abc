//! Campaign plan feeding the contract placeholders.

use serde::{Deserialize, Serialize};

/// Plan facts substituted into the contract templates.
///
/// Values stay as entered (strings); the contract renderer substitutes them
/// verbatim into the `[START DATE]` and `[DURATION]` tokens.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CampaignPlan {
    pub start_date: String,
    pub duration: String,
}
