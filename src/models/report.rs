use serde::{Deserialize, Serialize};

use super::call::{CallRecord, Site, Subgroup};

/// Campaign-wide call counts and qualification rates.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OverallMetrics {
    pub total: u64,
    pub qualified: u64,
    pub unqualified: u64,
    pub qualified_pct: f64,
    pub unqualified_pct: f64,
}

/// One row of the cleaned category/classification breakdown.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CategoryCount {
    pub category: String,
    pub classification: String,
    pub count: u64,
}

/// Confirmed-sale count for one subgroup, with its share of the site total.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SubgroupConfirmed {
    pub subgroup: Subgroup,
    pub confirmed: u64,
    pub share_pct: f64,
}

/// Confirmed-sale summary for one site.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SiteConfirmed {
    pub site: Site,
    pub confirmed: u64,
    pub subgroups: Vec<SubgroupConfirmed>,
}

/// Confirmed-sale count for one agent.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AgentConfirmed {
    pub agent: String,
    pub confirmed: u64,
}

/// Per-agent confirmed counts for one subgroup of a site.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SubgroupAgents {
    pub subgroup: Subgroup,
    pub agents: Vec<AgentConfirmed>,
}

/// Everything the overview page needs for one site.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SiteReport {
    pub summary: SiteConfirmed,
    pub agents: Vec<AgentConfirmed>,
    pub agents_by_subgroup: Vec<SubgroupAgents>,
}

/// Full payload for the overview page. Computed in one pass over one load.
///
/// `source_error` carries the Loader's user-visible message when the database
/// could not be reached; the counts are then all zero.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardReport {
    pub overall: OverallMetrics,
    pub sites: Vec<SiteReport>,
    pub source_error: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryReport {
    pub rows: Vec<CategoryCount>,
    pub source_error: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallLog {
    pub calls: Vec<CallRecord>,
    pub source_error: Option<String>,
}
