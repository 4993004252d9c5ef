use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FacrError;

/// The two disciplines the federation publishes under separate URL trees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClubType {
    Football,
    Futsal,
}

impl ClubType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ClubType::Football => "football",
            ClubType::Futsal => "futsal",
        }
    }

    /// Value of the `sport` query parameter on the IS portal.
    pub fn sport_param(&self) -> &'static str {
        match self {
            ClubType::Football => "fotbal",
            ClubType::Futsal => "futsal",
        }
    }
}

impl fmt::Display for ClubType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ClubType {
    type Err = FacrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "football" => Ok(ClubType::Football),
            "futsal" => Ok(ClubType::Futsal),
            other => Err(FacrError::InvalidInput(format!(
                "unknown club type '{other}'"
            ))),
        }
    }
}

/// One fixture row, as reconciled from the public page and the IS portal.
/// All fields are text-preserving; identifiers and links are omitted from
/// JSON when unknown, never null.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Match {
    pub date_time: String,
    pub home: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub home_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub home_logo_url: Option<String>,
    pub away: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub away_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub away_logo_url: Option<String>,
    pub score: String,
    pub venue: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub note: Option<String>,
    pub match_id: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub report_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub delegation_url: Option<String>,
}

/// One row of a standings table. Counts stay as scraped text; the score
/// column is normalized to `D:D`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TableRow {
    pub rank: String,
    pub team: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub team_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub team_logo_url: Option<String>,
    pub played: String,
    pub wins: String,
    pub draws: String,
    pub losses: String,
    pub score: String,
    pub points: String,
}

/// Standings sections; only the overall table is published today.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CompetitionTable {
    pub overall: Vec<TableRow>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Competition {
    pub id: String,
    pub code: String,
    pub name: String,
    pub team_count: String,
    pub matches_link: String,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub matches: Vec<Match>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub table: Option<CompetitionTable>,
}

/// Response body for the club info and club tables endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClubInfo {
    pub name: String,
    pub club_id: String,
    pub club_type: ClubType,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub club_internal_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub logo_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub category: Option<String>,
    pub competitions: Vec<Competition>,
}

/// One club from the federation search page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub name: String,
    pub club_id: String,
    pub club_type: ClubType,
    pub url: String,
    pub logo_url: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub address: Option<String>,
}

/// Maps an empty scraped string to an omitted JSON field.
pub fn none_if_empty(s: String) -> Option<String> {
    if s.is_empty() {
        None
    } else {
        Some(s)
    }
}
