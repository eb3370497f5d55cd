//! Quarantine reasons and per-row verdicts.
//!
//! Each table has its own small reason enumeration. A quarantined row
//! carries exactly one reason: the highest-priority failing rule, in the
//! fixed order the classifiers evaluate them. Reasons are never combined.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Outcome of classifying a single row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict<R> {
    /// Row passed every rule and belongs in the clean partition.
    Clean,
    /// Row failed at least one rule; carries the first matching reason.
    Quarantined(R),
}

impl<R> Verdict<R> {
    pub fn is_clean(&self) -> bool {
        matches!(self, Verdict::Clean)
    }

    pub fn reason(&self) -> Option<&R> {
        match self {
            Verdict::Clean => None,
            Verdict::Quarantined(reason) => Some(reason),
        }
    }
}

/// Quarantine reasons for the countries reference table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CountryReason {
    /// Country name or code absent/blank.
    MissingRequired,
    /// Code is absent or not exactly three ASCII uppercase letters.
    InvalidCodeFormat,
}

impl CountryReason {
    pub const ALL: [CountryReason; 2] =
        [CountryReason::MissingRequired, CountryReason::InvalidCodeFormat];

    /// Stable label written to the `quarantine_reason` output column.
    pub fn as_str(&self) -> &'static str {
        match self {
            CountryReason::MissingRequired => "missing_required",
            CountryReason::InvalidCodeFormat => "invalid_code_format",
        }
    }
}

impl fmt::Display for CountryReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for CountryReason {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "missing_required" => Ok(CountryReason::MissingRequired),
            "invalid_code_format" => Ok(CountryReason::InvalidCodeFormat),
            other => Err(format!("Unknown country quarantine reason: {other}")),
        }
    }
}

/// Quarantine reasons for the summer results fact table.
///
/// Declaration order is the evaluation priority: a row matching several
/// rules is tagged with the first one only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MedalReason {
    /// Any of the ten required fields absent/blank.
    MissingRequired,
    /// Code absent or not exactly three ASCII uppercase letters.
    InvalidCodeFormat,
    /// Medal not one of Gold/Silver/Bronze.
    InvalidMedal,
    /// Year unparseable or outside the allowed range.
    InvalidYear,
    /// Gender not one of Men/Women.
    InvalidGender,
    /// Harmonized code has no clean reference row.
    CodeNotInCountries,
}

impl MedalReason {
    pub const ALL: [MedalReason; 6] = [
        MedalReason::MissingRequired,
        MedalReason::InvalidCodeFormat,
        MedalReason::InvalidMedal,
        MedalReason::InvalidYear,
        MedalReason::InvalidGender,
        MedalReason::CodeNotInCountries,
    ];

    /// Stable label written to the `quarantine_reason` output column.
    pub fn as_str(&self) -> &'static str {
        match self {
            MedalReason::MissingRequired => "missing_required",
            MedalReason::InvalidCodeFormat => "invalid_code_format",
            MedalReason::InvalidMedal => "invalid_medal",
            MedalReason::InvalidYear => "invalid_year",
            MedalReason::InvalidGender => "invalid_gender",
            MedalReason::CodeNotInCountries => "code_not_in_countries",
        }
    }
}

impl fmt::Display for MedalReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for MedalReason {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "missing_required" => Ok(MedalReason::MissingRequired),
            "invalid_code_format" => Ok(MedalReason::InvalidCodeFormat),
            "invalid_medal" => Ok(MedalReason::InvalidMedal),
            "invalid_year" => Ok(MedalReason::InvalidYear),
            "invalid_gender" => Ok(MedalReason::InvalidGender),
            "code_not_in_countries" => Ok(MedalReason::CodeNotInCountries),
            other => Err(format!("Unknown summer quarantine reason: {other}")),
        }
    }
}

/// Gender values accepted in the fact table.
///
/// Matching is exact and case-sensitive; inputs are trimmed by the
/// classifier before parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Men,
    Women,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Men => "Men",
            Gender::Women => "Women",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Men" => Ok(Gender::Men),
            "Women" => Ok(Gender::Women),
            other => Err(format!("Unknown gender: {other}")),
        }
    }
}

/// Medal values accepted in the fact table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Medal {
    Gold,
    Silver,
    Bronze,
}

impl Medal {
    pub fn as_str(&self) -> &'static str {
        match self {
            Medal::Gold => "Gold",
            Medal::Silver => "Silver",
            Medal::Bronze => "Bronze",
        }
    }
}

impl fmt::Display for Medal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Medal {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Gold" => Ok(Medal::Gold),
            "Silver" => Ok(Medal::Silver),
            "Bronze" => Ok(Medal::Bronze),
            other => Err(format!("Unknown medal: {other}")),
        }
    }
}
