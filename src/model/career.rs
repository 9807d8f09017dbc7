//! Career catalog entries

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerPath {
    pub id: String,
    pub title: String,
    pub description: String,
    pub industry: String,
    pub average_salary: SalaryBands,
    pub required_skills: RequiredSkills,
    #[serde(default)]
    pub education_requirements: Vec<String>,
    pub experience_level: ExperienceLevel,
    pub growth_outlook: GrowthOutlook,
    #[serde(default)]
    pub work_environment: Vec<String>,
    #[serde(default)]
    pub emerging_role: bool,
    #[serde(default)]
    pub future_skills: Vec<String>,
}

/// Annual salary in USD per seniority band. Fractional amounts are accepted
/// and rounded only for display.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SalaryBands {
    pub entry: f64,
    pub mid: f64,
    pub senior: f64,
}

impl SalaryBands {
    pub fn is_ordered(&self) -> bool {
        self.entry <= self.mid && self.mid <= self.senior
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RequiredSkills {
    #[serde(default)]
    pub technical: Vec<String>,
    #[serde(default)]
    pub soft: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExperienceLevel {
    Entry,
    Mid,
    Senior,
    /// Any tag the catalog author used that is not one of the three bands.
    #[serde(other)]
    Unspecified,
}

impl fmt::Display for ExperienceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ExperienceLevel::Entry => "entry",
            ExperienceLevel::Mid => "mid",
            ExperienceLevel::Senior => "senior",
            ExperienceLevel::Unspecified => "unspecified",
        };
        write!(f, "{}", label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GrowthOutlook {
    Declining,
    Stable,
    Growing,
    HighGrowth,
}

impl GrowthOutlook {
    pub fn label(self) -> &'static str {
        match self {
            GrowthOutlook::Declining => "declining",
            GrowthOutlook::Stable => "stable",
            GrowthOutlook::Growing => "growing",
            GrowthOutlook::HighGrowth => "high-growth",
        }
    }
}

impl fmt::Display for GrowthOutlook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
