//! Ranked match output

use crate::model::career::CareerPath;
use serde::Serialize;

/// One ranked career for a profile. Borrows its career from the catalog that
/// produced it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerRecommendation<'a> {
    pub career: &'a CareerPath,
    pub match_score: f64,
    pub scores: FactorScores,
    pub skill_gap: SkillGap,
    pub recommended_actions: RecommendedActions,
    pub time_to_ready: TimeToReady,
    pub reasoning: Vec<String>,
}

/// Per-factor sub-scores feeding the composite.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FactorScores {
    pub technical: f64,
    pub soft: f64,
    pub education: f64,
    pub experience: f64,
    pub interest: f64,
    /// May reach 1.1 for emerging roles.
    pub growth: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillGap {
    pub missing: Vec<String>,
    pub to_improve: Vec<String>,
    pub strengths: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RecommendedActions {
    pub courses: Vec<String>,
    pub certifications: Vec<String>,
    pub projects: Vec<String>,
    pub networking: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TimeToReady {
    #[serde(rename = "Ready now")]
    ReadyNow,
    #[serde(rename = "3-6 months")]
    ThreeToSixMonths,
    #[serde(rename = "6-12 months")]
    SixToTwelveMonths,
    #[serde(rename = "1-2 years")]
    OneToTwoYears,
}

impl TimeToReady {
    /// Bucket by number of missing required skills.
    pub fn from_missing_count(missing: usize) -> Self {
        match missing {
            0 => TimeToReady::ReadyNow,
            1..=3 => TimeToReady::ThreeToSixMonths,
            4..=6 => TimeToReady::SixToTwelveMonths,
            _ => TimeToReady::OneToTwoYears,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TimeToReady::ReadyNow => "Ready now",
            TimeToReady::ThreeToSixMonths => "3-6 months",
            TimeToReady::SixToTwelveMonths => "6-12 months",
            TimeToReady::OneToTwoYears => "1-2 years",
        }
    }
}

impl std::fmt::Display for TimeToReady {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_to_ready_boundaries() {
        assert_eq!(TimeToReady::from_missing_count(0), TimeToReady::ReadyNow);
        assert_eq!(TimeToReady::from_missing_count(3).label(), "3-6 months");
        assert_eq!(TimeToReady::from_missing_count(4).label(), "6-12 months");
        assert_eq!(TimeToReady::from_missing_count(6).label(), "6-12 months");
        assert_eq!(TimeToReady::from_missing_count(7).label(), "1-2 years");
    }

    #[test]
    fn test_time_to_ready_serializes_as_label() {
        let json = serde_json::to_string(&TimeToReady::OneToTwoYears).unwrap();
        assert_eq!(json, "\"1-2 years\"");
    }
}
