//! User profile supplied by the assessment form

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub personal_info: PersonalInfo,
    pub education: Education,
    pub skills: Skills,
    pub experience: Experience,
    pub interests: Interests,
    pub goals: Goals,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonalInfo {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Education {
    pub level: EducationLevel,
    #[serde(default)]
    pub field: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub graduation_year: Option<u16>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EducationLevel {
    HighSchool,
    Bootcamp,
    SelfTaught,
    Bachelor,
    Master,
    Phd,
}

impl EducationLevel {
    /// Ordinal rank; bootcamp and self-taught share a rung.
    pub fn rank(self) -> u8 {
        match self {
            EducationLevel::HighSchool => 1,
            EducationLevel::Bootcamp | EducationLevel::SelfTaught => 2,
            EducationLevel::Bachelor => 3,
            EducationLevel::Master => 4,
            EducationLevel::Phd => 5,
        }
    }
}

impl fmt::Display for EducationLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            EducationLevel::HighSchool => "High School",
            EducationLevel::Bootcamp => "Bootcamp",
            EducationLevel::SelfTaught => "Self-taught",
            EducationLevel::Bachelor => "Bachelor's Degree",
            EducationLevel::Master => "Master's Degree",
            EducationLevel::Phd => "PhD",
        };
        write!(f, "{}", label)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Skills {
    #[serde(default)]
    pub technical: Vec<String>,
    #[serde(default)]
    pub soft: Vec<String>,
    /// Self-rated 1..=5. Carried through but not used by scoring.
    #[serde(default)]
    pub proficiency_levels: BTreeMap<String, u8>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Experience {
    pub years: f64,
    #[serde(default)]
    pub industries: Vec<String>,
    #[serde(default)]
    pub roles: Vec<String>,
    #[serde(default)]
    pub achievements: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Interests {
    #[serde(default)]
    pub work_environment: Vec<String>,
    #[serde(default)]
    pub industries: Vec<String>,
    #[serde(default)]
    pub activities: Vec<String>,
    #[serde(default)]
    pub values: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Goals {
    pub timeframe: Timeframe,
    #[serde(default)]
    pub priorities: Vec<Priority>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Timeframe {
    #[serde(rename = "6-months")]
    SixMonths,
    #[serde(rename = "1-year")]
    OneYear,
    #[serde(rename = "2-years")]
    TwoYears,
    #[serde(rename = "5-years")]
    FiveYears,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Priority {
    Salary,
    Growth,
    WorkLifeBalance,
    Impact,
    Creativity,
    Stability,
}

impl Goals {
    pub fn prioritizes(&self, priority: Priority) -> bool {
        self.priorities.contains(&priority)
    }
}
