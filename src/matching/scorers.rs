//! Per-factor scoring functions
//!
//! Each scorer maps (profile, career) to a value in [0, 1], except
//! [`growth_score`] which can reach 1.1.

use crate::matching::skills::skill_overlap_ratio;
use crate::model::career::{CareerPath, ExperienceLevel, GrowthOutlook};
use crate::model::profile::{Education, Goals, Interests, Priority, Profile};
use crate::model::recommendation::FactorScores;

/// Score given when no education requirement is clearly met. Treated as
/// uncertainty rather than disqualification.
const EDUCATION_PARTIAL_CREDIT: f64 = 0.7;

/// Score for experience levels outside entry/mid/senior.
const UNSPECIFIED_LEVEL_SCORE: f64 = 0.8;

const EMERGING_ROLE_BONUS: f64 = 0.1;

pub fn technical_score(profile: &Profile, career: &CareerPath) -> f64 {
    skill_overlap_ratio(&profile.skills.technical, &career.required_skills.technical)
}

pub fn soft_score(profile: &Profile, career: &CareerPath) -> f64 {
    skill_overlap_ratio(&profile.skills.soft, &career.required_skills.soft)
}

/// Checks run bachelor, then master, then bootcamp; the first one met wins.
pub fn education_score(education: &Education, requirements: &[String]) -> f64 {
    let rank = education.level.rank();
    let mentions = |term: &str| requirements.iter().any(|r| r.to_lowercase().contains(term));

    let met = (mentions("bachelor") && rank >= 3)
        || (mentions("master") && rank >= 4)
        || (mentions("bootcamp") && rank >= 2);

    if met {
        1.0
    } else {
        EDUCATION_PARTIAL_CREDIT
    }
}

/// Piecewise fit of years of experience to the role's level. Each band has a
/// floor so the score never reaches zero.
pub fn experience_score(years: f64, level: ExperienceLevel) -> f64 {
    match level {
        ExperienceLevel::Entry => {
            if years <= 3.0 {
                1.0
            } else {
                (1.0 - (years - 3.0) * 0.1).max(0.7)
            }
        }
        ExperienceLevel::Mid => {
            if (2.0..=7.0).contains(&years) {
                1.0
            } else {
                (1.0 - (years - 4.5).abs() * 0.1).max(0.5)
            }
        }
        ExperienceLevel::Senior => {
            if years >= 5.0 {
                1.0
            } else {
                (years / 5.0).max(0.3)
            }
        }
        ExperienceLevel::Unspecified => UNSPECIFIED_LEVEL_SCORE,
    }
}

/// Mean of industry interest (0 or 1) and the share of the career's work
/// environments the profile prefers. Exact string comparison.
pub fn interest_score(interests: &Interests, career: &CareerPath) -> f64 {
    let industry = if interests.industries.contains(&career.industry) {
        1.0
    } else {
        0.0
    };

    let env_matches = career
        .work_environment
        .iter()
        .filter(|env| interests.work_environment.contains(env))
        .count();
    let environment = env_matches as f64 / career.work_environment.len().max(1) as f64;

    (industry + environment) / 2.0
}

pub fn growth_score(career: &CareerPath, goals: &Goals) -> f64 {
    let base = match career.growth_outlook {
        GrowthOutlook::Declining => 0.5,
        GrowthOutlook::Stable => 0.7,
        GrowthOutlook::Growing => 0.9,
        GrowthOutlook::HighGrowth => 1.0,
    };

    if career.emerging_role && goals.prioritizes(Priority::Growth) {
        base + EMERGING_ROLE_BONUS
    } else {
        base
    }
}

/// Run every factor scorer for one career.
pub fn score_factors(profile: &Profile, career: &CareerPath) -> FactorScores {
    FactorScores {
        technical: technical_score(profile, career),
        soft: soft_score(profile, career),
        education: education_score(&profile.education, &career.education_requirements),
        experience: experience_score(profile.experience.years, career.experience_level),
        interest: interest_score(&profile.interests, career),
        growth: growth_score(career, &profile.goals),
    }
}
