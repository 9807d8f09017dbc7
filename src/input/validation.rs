//! Profile validation
//!
//! The matching engine assumes a fully populated profile. Anything that would
//! make a score meaningless is rejected here, before matching starts.

use crate::catalog::CareerCatalog;
use crate::error::{CareerMatcherError, Result};
use crate::model::profile::Profile;
use std::collections::BTreeSet;
use strsim::jaro_winkler;

const HINT_THRESHOLD: f64 = 0.85;

pub fn validate_profile(profile: &Profile) -> Result<()> {
    if profile.personal_info.name.trim().is_empty() {
        return Err(invalid("name must not be blank"));
    }

    let skills = &profile.skills;
    if skills.technical.is_empty() && skills.soft.is_empty() {
        return Err(invalid("at least one technical or soft skill is required"));
    }

    // A blank entry would substring-match every requirement.
    if skills
        .technical
        .iter()
        .chain(&skills.soft)
        .any(|s| s.trim().is_empty())
    {
        return Err(invalid("skill entries must not be blank"));
    }

    if let Some((skill, level)) = skills
        .proficiency_levels
        .iter()
        .find(|(_, level)| !(1..=5).contains(*level))
    {
        return Err(invalid(&format!(
            "proficiency for '{}' must be between 1 and 5, got {}",
            skill, level
        )));
    }

    let years = profile.experience.years;
    if !years.is_finite() || years < 0.0 {
        return Err(invalid(&format!(
            "experience years must be a non-negative number, got {}",
            years
        )));
    }

    Ok(())
}

fn invalid(reason: &str) -> CareerMatcherError {
    CareerMatcherError::InvalidProfile(reason.to_string())
}

/// Non-fatal hints for interest values that look like near-misses of known
/// values. Industry and environment interest use exact comparison, so a
/// typo silently costs score.
pub fn profile_warnings(profile: &Profile, catalog: &CareerCatalog) -> Vec<String> {
    let vocabulary = catalog.vocabulary();

    let known_industries: BTreeSet<&str> = catalog
        .careers()
        .iter()
        .map(|c| c.industry.as_str())
        .chain(vocabulary.industries.iter().map(String::as_str))
        .collect();

    let known_environments: BTreeSet<&str> = catalog
        .careers()
        .iter()
        .flat_map(|c| c.work_environment.iter().map(String::as_str))
        .chain(vocabulary.work_environments.iter().map(String::as_str))
        .collect();

    let mut warnings = Vec::new();
    for industry in &profile.interests.industries {
        if let Some(hint) = near_miss(industry, &known_industries) {
            warnings.push(format!(
                "Industry '{}' is not recognized; did you mean '{}'?",
                industry, hint
            ));
        }
    }
    for env in &profile.interests.work_environment {
        if let Some(hint) = near_miss(env, &known_environments) {
            warnings.push(format!(
                "Work environment '{}' is not recognized; did you mean '{}'?",
                env, hint
            ));
        }
    }
    warnings
}

/// Closest known value when `value` is not itself known but resembles one.
fn near_miss<'a>(value: &str, known: &BTreeSet<&'a str>) -> Option<&'a str> {
    if known.contains(value) {
        return None;
    }

    let lowered = value.to_lowercase();
    known
        .iter()
        .map(|k| (jaro_winkler(&lowered, &k.to_lowercase()), *k))
        .filter(|(score, _)| *score >= HINT_THRESHOLD)
        .max_by(|a, b| a.0.total_cmp(&b.0))
        .map(|(_, k)| k)
}
