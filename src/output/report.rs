//! Match report: ranked recommendations plus the context they were produced in

pub use crate::matching::composer::percent;
use crate::matching::MatchEngine;
use crate::model::profile::Profile;
use crate::model::recommendation::CareerRecommendation;
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchReport<'a> {
    pub metadata: ReportMetadata,
    pub recommendations: Vec<CareerRecommendation<'a>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportMetadata {
    pub generated_at: DateTime<Utc>,
    pub version: String,
    pub profile_name: String,
    /// Every career in the catalog is scored, so this is also the number of
    /// careers evaluated.
    pub catalog_size: usize,
    /// Whether composite scores were clamped to [0, 1].
    pub clamped_scores: bool,
}

impl<'a> MatchReport<'a> {
    /// Run the engine for `profile` and wrap the result.
    pub fn generate(engine: &MatchEngine<'a>, profile: &Profile) -> Self {
        let recommendations = engine.find_matches(profile);
        Self::from_recommendations(engine, profile, recommendations)
    }

    pub fn from_recommendations(
        engine: &MatchEngine<'a>,
        profile: &Profile,
        recommendations: Vec<CareerRecommendation<'a>>,
    ) -> Self {
        Self {
            metadata: ReportMetadata {
                generated_at: Utc::now(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                profile_name: profile.personal_info.name.clone(),
                catalog_size: engine.catalog().len(),
                clamped_scores: engine.clamps_composite(),
            },
            recommendations,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.recommendations.is_empty()
    }

    pub fn best(&self) -> Option<&CareerRecommendation<'a>> {
        self.recommendations.first()
    }
}

/// Human label for a composite score.
pub fn match_tier(score: f64) -> &'static str {
    if score >= 0.8 {
        "Excellent match"
    } else if score >= 0.6 {
        "Strong match"
    } else if score >= 0.4 {
        "Moderate match"
    } else {
        "Weak match"
    }
}

/// Whole-dollar amount with thousands separators, e.g. `$120,000`. Cents are
/// rounded half away from zero; negative or non-finite amounts render as `$0`.
pub fn format_salary(amount: f64) -> String {
    let dollars = if amount.is_finite() { amount.max(0.0).round() as u64 } else { 0 };
    let digits = dollars.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("${}", grouped)
}
