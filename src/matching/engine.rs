//! Ranking engine: scores every catalog career for a profile and keeps the best

use crate::catalog::CareerCatalog;
use crate::config::MatchingConfig;
use crate::matching::composer::{build_reasoning, recommend_actions};
use crate::matching::gap::analyze_skill_gap;
use crate::matching::scorers::score_factors;
use crate::matching::weights::ScoringWeights;
use crate::model::career::CareerPath;
use crate::model::profile::Profile;
use crate::model::recommendation::{CareerRecommendation, TimeToReady};
use log::{debug, info};

pub const DEFAULT_TOP_N: usize = 5;

/// Stateless matcher over a borrowed catalog. Safe to share across threads;
/// each call allocates its own results.
#[derive(Debug, Clone)]
pub struct MatchEngine<'c> {
    catalog: &'c CareerCatalog,
    weights: ScoringWeights,
    top_n: usize,
    clamp_composite: bool,
}

impl<'c> MatchEngine<'c> {
    /// Default weights, top five, composite left unclamped.
    pub fn new(catalog: &'c CareerCatalog) -> Self {
        Self {
            catalog,
            weights: ScoringWeights::default(),
            top_n: DEFAULT_TOP_N,
            clamp_composite: false,
        }
    }

    pub fn from_config(catalog: &'c CareerCatalog, config: &MatchingConfig) -> Self {
        Self {
            catalog,
            weights: config.weights,
            top_n: config.top_n,
            clamp_composite: config.clamp_composite,
        }
    }

    pub fn with_weights(mut self, weights: ScoringWeights) -> Self {
        self.weights = weights;
        self
    }

    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }

    /// Clamp the composite to [0, 1]. Off by default, so an emerging role
    /// with a perfect profile can score slightly above 1.0.
    pub fn with_clamped_composite(mut self, clamp: bool) -> Self {
        self.clamp_composite = clamp;
        self
    }

    pub fn catalog(&self) -> &'c CareerCatalog {
        self.catalog
    }

    pub fn top_n(&self) -> usize {
        self.top_n
    }

    pub fn clamps_composite(&self) -> bool {
        self.clamp_composite
    }

    /// Best matches for `profile`, highest score first, at most `top_n`.
    /// An empty catalog yields an empty list.
    pub fn find_matches(&self, profile: &Profile) -> Vec<CareerRecommendation<'c>> {
        let mut ranked = self.rank_all(profile);
        ranked.truncate(self.top_n);

        info!(
            "Ranked {} careers for '{}', returning {}",
            self.catalog.len(),
            profile.personal_info.name,
            ranked.len()
        );
        ranked
    }

    /// Every catalog career scored and sorted. Ties keep catalog order.
    pub fn rank_all(&self, profile: &Profile) -> Vec<CareerRecommendation<'c>> {
        let mut recommendations: Vec<CareerRecommendation<'c>> = self
            .catalog
            .careers()
            .iter()
            .map(|career| self.evaluate(profile, career))
            .collect();

        // sort_by is stable
        recommendations.sort_by(|a, b| b.match_score.total_cmp(&a.match_score));
        recommendations
    }

    /// Score one career and build its recommendation.
    pub fn evaluate(&self, profile: &Profile, career: &'c CareerPath) -> CareerRecommendation<'c> {
        let scores = score_factors(profile, career);
        let composite = self.weights.composite(&scores);
        let match_score = if self.clamp_composite {
            composite.clamp(0.0, 1.0)
        } else {
            composite
        };

        let skill_gap = analyze_skill_gap(profile, career);
        let recommended_actions = recommend_actions(self.catalog, career, &skill_gap);
        let time_to_ready = TimeToReady::from_missing_count(skill_gap.missing.len());
        let reasoning = build_reasoning(career, &scores);

        debug!(
            "{}: score={:.3} technical={:.2} soft={:.2} education={:.2} experience={:.2} interest={:.2} growth={:.2} missing={}",
            career.id,
            match_score,
            scores.technical,
            scores.soft,
            scores.education,
            scores.experience,
            scores.interest,
            scores.growth,
            skill_gap.missing.len()
        );

        CareerRecommendation {
            career,
            match_score,
            scores,
            skill_gap,
            recommended_actions,
            time_to_ready,
            reasoning,
        }
    }
}
