//! Composite score weights

use crate::error::{CareerMatcherError, Result};
use crate::model::recommendation::FactorScores;
use serde::{Deserialize, Serialize};

pub const DEFAULT_WEIGHTS: ScoringWeights = ScoringWeights {
    technical: 0.25,
    soft: 0.15,
    education: 0.20,
    experience: 0.15,
    interest: 0.15,
    growth: 0.10,
};

const SUM_TOLERANCE: f64 = 1e-6;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoringWeights {
    pub technical: f64,
    pub soft: f64,
    pub education: f64,
    pub experience: f64,
    pub interest: f64,
    pub growth: f64,
}

impl ScoringWeights {
    pub fn sum(&self) -> f64 {
        self.technical + self.soft + self.education + self.experience + self.interest + self.growth
    }

    pub fn validate(&self) -> Result<()> {
        let all = [
            ("technical", self.technical),
            ("soft", self.soft),
            ("education", self.education),
            ("experience", self.experience),
            ("interest", self.interest),
            ("growth", self.growth),
        ];
        if let Some((name, value)) = all.iter().find(|(_, w)| !w.is_finite() || *w < 0.0) {
            return Err(CareerMatcherError::Configuration(format!(
                "Weight '{}' must be a non-negative number, got {}",
                name, value
            )));
        }

        let sum = self.sum();
        if (sum - 1.0).abs() > SUM_TOLERANCE {
            return Err(CareerMatcherError::Configuration(format!(
                "Scoring weights must sum to 1.0, got {:.4}",
                sum
            )));
        }
        Ok(())
    }

    /// Weighted sum of the factor scores. Not clamped: growth can push it
    /// slightly above 1.0.
    pub fn composite(&self, scores: &FactorScores) -> f64 {
        scores.technical * self.technical
            + scores.soft * self.soft
            + scores.education * self.education
            + scores.experience * self.experience
            + scores.interest * self.interest
            + scores.growth * self.growth
    }
}

impl Default for ScoringWeights {
    fn default() -> Self {
        DEFAULT_WEIGHTS
    }
}
