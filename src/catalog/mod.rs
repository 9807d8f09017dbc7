//! Career catalog: careers, course list and per-career action tables
//!
//! The catalog is loaded once and only read afterwards, so it can be shared
//! by reference across any number of match runs.

pub mod builtin;

use crate::error::{CareerMatcherError, Result};
use crate::input::file_detector::FileType;
use crate::model::career::CareerPath;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::path::Path;
use strsim::jaro_winkler;

const GENERIC_CERTIFICATION: &str = "Industry-specific certifications recommended";
const GENERIC_PROJECT: &str = "Industry-relevant project portfolio";
const GENERIC_NETWORKING: &str = "Industry professional associations";

/// Similarity needed before an id is offered as a "did you mean" hint.
const SUGGESTION_THRESHOLD: f64 = 0.8;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub title: String,
    pub provider: String,
    pub duration: String,
    pub difficulty: Difficulty,
    pub skills: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

/// Next steps for one career id. An empty list falls back to the generic
/// entry for that category.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CareerActions {
    #[serde(default)]
    pub certifications: Vec<String>,
    #[serde(default)]
    pub projects: Vec<String>,
    #[serde(default)]
    pub networking: Vec<String>,
}

impl CareerActions {
    pub fn generic() -> Self {
        Self {
            certifications: vec![GENERIC_CERTIFICATION.to_string()],
            projects: vec![GENERIC_PROJECT.to_string()],
            networking: vec![GENERIC_NETWORKING.to_string()],
        }
    }
}

/// Values the assessment form suggests to users.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vocabulary {
    #[serde(default)]
    pub technical_skills: Vec<String>,
    #[serde(default)]
    pub soft_skills: Vec<String>,
    #[serde(default)]
    pub industries: Vec<String>,
    #[serde(default)]
    pub work_environments: Vec<String>,
    #[serde(default)]
    pub values: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CareerCatalog {
    careers: Vec<CareerPath>,
    #[serde(default)]
    courses: Vec<Course>,
    #[serde(default)]
    actions: BTreeMap<String, CareerActions>,
    #[serde(default)]
    vocabulary: Vocabulary,
    #[serde(skip, default = "CareerActions::generic")]
    fallback: CareerActions,
}

impl CareerCatalog {
    /// Build a catalog from parts, validating career entries.
    pub fn new(
        careers: Vec<CareerPath>,
        courses: Vec<Course>,
        actions: BTreeMap<String, CareerActions>,
        vocabulary: Vocabulary,
    ) -> Result<Self> {
        let catalog = Self {
            careers,
            courses,
            actions,
            vocabulary,
            fallback: CareerActions::generic(),
        };
        catalog.validate()?;
        Ok(catalog)
    }

    /// The hand-authored catalog shipped with the tool.
    pub fn builtin() -> Self {
        Self {
            careers: builtin::careers(),
            courses: builtin::courses(),
            actions: builtin::action_tables(),
            vocabulary: builtin::vocabulary(),
            fallback: CareerActions::generic(),
        }
    }

    pub fn empty() -> Self {
        Self {
            careers: Vec::new(),
            courses: Vec::new(),
            actions: BTreeMap::new(),
            vocabulary: Vocabulary::default(),
            fallback: CareerActions::generic(),
        }
    }

    /// Load a catalog file; the format follows the file extension.
    pub fn from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(CareerMatcherError::InvalidInput(format!(
                "Catalog file does not exist: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        let catalog: CareerCatalog = match FileType::from_path(path) {
            FileType::Json => serde_json::from_str(&content)
                .map_err(|e| Self::parse_error(path, &e))?,
            FileType::Toml => toml::from_str(&content).map_err(|e| Self::parse_error(path, &e))?,
            FileType::Unknown => {
                return Err(CareerMatcherError::UnsupportedFormat(format!(
                    "Unsupported catalog file type: {}",
                    path.display()
                )));
            }
        };

        catalog.validate()?;
        info!(
            "Loaded catalog from {} ({} careers, {} courses)",
            path.display(),
            catalog.careers.len(),
            catalog.courses.len()
        );
        Ok(catalog)
    }

    fn parse_error(path: &Path, err: &dyn std::fmt::Display) -> CareerMatcherError {
        CareerMatcherError::Catalog(format!("Failed to parse {}: {}", path.display(), err))
    }

    fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();

        for career in &self.careers {
            if career.id.trim().is_empty() {
                return Err(CareerMatcherError::Catalog(format!(
                    "Career '{}' has an empty id",
                    career.title
                )));
            }
            if career.title.trim().is_empty() {
                return Err(CareerMatcherError::Catalog(format!(
                    "Career '{}' has an empty title",
                    career.id
                )));
            }
            if !seen.insert(career.id.as_str()) {
                return Err(CareerMatcherError::Catalog(format!(
                    "Duplicate career id: {}",
                    career.id
                )));
            }
            if !career.average_salary.is_ordered() {
                warn!(
                    "Salary bands for '{}' are not ordered entry <= mid <= senior",
                    career.id
                );
            }
        }

        for id in self.actions.keys() {
            if !seen.contains(id.as_str()) {
                debug!("Action table entry '{}' has no matching career", id);
            }
        }

        Ok(())
    }

    pub fn careers(&self) -> &[CareerPath] {
        &self.careers
    }

    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    pub fn len(&self) -> usize {
        self.careers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.careers.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&CareerPath> {
        self.careers.iter().find(|c| c.id == id)
    }

    /// Like [`get`](Self::get) but reports close ids on a miss.
    pub fn require(&self, id: &str) -> Result<&CareerPath> {
        self.get(id).ok_or_else(|| {
            let suggestions = self.suggest_ids(id);
            if suggestions.is_empty() {
                CareerMatcherError::CareerNotFound(id.to_string())
            } else {
                CareerMatcherError::CareerNotFound(format!(
                    "{} (did you mean: {}?)",
                    id,
                    suggestions.join(", ")
                ))
            }
        })
    }

    /// Ids similar to `query`, best first.
    pub fn suggest_ids(&self, query: &str) -> Vec<String> {
        let query = query.to_lowercase();
        let mut scored: Vec<(f64, &str)> = self
            .careers
            .iter()
            .map(|c| (jaro_winkler(&query, &c.id.to_lowercase()), c.id.as_str()))
            .filter(|(score, _)| *score >= SUGGESTION_THRESHOLD)
            .collect();

        scored.sort_by(|a, b| b.0.total_cmp(&a.0));
        scored.into_iter().take(3).map(|(_, id)| id.to_string()).collect()
    }

    pub fn certifications_for(&self, career_id: &str) -> &[String] {
        self.lookup(career_id, |actions| &actions.certifications)
    }

    pub fn projects_for(&self, career_id: &str) -> &[String] {
        self.lookup(career_id, |actions| &actions.projects)
    }

    pub fn networking_for(&self, career_id: &str) -> &[String] {
        self.lookup(career_id, |actions| &actions.networking)
    }

    fn lookup<'a>(
        &'a self,
        career_id: &str,
        category: impl Fn(&'a CareerActions) -> &'a Vec<String>,
    ) -> &'a [String] {
        match self.actions.get(career_id).map(&category) {
            Some(entries) if !entries.is_empty() => entries.as_slice(),
            _ => category(&self.fallback).as_slice(),
        }
    }
}

impl Default for CareerCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
