//! Profile loader for JSON and TOML profile files

use crate::error::{CareerMatcherError, Result};
use crate::input::file_detector::FileType;
use crate::input::validation::validate_profile;
use crate::model::profile::Profile;
use log::info;
use std::collections::HashMap;
use std::path::Path;

pub struct ProfileLoader {
    cache: HashMap<String, Profile>,
    enable_cache: bool,
}

impl ProfileLoader {
    pub fn new() -> Self {
        Self {
            cache: HashMap::new(),
            enable_cache: true,
        }
    }

    pub fn with_cache(mut self, enable: bool) -> Self {
        self.enable_cache = enable;
        self
    }

    /// Read, parse and validate a profile. Rejected profiles never reach the
    /// matching engine.
    pub fn load(&mut self, path: &Path) -> Result<Profile> {
        let path_str = path.to_string_lossy().to_string();

        if self.enable_cache {
            if let Some(cached) = self.cache.get(&path_str) {
                info!("Using cached profile for: {}", path.display());
                return Ok(cached.clone());
            }
        }

        if !path.exists() {
            return Err(CareerMatcherError::InvalidInput(format!(
                "File does not exist: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        let profile = match FileType::from_path(path) {
            FileType::Json => {
                info!("Reading JSON profile: {}", path.display());
                Self::parse_json(&content)?
            }
            FileType::Toml => {
                info!("Reading TOML profile: {}", path.display());
                Self::parse_toml(&content)?
            }
            FileType::Unknown => {
                return Err(CareerMatcherError::UnsupportedFormat(format!(
                    "Unsupported profile file type for: {}",
                    path.display()
                )));
            }
        };

        validate_profile(&profile)?;

        if self.enable_cache {
            self.cache.insert(path_str, profile.clone());
        }

        Ok(profile)
    }

    pub fn parse_json(content: &str) -> Result<Profile> {
        serde_json::from_str(content)
            .map_err(|e| CareerMatcherError::InvalidProfile(format!("Malformed profile JSON: {}", e)))
    }

    pub fn parse_toml(content: &str) -> Result<Profile> {
        toml::from_str(content)
            .map_err(|e| CareerMatcherError::InvalidProfile(format!("Malformed profile TOML: {}", e)))
    }

    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    pub fn cache_size(&self) -> usize {
        self.cache.len()
    }
}

impl Default for ProfileLoader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_section_is_rejected() {
        let json = r#"{
            "personalInfo": { "name": "Ada" },
            "skills": { "technical": ["Rust"] },
            "experience": { "years": 2 },
            "interests": {},
            "goals": { "timeframe": "1-year" }
        }"#;
        let err = ProfileLoader::parse_json(json).unwrap_err();
        assert!(matches!(err, CareerMatcherError::InvalidProfile(_)));
        assert!(err.to_string().contains("education"));
    }

    #[test]
    fn test_parse_toml_profile() {
        let toml = r#"
[personalInfo]
name = "Sam"

[education]
level = "bootcamp"
field = "Web Development"

[skills]
technical = ["JavaScript", "React"]
soft = ["Time Management"]

[skills.proficiencyLevels]
JavaScript = 4

[experience]
years = 1.5

[interests]
industries = ["Technology"]
workEnvironment = ["Remote-friendly"]

[goals]
timeframe = "6-months"
priorities = ["salary", "growth"]
"#;
        let profile = ProfileLoader::parse_toml(toml).unwrap();
        assert_eq!(profile.personal_info.name, "Sam");
        assert_eq!(profile.skills.proficiency_levels.get("JavaScript"), Some(&4));
        assert_eq!(profile.experience.years, 1.5);
    }
}
