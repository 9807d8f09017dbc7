//! Integration tests for the career matcher

use career_matcher::catalog::CareerCatalog;
use career_matcher::config::{Config, OutputFormat};
use career_matcher::error::CareerMatcherError;
use career_matcher::input::manager::ProfileLoader;
use career_matcher::input::validation::profile_warnings;
use career_matcher::matching::MatchEngine;
use career_matcher::model::recommendation::TimeToReady;
use career_matcher::output::formatter::{save_report_to_file, ReportGenerator};
use career_matcher::output::report::{match_tier, MatchReport};
use std::path::Path;

#[test]
fn test_ml_profile_end_to_end() {
    let mut loader = ProfileLoader::new();
    let profile = loader.load(Path::new("tests/fixtures/ml_profile.json")).unwrap();

    let catalog = CareerCatalog::builtin();
    let matches = MatchEngine::new(&catalog).find_matches(&profile);

    assert_eq!(matches.len(), 5);
    for pair in matches.windows(2) {
        assert!(pair[0].match_score >= pair[1].match_score);
    }

    let top = &matches[0];
    assert_eq!(top.career.id, "ai-engineer");
    for expected in ["Deep Learning", "PyTorch", "Data Science"] {
        assert!(top.skill_gap.missing.iter().any(|m| m == expected));
    }
    for declared in &profile.skills.technical {
        assert!(!top.skill_gap.missing.contains(declared));
    }
    assert_eq!(top.time_to_ready, TimeToReady::OneToTwoYears);
    assert_eq!(top.recommended_actions.courses, vec!["Python for Data Science"]);
    assert!(!top.recommended_actions.certifications.is_empty());
    assert_eq!(top.reasoning[4], "Emerging role with high future demand");

    // same sub-scores as the AI role apart from growth
    assert_eq!(matches[1].career.id, "data-scientist");
}

#[test]
fn test_matching_is_deterministic() {
    let mut loader = ProfileLoader::new();
    let profile = loader.load(Path::new("tests/fixtures/ml_profile.json")).unwrap();

    let catalog = CareerCatalog::builtin();
    let engine = MatchEngine::new(&catalog);

    let first = serde_json::to_string(&engine.find_matches(&profile)).unwrap();
    let second = serde_json::to_string(&engine.find_matches(&profile)).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_designer_toml_profile() {
    let mut loader = ProfileLoader::new();
    let profile = loader
        .load(Path::new("tests/fixtures/designer_profile.toml"))
        .unwrap();

    let catalog = CareerCatalog::builtin();
    let matches = MatchEngine::new(&catalog).find_matches(&profile);

    let top = &matches[0];
    assert_eq!(top.career.id, "ux-designer");
    assert_eq!(match_tier(top.match_score), "Excellent match");
    assert_eq!(top.skill_gap.missing.len(), 4);
    assert_eq!(top.time_to_ready, TimeToReady::SixToTwelveMonths);
    // "HTML/CSS" is the only missing skill any course teaches
    assert_eq!(top.recommended_actions.courses, vec!["Complete React Developer Course"]);
    assert!(profile_warnings(&profile, &catalog).is_empty());
}

#[test]
fn test_profile_caching() {
    let mut loader = ProfileLoader::new();
    let path = Path::new("tests/fixtures/ml_profile.json");

    let first = loader.load(path).unwrap();
    assert_eq!(loader.cache_size(), 1);

    let second = loader.load(path).unwrap();
    assert_eq!(first, second);
    assert_eq!(loader.cache_size(), 1);

    loader.clear_cache();
    assert_eq!(loader.cache_size(), 0);

    let mut uncached = ProfileLoader::new().with_cache(false);
    uncached.load(path).unwrap();
    assert_eq!(uncached.cache_size(), 0);
}

#[test]
fn test_rejected_profiles() {
    let mut loader = ProfileLoader::new();

    let result = loader.load(Path::new("tests/fixtures/unsupported.yaml"));
    assert!(matches!(result, Err(CareerMatcherError::UnsupportedFormat(_))));

    let result = loader.load(Path::new("tests/fixtures/nonexistent.json"));
    assert!(matches!(result, Err(CareerMatcherError::InvalidInput(_))));

    let result = loader.load(Path::new("tests/fixtures/invalid_profile.json"));
    assert!(matches!(result, Err(CareerMatcherError::InvalidProfile(_))));

    let result = loader.load(Path::new("tests/fixtures/malformed_profile.json"));
    assert!(matches!(result, Err(CareerMatcherError::InvalidProfile(_))));

    assert_eq!(loader.cache_size(), 0);
}

#[test]
fn test_empty_catalog_renders_no_recommendations() {
    let mut loader = ProfileLoader::new();
    let profile = loader.load(Path::new("tests/fixtures/ml_profile.json")).unwrap();

    let catalog = CareerCatalog::empty();
    let engine = MatchEngine::new(&catalog);
    let report = MatchReport::generate(&engine, &profile);
    assert!(report.is_empty());

    let text = ReportGenerator::with_options(false, true, true, true)
        .generate_report(&report, &OutputFormat::Console)
        .unwrap();
    assert!(text.contains("No recommendations found"));
}

#[test]
fn test_custom_catalog_file() {
    let catalog = CareerCatalog::from_path(Path::new("tests/fixtures/custom_catalog.toml")).unwrap();
    assert_eq!(catalog.len(), 2);
    assert!(catalog.courses().is_empty());

    let mut loader = ProfileLoader::new();
    let profile = loader.load(Path::new("tests/fixtures/ml_profile.json")).unwrap();
    let matches = MatchEngine::new(&catalog).find_matches(&profile);

    assert_eq!(matches.len(), 2);
    assert_eq!(matches[0].career.id, "data-engineer");
    assert!((matches[0].match_score - 0.64).abs() < 1e-9);

    let engineer = &matches[0].recommended_actions;
    assert!(engineer.courses.is_empty());
    assert_eq!(engineer.certifications, vec!["Databricks Data Engineer Associate"]);
    assert_eq!(engineer.projects, vec!["Industry-relevant project portfolio"]);

    // an unrecognized experience level scores a flat 0.8
    let scientist = &matches[1];
    assert_eq!(scientist.career.id, "research-scientist");
    assert!((scientist.scores.experience - 0.8).abs() < 1e-9);
    assert_eq!(
        scientist.recommended_actions.networking,
        vec!["Industry professional associations"]
    );
}

#[test]
fn test_configured_engine_and_saved_report() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("config.toml");

    let mut config = Config::load_from(&config_path).unwrap();
    config.set_value("matching.top_n", "2").unwrap();
    config.set_value("matching.clamp_composite", "true").unwrap();
    config.save_to(&config_path).unwrap();
    let config = Config::load_from(&config_path).unwrap();

    let mut loader = ProfileLoader::new();
    let profile = loader.load(Path::new("tests/fixtures/ml_profile.json")).unwrap();
    let catalog = CareerCatalog::builtin();
    let engine = MatchEngine::from_config(&catalog, &config.matching);
    let report = MatchReport::generate(&engine, &profile);

    assert_eq!(report.recommendations.len(), 2);
    assert!(report.metadata.clamped_scores);

    let markdown = ReportGenerator::new()
        .generate_report(&report, &OutputFormat::Markdown)
        .unwrap();
    let out = dir.path().join("reports").join("riley.md");
    save_report_to_file(&markdown, &out).unwrap();

    let saved = std::fs::read_to_string(&out).unwrap();
    assert!(saved.starts_with("# Career Matches for Riley Chen"));
    assert!(saved.contains("## 1. AI/ML Engineer"));
}
