//! Skill gap analysis

use crate::matching::skills::SkillSet;
use crate::model::career::CareerPath;
use crate::model::profile::Profile;
use crate::model::recommendation::SkillGap;

/// Compare a profile against one career's required and future skills.
///
/// Future skills are checked against technical skills only; a soft skill on
/// the profile never clears a `to_improve` entry.
pub fn analyze_skill_gap(profile: &Profile, career: &CareerPath) -> SkillGap {
    let technical = SkillSet::new(&profile.skills.technical);
    let soft = SkillSet::new(&profile.skills.soft);
    let required = &career.required_skills;

    let missing = technical
        .unmatched(&required.technical)
        .into_iter()
        .chain(soft.unmatched(&required.soft))
        .cloned()
        .collect();

    let strengths = technical
        .matched(&required.technical)
        .into_iter()
        .chain(soft.matched(&required.soft))
        .cloned()
        .collect();

    let to_improve = technical
        .unmatched(&career.future_skills)
        .into_iter()
        .cloned()
        .collect();

    SkillGap {
        missing,
        to_improve,
        strengths,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CareerCatalog;
    use crate::model::profile::{
        Education, EducationLevel, Experience, Goals, Interests, PersonalInfo, Skills, Timeframe,
    };

    fn profile(technical: &[&str], soft: &[&str]) -> Profile {
        Profile {
            personal_info: PersonalInfo {
                name: "Test".to_string(),
                age: None,
                location: None,
            },
            education: Education {
                level: EducationLevel::Bachelor,
                field: String::new(),
                graduation_year: None,
            },
            skills: Skills {
                technical: technical.iter().map(|s| s.to_string()).collect(),
                soft: soft.iter().map(|s| s.to_string()).collect(),
                ..Skills::default()
            },
            experience: Experience::default(),
            interests: Interests::default(),
            goals: Goals {
                timeframe: Timeframe::OneYear,
                priorities: Vec::new(),
            },
        }
    }

    #[test]
    fn test_missing_lists_technical_then_soft() {
        let catalog = CareerCatalog::builtin();
        let ai = catalog.get("ai-engineer").unwrap();
        let gap = analyze_skill_gap(&profile(&["Python", "SQL"], &["Communication"]), ai);

        assert_eq!(
            gap.missing,
            vec![
                "Machine Learning",
                "Deep Learning",
                "TensorFlow",
                "PyTorch",
                "Data Science",
                "Statistics",
                "Problem Solving",
                "Analytical Thinking",
                "Collaboration",
            ]
        );
        assert_eq!(gap.strengths, vec!["Python", "SQL", "Communication"]);
    }

    #[test]
    fn test_missing_and_strengths_partition_requirements() {
        let catalog = CareerCatalog::builtin();
        let p = profile(&["JavaScript", "react", "Git"], &["Time Management"]);
        for career in catalog.careers() {
            let gap = analyze_skill_gap(&p, career);
            let required =
                career.required_skills.technical.len() + career.required_skills.soft.len();
            assert_eq!(gap.missing.len() + gap.strengths.len(), required);
        }
    }

    #[test]
    fn test_to_improve_ignores_soft_skills() {
        let catalog = CareerCatalog::builtin();
        let pm = catalog.get("product-manager").unwrap();

        let soft_only = profile(&[], &["Platform Strategy"]);
        let gap = analyze_skill_gap(&soft_only, pm);
        assert!(gap.to_improve.contains(&"Platform Strategy".to_string()));

        let technical = profile(&["Platform Strategy"], &[]);
        let gap = analyze_skill_gap(&technical, pm);
        assert!(!gap.to_improve.contains(&"Platform Strategy".to_string()));
        assert_eq!(gap.to_improve.len(), 3);
    }

    #[test]
    fn test_soft_requirement_not_cleared_by_technical_skill() {
        let catalog = CareerCatalog::builtin();
        let ai = catalog.get("ai-engineer").unwrap();
        let gap = analyze_skill_gap(&profile(&["Communication"], &[]), ai);
        assert!(gap.missing.contains(&"Communication".to_string()));
    }
}
