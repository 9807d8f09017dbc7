//! Turns a gap analysis into suggested next actions

use crate::catalog::{CareerCatalog, Course};
use crate::matching::skills::skills_overlap;
use crate::model::career::CareerPath;
use crate::model::recommendation::{FactorScores, RecommendedActions, SkillGap};

const MAX_COURSES: usize = 3;

/// Courses teaching at least one missing skill, first three in catalog order.
pub fn recommend_courses<'a>(courses: &'a [Course], missing: &[String]) -> Vec<&'a Course> {
    courses
        .iter()
        .filter(|course| {
            course
                .skills
                .iter()
                .any(|skill| missing.iter().any(|m| skills_overlap(m, skill)))
        })
        .take(MAX_COURSES)
        .collect()
}

pub fn recommend_actions(
    catalog: &CareerCatalog,
    career: &CareerPath,
    gap: &SkillGap,
) -> RecommendedActions {
    RecommendedActions {
        courses: recommend_courses(catalog.courses(), &gap.missing)
            .into_iter()
            .map(|c| c.title.clone())
            .collect(),
        certifications: catalog.certifications_for(&career.id).to_vec(),
        projects: catalog.projects_for(&career.id).to_vec(),
        networking: catalog.networking_for(&career.id).to_vec(),
    }
}

/// Score as a whole percentage, rounded half away from zero.
pub fn percent(score: f64) -> i64 {
    (score * 100.0).round() as i64
}

pub fn build_reasoning(career: &CareerPath, scores: &FactorScores) -> Vec<String> {
    vec![
        format!("{}% technical skill match", percent(scores.technical)),
        format!("{}% education alignment", percent(scores.education)),
        format!("{}% interest alignment", percent(scores.interest)),
        format!("{} growth outlook", career.growth_outlook),
        if career.emerging_role {
            "Emerging role with high future demand".to_string()
        } else {
            "Established career path".to_string()
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_courses_limited_to_three_in_catalog_order() {
        let catalog = CareerCatalog::builtin();
        let missing = list(&["Python", "React", "AWS", "Figma", "SEO"]);
        let titles: Vec<&str> = recommend_courses(catalog.courses(), &missing)
            .iter()
            .map(|c| c.title.as_str())
            .collect();
        assert_eq!(
            titles,
            vec![
                "Machine Learning Specialization",
                "Complete React Developer Course",
                "Python for Data Science",
            ]
        );
    }

    #[test]
    fn test_courses_use_bidirectional_match() {
        let catalog = CareerCatalog::builtin();
        // "SEO/SEM" contains the course skill "SEO".
        let titles: Vec<String> = recommend_courses(catalog.courses(), &list(&["SEO/SEM"]))
            .iter()
            .map(|c| c.title.clone())
            .collect();
        assert_eq!(titles, vec!["Digital Marketing Mastery"]);

        assert!(recommend_courses(catalog.courses(), &[]).is_empty());
    }

    #[test]
    fn test_actions_fall_back_for_unknown_career() {
        let catalog = CareerCatalog::builtin();
        let mut career = catalog.get("ux-designer").cloned().unwrap();
        career.id = "marine-biologist".to_string();

        let actions = recommend_actions(&catalog, &career, &SkillGap::default());
        assert!(actions.courses.is_empty());
        assert_eq!(actions.certifications, vec!["Industry-specific certifications recommended"]);
        assert_eq!(actions.projects, vec!["Industry-relevant project portfolio"]);
        assert_eq!(actions.networking, vec!["Industry professional associations"]);
    }

    #[test]
    fn test_reasoning_format() {
        let catalog = CareerCatalog::builtin();
        let ai = catalog.get("ai-engineer").unwrap();
        let scores = FactorScores {
            technical: 0.625,
            soft: 0.0,
            education: 1.0,
            experience: 1.0,
            interest: 1.0 / 3.0,
            growth: 1.1,
        };
        assert_eq!(
            build_reasoning(ai, &scores),
            vec![
                "63% technical skill match",
                "100% education alignment",
                "33% interest alignment",
                "high-growth growth outlook",
                "Emerging role with high future demand",
            ]
        );

        let pm = catalog.get("product-manager").unwrap();
        let reasoning = build_reasoning(pm, &scores);
        assert_eq!(reasoning[3], "growing growth outlook");
        assert_eq!(reasoning[4], "Established career path");
    }
}
