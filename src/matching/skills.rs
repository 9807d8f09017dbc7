//! Skill list comparison
//!
//! Two skills match when either one, lower-cased, contains the other, so
//! "React.js" satisfies "React" and "Java" satisfies "JavaScript".

/// A profile's skills, lower-cased once for repeated comparisons.
#[derive(Debug, Clone)]
pub struct SkillSet {
    lowered: Vec<String>,
}

impl SkillSet {
    pub fn new(skills: &[String]) -> Self {
        Self {
            lowered: skills.iter().map(|s| s.to_lowercase()).collect(),
        }
    }

    /// Whether any held skill overlaps `needed` in either direction.
    pub fn satisfies(&self, needed: &str) -> bool {
        let needed = needed.to_lowercase();
        self.lowered
            .iter()
            .any(|have| have.contains(&needed) || needed.contains(have.as_str()))
    }

    /// Entries of `needed` that are satisfied, in their original order.
    pub fn matched<'a>(&self, needed: &'a [String]) -> Vec<&'a String> {
        needed.iter().filter(|n| self.satisfies(n)).collect()
    }

    /// Entries of `needed` that are not satisfied, in their original order.
    pub fn unmatched<'a>(&self, needed: &'a [String]) -> Vec<&'a String> {
        needed.iter().filter(|n| !self.satisfies(n)).collect()
    }
}

/// Fraction of `need` satisfied by `have`; 1.0 when nothing is needed.
pub fn skill_overlap_ratio(have: &[String], need: &[String]) -> f64 {
    if need.is_empty() {
        return 1.0;
    }

    let skills = SkillSet::new(have);
    skills.matched(need).len() as f64 / need.len() as f64
}

/// Bidirectional case-insensitive substring test for a single pair.
pub fn skills_overlap(a: &str, b: &str) -> bool {
    let a = a.to_lowercase();
    let b = b.to_lowercase();
    a.contains(&b) || b.contains(&a)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_empty_requirement_is_fully_matched() {
        assert_eq!(skill_overlap_ratio(&list(&["Rust"]), &[]), 1.0);
        assert_eq!(skill_overlap_ratio(&[], &[]), 1.0);
    }

    #[test]
    fn test_no_skills_matches_nothing() {
        assert_eq!(skill_overlap_ratio(&[], &list(&["Python", "SQL"])), 0.0);
    }

    #[test]
    fn test_bidirectional_substring() {
        let have = list(&["react.js", "Advanced SQL"]);
        assert_eq!(skill_overlap_ratio(&have, &list(&["React", "SQL"])), 1.0);

        // The profile entry is contained in the requirement.
        let have = list(&["Python"]);
        assert_eq!(skill_overlap_ratio(&have, &list(&["Python Scripting"])), 1.0);
    }

    #[test]
    fn test_known_quirks_are_preserved() {
        // "JS" is not a substring of "JavaScript".
        assert_eq!(skill_overlap_ratio(&list(&["JS"]), &list(&["JavaScript"])), 0.0);
        // "Java" is.
        assert_eq!(skill_overlap_ratio(&list(&["Java"]), &list(&["JavaScript"])), 1.0);
    }

    #[test]
    fn test_partial_ratio() {
        let have = list(&["python", "sql"]);
        let need = list(&["Python", "SQL", "Tableau", "Excel"]);
        assert!((skill_overlap_ratio(&have, &need) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_matched_and_unmatched_preserve_order() {
        let skills = SkillSet::new(&list(&["Statistics", "python"]));
        let need = list(&["Python", "R", "Statistics", "Excel"]);
        assert_eq!(skills.matched(&need), vec!["Python", "Statistics"]);
        assert_eq!(skills.unmatched(&need), vec!["R", "Excel"]);
    }

    #[test]
    fn test_skills_overlap_pair() {
        assert!(skills_overlap("SEO", "SEO/SEM"));
        assert!(skills_overlap("seo/sem", "SEO"));
        assert!(!skills_overlap("Figma", "Sketch"));
    }
}
