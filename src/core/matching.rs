use serde::{Deserialize, Serialize};

use crate::models::domain::Skill;

/// Relationship of a matched skill to the source skill
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchRole {
    /// The match can teach what the source wants to learn
    Teacher,
    /// The match wants to learn what the source can teach
    Student,
}

/// Case-insensitive substring test between two skill titles
///
/// Matching is plain containment of the source title in the candidate title.
/// It deliberately does not go through SQL pattern matching, so `%` and `_`
/// in stored titles are ordinary characters, not wildcards.
pub fn title_overlaps(source_title: &str, candidate_title: &str) -> bool {
    candidate_title
        .to_lowercase()
        .contains(&source_title.to_lowercase())
}

/// Classify a same-category candidate against the source skill
///
/// `teacher` when the source wants to learn and the candidate can teach;
/// `student` when the source can teach and the candidate wants to learn.
/// The teacher rule wins when both would apply. Candidates with no
/// complementary intent are dropped.
pub fn classify(source: &Skill, candidate: &Skill) -> Option<MatchRole> {
    if source.want_learn && candidate.can_teach {
        Some(MatchRole::Teacher)
    } else if source.can_teach && candidate.want_learn {
        Some(MatchRole::Student)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::domain::{SkillCategory, SkillLevel};
    use chrono::Utc;

    fn skill(title: &str, can_teach: bool, want_learn: bool) -> Skill {
        Skill {
            id: 1,
            title: title.to_string(),
            description: "ten chars or more".to_string(),
            category: SkillCategory::Music,
            category_id: None,
            level: SkillLevel::Intermediate,
            can_teach,
            want_learn,
            created_at: Utc::now(),
            updated_at: None,
        }
    }

    #[test]
    fn test_title_overlap_is_case_insensitive() {
        assert!(title_overlaps("guitar", "Classical Guitar"));
        assert!(title_overlaps("GUITAR", "guitar lessons"));
        assert!(!title_overlaps("piano", "Classical Guitar"));
    }

    #[test]
    fn test_title_overlap_treats_wildcards_literally() {
        assert!(!title_overlaps("100% guitar", "100x guitar"));
        assert!(title_overlaps("100% guitar", "my 100% guitar course"));
        assert!(!title_overlaps("a_c", "abc"));
    }

    #[test]
    fn test_classify_teacher() {
        let source = skill("Guitar", false, true);
        let candidate = skill("Guitar lessons", true, false);
        assert_eq!(classify(&source, &candidate), Some(MatchRole::Teacher));
    }

    #[test]
    fn test_classify_student() {
        let source = skill("Guitar", true, false);
        let candidate = skill("Guitar basics", false, true);
        assert_eq!(classify(&source, &candidate), Some(MatchRole::Student));
    }

    #[test]
    fn test_classify_no_complement() {
        // Both teach: nobody learns from anybody here.
        let source = skill("Guitar", true, false);
        let candidate = skill("Guitar lessons", true, false);
        assert_eq!(classify(&source, &candidate), None);

        // Both learn.
        let source = skill("Guitar", false, true);
        let candidate = skill("Guitar lessons", false, true);
        assert_eq!(classify(&source, &candidate), None);
    }

    #[test]
    fn test_match_role_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&MatchRole::Teacher).unwrap(), "\"teacher\"");
        assert_eq!(serde_json::to_string(&MatchRole::Student).unwrap(), "\"student\"");
    }
}
