//! Skill entries rendered in the skills grid.

use serde::{Deserialize, Serialize};

/// One skill card, as described by `data/skills.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub id: u32,
    pub name: String,
    pub category: String,
    pub logo: String,
}

/// Top-level shape of `data/skills.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillsDocument {
    pub skills: Vec<Skill>,
}

/// Category filter applied to the skills grid.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SkillFilter {
    /// Show every card.
    #[default]
    All,
    /// Show only cards of one category.
    Category(String),
}

impl SkillFilter {
    /// Whether a skill passes this filter.
    pub fn matches(&self, skill: &Skill) -> bool {
        match self {
            Self::All => true,
            Self::Category(category) => &skill.category == category,
        }
    }

    /// Button label for this filter.
    pub fn label(&self) -> &str {
        match self {
            Self::All => "All",
            Self::Category(category) => category,
        }
    }
}

/// Distinct categories in first-seen order, each with its card count.
///
/// Drives the dynamically built filter buttons; the "all" bucket is the
/// caller's concern (its count is just `skills.len()`).
pub fn category_counts(skills: &[Skill]) -> Vec<(String, usize)> {
    let mut counts: Vec<(String, usize)> = Vec::new();
    for skill in skills {
        match counts.iter_mut().find(|(name, _)| name == &skill.category) {
            Some((_, count)) => *count += 1,
            None => counts.push((skill.category.clone(), 1)),
        }
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skill(id: u32, name: &str, category: &str) -> Skill {
        Skill {
            id,
            name: name.to_string(),
            category: category.to_string(),
            logo: format!("assets/logos/{}.svg", name.to_lowercase()),
        }
    }

    #[test]
    fn categories_keep_first_seen_order_with_counts() {
        let skills = vec![
            skill(1, "Figma", "UI/UX Design"),
            skill(2, "Rust", "Backend"),
            skill(3, "Sketch", "UI/UX Design"),
            skill(4, "CSS", "Frontend"),
        ];
        assert_eq!(
            category_counts(&skills),
            vec![
                ("UI/UX Design".to_string(), 2),
                ("Backend".to_string(), 1),
                ("Frontend".to_string(), 1),
            ]
        );
    }

    #[test]
    fn filter_matches_by_category() {
        let rust = skill(1, "Rust", "Backend");
        assert!(SkillFilter::All.matches(&rust));
        assert!(SkillFilter::Category("Backend".to_string()).matches(&rust));
        assert!(!SkillFilter::Category("Frontend".to_string()).matches(&rust));
    }

    #[test]
    fn document_deserializes() {
        let json = r#"{
            "skills": [
                { "id": 1, "name": "Figma", "category": "UI/UX Design", "logo": "assets/logos/figma.svg" }
            ]
        }"#;
        let doc: SkillsDocument = serde_json::from_str(json).unwrap();
        assert_eq!(doc.skills.len(), 1);
        assert_eq!(doc.skills[0].name, "Figma");
    }
}
