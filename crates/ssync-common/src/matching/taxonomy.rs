use std::collections::HashSet;

use strum::AsRefStr;

/// Skill category used to decide whether a candidate skill is
/// complementary to the requester's stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum SkillCategory {
    Frontend,
    Backend,
    Database,
    Devops,
    Design,
    Data,
}

/// Category membership, lowercase. Slice order is the resolution order:
/// dominant-category lookup takes the FIRST category containing any of
/// the requester's skills, so reordering entries changes scoring.
const CATEGORY_MEMBERS: &[(SkillCategory, &[&str])] = &[
    (
        SkillCategory::Frontend,
        &[
            "react",
            "vue.js",
            "angular",
            "svelte",
            "nextjs",
            "css",
            "html",
            "tailwind css",
        ],
    ),
    (
        SkillCategory::Backend,
        &["node.js", "python", "java", "go", "ruby", "rust", "graphql"],
    ),
    (
        SkillCategory::Database,
        &["postgresql", "mongodb", "redis", "firebase", "dynamodb"],
    ),
    (
        SkillCategory::Devops,
        &["kubernetes", "docker", "aws", "gcp", "azure", "jenkins"],
    ),
    (
        SkillCategory::Design,
        &["figma", "design systems", "ui/ux", "framer"],
    ),
    (
        SkillCategory::Data,
        &["machine learning", "tensorflow", "data analysis", "big data"],
    ),
];

/// Ordered lookup table from category to member skill names.
///
/// Owned by `MatchingConfig` so the table can be swapped or extended
/// without touching the scoring functions.
#[derive(Debug, Clone)]
pub struct SkillTaxonomy {
    categories: Vec<(SkillCategory, HashSet<String>)>,
}

impl Default for SkillTaxonomy {
    fn default() -> Self {
        Self::from_entries(
            CATEGORY_MEMBERS
                .iter()
                .map(|(category, members)| (*category, members.iter().map(|m| m.to_string()))),
        )
    }
}

impl SkillTaxonomy {
    /// Builds a taxonomy from `(category, members)` pairs. Entry order is
    /// preserved and becomes the resolution order; members are lowercased.
    pub fn from_entries<I, M>(entries: I) -> Self
    where
        I: IntoIterator<Item = (SkillCategory, M)>,
        M: IntoIterator<Item = String>,
    {
        let categories = entries
            .into_iter()
            .map(|(category, members)| {
                let members: HashSet<String> =
                    members.into_iter().map(|m| m.to_lowercase()).collect();
                (category, members)
            })
            .collect();
        Self { categories }
    }

    /// First category (in resolution order) containing the skill, or
    /// `None` for skills outside the taxonomy.
    pub fn classify(&self, skill: &str) -> Option<SkillCategory> {
        let needle = skill.to_lowercase();
        self.categories
            .iter()
            .find(|(_, members)| members.contains(&needle))
            .map(|(category, _)| *category)
    }

    /// The requester's dominant category: the first category containing
    /// ANY of the given skills. A python-heavy devops stack therefore
    /// resolves to backend, because backend precedes devops.
    pub fn dominant_category<S: AsRef<str>>(&self, skills: &[S]) -> Option<SkillCategory> {
        self.categories
            .iter()
            .find(|(_, members)| {
                skills
                    .iter()
                    .any(|skill| members.contains(&skill.as_ref().to_lowercase()))
            })
            .map(|(category, _)| *category)
    }
}
