pub mod api;
pub mod logging;
pub mod matching;
pub mod roster;

use serde::{Deserialize, Serialize};
use strum::AsRefStr;

/// Proficiency attached to a single skill. Variant order follows rank,
/// so `Ord` agrees with `rank()`.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum SkillLevel {
    Beginner,
    #[default]
    Intermediate,
    Advanced,
    Expert,
}

impl SkillLevel {
    /// Numeric rank used by level-alignment scoring (beginner=1 … expert=4).
    pub fn rank(self) -> u8 {
        match self {
            SkillLevel::Beginner => 1,
            SkillLevel::Intermediate => 2,
            SkillLevel::Advanced => 3,
            SkillLevel::Expert => 4,
        }
    }

    /// Case-insensitive parse. Anything unrecognized lands on
    /// `Intermediate` so malformed input still scores.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "beginner" => SkillLevel::Beginner,
            "intermediate" => SkillLevel::Intermediate,
            "advanced" => SkillLevel::Advanced,
            "expert" => SkillLevel::Expert,
            _ => SkillLevel::Intermediate,
        }
    }
}

// Shared data models consumed by the matching modules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub level: SkillLevel,
}

impl Skill {
    pub fn new(name: impl Into<String>, level: SkillLevel) -> Self {
        Self {
            name: name.into(),
            level,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CandidateProfile {
    pub id: String,
    pub name: String,
    pub title: String,
    pub skills: Vec<Skill>,
    pub endorsements: u32,
}
