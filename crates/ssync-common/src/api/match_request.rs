use serde::Deserialize;
use thiserror::Error;

use crate::{Skill, SkillLevel};

/// Matching request as posted by the GUI.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchRequest {
    pub skills: Vec<SkillInput>,
    /// Drop results scoring below this value.
    #[serde(default)]
    pub min_score: Option<u8>,
    /// Cap on the number of returned results.
    #[serde(default)]
    pub limit: Option<usize>,
}

/// Raw skill entry before defensive normalization.
#[derive(Debug, Clone, Deserialize)]
pub struct SkillInput {
    pub name: String,
    #[serde(default)]
    pub level: Option<String>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MatchRequestError {
    #[error("requester skill list is empty")]
    EmptySkillList,
    #[error("skill name at position {0} is empty")]
    EmptySkillName(usize),
}

impl MatchRequest {
    /// Input-constraint check for callers that want a hard failure
    /// instead of degenerate-input scoring. The engine itself never
    /// errors.
    pub fn validate(&self) -> Result<(), MatchRequestError> {
        if self.skills.is_empty() {
            return Err(MatchRequestError::EmptySkillList);
        }
        for (index, skill) in self.skills.iter().enumerate() {
            if skill.name.trim().is_empty() {
                return Err(MatchRequestError::EmptySkillName(index));
            }
        }
        Ok(())
    }

    /// Normalizes raw entries into typed skills. A missing or
    /// unrecognized level falls back to intermediate.
    pub fn to_skills(&self) -> Vec<Skill> {
        self.skills
            .iter()
            .map(|input| Skill {
                name: input.name.clone(),
                level: input
                    .level
                    .as_deref()
                    .map(SkillLevel::parse)
                    .unwrap_or_default(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request_json(body: serde_json::Value) -> MatchRequest {
        serde_json::from_value(body).expect("request deserializes")
    }

    #[test]
    fn deserializes_camel_case_fields() {
        let request = request_json(serde_json::json!({
            "skills": [{"name": "React", "level": "expert"}],
            "minScore": 40,
            "limit": 3
        }));

        assert_eq!(request.skills.len(), 1);
        assert_eq!(request.min_score, Some(40));
        assert_eq!(request.limit, Some(3));
    }

    #[test]
    fn filters_default_to_none() {
        let request = request_json(serde_json::json!({
            "skills": [{"name": "React", "level": "expert"}]
        }));

        assert_eq!(request.min_score, None);
        assert_eq!(request.limit, None);
    }

    #[test]
    fn normalizes_levels_defensively() {
        let request = request_json(serde_json::json!({
            "skills": [
                {"name": "React", "level": "Expert"},
                {"name": "Vim", "level": "wizard"},
                {"name": "Git"}
            ]
        }));

        let skills = request.to_skills();
        assert_eq!(skills[0].level, SkillLevel::Expert);
        assert_eq!(skills[1].level, SkillLevel::Intermediate);
        assert_eq!(skills[2].level, SkillLevel::Intermediate);
    }

    #[test]
    fn validate_rejects_empty_skill_list() {
        let request = request_json(serde_json::json!({"skills": []}));
        assert_eq!(request.validate(), Err(MatchRequestError::EmptySkillList));
    }

    #[test]
    fn validate_rejects_blank_names() {
        let request = request_json(serde_json::json!({
            "skills": [
                {"name": "React", "level": "expert"},
                {"name": "   "}
            ]
        }));
        assert_eq!(request.validate(), Err(MatchRequestError::EmptySkillName(1)));
    }

    #[test]
    fn validate_accepts_well_formed_requests() {
        let request = request_json(serde_json::json!({
            "skills": [{"name": "React", "level": "expert"}]
        }));
        assert_eq!(request.validate(), Ok(()));
    }
}
