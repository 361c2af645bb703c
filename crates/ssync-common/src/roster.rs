//! Built-in demo roster.
//!
//! Fixture profiles for the demo surfaces; a production deployment
//! resolves candidates from the profile store before calling the engine.

use crate::{CandidateProfile, Skill, SkillLevel};

pub fn demo_candidates() -> Vec<CandidateProfile> {
    vec![
        CandidateProfile {
            id: "1".into(),
            name: "Sarah Chen".into(),
            title: "Backend Engineer".into(),
            skills: vec![
                Skill::new("Node.js", SkillLevel::Expert),
                Skill::new("PostgreSQL", SkillLevel::Advanced),
                Skill::new("Python", SkillLevel::Advanced),
                Skill::new("GraphQL", SkillLevel::Intermediate),
            ],
            endorsements: 45,
        },
        CandidateProfile {
            id: "2".into(),
            name: "Marcus Williams".into(),
            title: "UI/UX Designer".into(),
            skills: vec![
                Skill::new("Figma", SkillLevel::Expert),
                Skill::new("CSS", SkillLevel::Advanced),
                Skill::new("React", SkillLevel::Intermediate),
                Skill::new("Design Systems", SkillLevel::Advanced),
            ],
            endorsements: 32,
        },
        CandidateProfile {
            id: "3".into(),
            name: "Priya Patel".into(),
            title: "DevOps Engineer".into(),
            skills: vec![
                Skill::new("Kubernetes", SkillLevel::Expert),
                Skill::new("AWS", SkillLevel::Expert),
                Skill::new("Docker", SkillLevel::Advanced),
                Skill::new("Python", SkillLevel::Advanced),
            ],
            endorsements: 38,
        },
        CandidateProfile {
            id: "4".into(),
            name: "James Rodriguez".into(),
            title: "Full Stack Developer".into(),
            skills: vec![
                Skill::new("Vue.js", SkillLevel::Expert),
                Skill::new("Firebase", SkillLevel::Advanced),
                Skill::new("JavaScript", SkillLevel::Expert),
                Skill::new("Tailwind CSS", SkillLevel::Advanced),
            ],
            endorsements: 28,
        },
        CandidateProfile {
            id: "5".into(),
            name: "Emma Johnson".into(),
            title: "Data Scientist".into(),
            skills: vec![
                Skill::new("Python", SkillLevel::Expert),
                Skill::new("Machine Learning", SkillLevel::Advanced),
                Skill::new("TensorFlow", SkillLevel::Intermediate),
                Skill::new("Data Analysis", SkillLevel::Expert),
            ],
            endorsements: 41,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_roster_has_five_distinct_profiles() {
        let roster = demo_candidates();
        assert_eq!(roster.len(), 5);

        let mut ids: Vec<&str> = roster.iter().map(|c| c.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 5);

        assert!(roster.iter().all(|c| !c.skills.is_empty()));
    }
}
