use tracing::{debug, instrument};

use super::{
    reasons::generate_compatibility_reasons,
    scoring::{calculate_match_score_with_config, MatchScore, MatchingConfig},
};
use crate::{CandidateProfile, Skill};

/// One ranked candidate from a matching run. Derived per call, never
/// stored.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchResult {
    pub candidate_id: String,
    pub name: String,
    pub title: String,
    pub match_score: u8,
    pub compatibility_reasons: Vec<String>,
    pub skills: Vec<Skill>,
    pub avatar: String,
}

pub struct MatchingEngine {
    config: MatchingConfig,
}

impl MatchingEngine {
    pub fn new(config: MatchingConfig) -> Self {
        Self { config }
    }

    pub fn default() -> Self {
        Self::new(MatchingConfig::default())
    }

    /// Scores every roster candidate against the requester's skills and
    /// ranks them: match score descending, endorsements breaking ties.
    /// The sort is stable, so candidates tied on both keys keep their
    /// roster order across runs.
    #[instrument(skip(self, requester_skills, roster), fields(roster_size = roster.len()))]
    pub fn find_best_matches(
        &self,
        requester_skills: &[Skill],
        roster: &[CandidateProfile],
    ) -> Vec<MatchResult> {
        let mut scored: Vec<(&CandidateProfile, MatchScore)> = roster
            .iter()
            .map(|candidate| {
                let score =
                    calculate_match_score_with_config(&self.config, requester_skills, &candidate.skills);
                debug!(candidate_id = %candidate.id, total = score.total, "scored candidate");
                (candidate, score)
            })
            .collect();

        scored.sort_by(|(a, score_a), (b, score_b)| {
            score_b
                .total
                .cmp(&score_a.total)
                .then(b.endorsements.cmp(&a.endorsements))
        });

        scored
            .into_iter()
            .map(|(candidate, score)| MatchResult {
                candidate_id: candidate.id.clone(),
                name: candidate.name.clone(),
                title: candidate.title.clone(),
                match_score: score.total,
                compatibility_reasons: generate_compatibility_reasons(
                    requester_skills,
                    &candidate.skills,
                ),
                skills: candidate.skills.clone(),
                avatar: avatar_url(&candidate.name),
            })
            .collect()
    }
}

/// Deterministic avatar URL seeded on the candidate's display name.
pub fn avatar_url(name: &str) -> String {
    format!("https://api.dicebear.com/7.x/avataaars/svg?seed={name}")
}
