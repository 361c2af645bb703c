use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::match_request::MatchRequest;
use crate::matching::pipeline::MatchResult;
use crate::Skill;

/// One ranked entry in the GUI wire shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResponse {
    pub user_id: String,
    pub name: String,
    pub title: String,
    pub match_score: u8,
    pub compatibility_reasons: Vec<String>,
    pub skills: Vec<Skill>,
    pub avatar: String,
}

impl From<&MatchResult> for MatchResponse {
    fn from(result: &MatchResult) -> Self {
        Self {
            user_id: result.candidate_id.clone(),
            name: result.name.clone(),
            title: result.title.clone(),
            match_score: result.match_score,
            compatibility_reasons: result.compatibility_reasons.clone(),
            skills: result.skills.clone(),
            avatar: result.avatar.clone(),
        }
    }
}

/// Envelope for one matching run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchRunResponse {
    pub matches: Vec<MatchResponse>,
    pub engine_version: String,
    pub matched_at: DateTime<Utc>,
}

impl MatchRunResponse {
    /// Applies the request's presentation filters (`min_score`, then
    /// `limit`) to an already-ranked result list and stamps the run
    /// metadata. The timestamp is supplied by the caller so the envelope
    /// stays a pure function of its inputs.
    pub fn build(
        results: &[MatchResult],
        request: &MatchRequest,
        matched_at: DateTime<Utc>,
    ) -> Self {
        let mut matches: Vec<MatchResponse> = results
            .iter()
            .filter(|result| {
                request
                    .min_score
                    .map_or(true, |min| result.match_score >= min)
            })
            .map(MatchResponse::from)
            .collect();

        if let Some(limit) = request.limit {
            matches.truncate(limit);
        }

        Self {
            matches,
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
            matched_at,
        }
    }
}
