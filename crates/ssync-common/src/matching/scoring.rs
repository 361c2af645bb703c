use super::taxonomy::SkillTaxonomy;
use crate::Skill;

/// Default component weights. Overlap + complementary + level caps must
/// add up to the 100-point score scale.
pub const DEFAULT_WEIGHTS: ScoreWeights = ScoreWeights {
    overlap: 30.0,
    complementary: 40.0,
    level: 30.0,
};

#[derive(Debug, Clone, Copy)]
pub struct ScoreWeights {
    pub overlap: f64,
    pub complementary: f64,
    pub level: f64,
}

impl ScoreWeights {
    pub fn sum(&self) -> f64 {
        self.overlap + self.complementary + self.level
    }
}

#[derive(Debug, Clone)]
pub struct MatchingConfig {
    pub weights: ScoreWeights,
    /// Points deducted from the level component per rank of average-level
    /// distance between requester and candidate.
    pub level_penalty_per_rank: f64,
    pub taxonomy: SkillTaxonomy,
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            weights: DEFAULT_WEIGHTS,
            level_penalty_per_rank: 5.0,
            taxonomy: SkillTaxonomy::default(),
        }
    }
}

/// Per-component scores before rounding.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreBreakdown {
    pub overlap: f64,
    pub complementary: f64,
    pub level: f64,
}

impl ScoreBreakdown {
    pub fn total(&self) -> f64 {
        self.overlap + self.complementary + self.level
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MatchScore {
    /// Rounded total, always within [0, 100].
    pub total: u8,
    pub breakdown: ScoreBreakdown,
}

/// Compatibility score with the default configuration.
pub fn calculate_match_score(requester: &[Skill], candidate: &[Skill]) -> MatchScore {
    calculate_match_score_with_config(&MatchingConfig::default(), requester, candidate)
}

/// Compatibility score: overlap + complementary + level alignment,
/// rounded and clamped to [0, 100]. Total function — empty skill lists
/// on either side degrade to zero contributions and a neutral level
/// average instead of faulting.
pub fn calculate_match_score_with_config(
    config: &MatchingConfig,
    requester: &[Skill],
    candidate: &[Skill],
) -> MatchScore {
    let requester_names = lowercase_names(requester);
    let candidate_names = lowercase_names(candidate);

    let breakdown = ScoreBreakdown {
        overlap: overlap_score(config, &requester_names, &candidate_names),
        complementary: complementary_score(config, &requester_names, &candidate_names),
        level: level_alignment_score(config, requester, candidate),
    };

    let total = breakdown.total().round().clamp(0.0, 100.0) as u8;
    MatchScore { total, breakdown }
}

fn lowercase_names(skills: &[Skill]) -> Vec<String> {
    skills.iter().map(|s| s.name.to_lowercase()).collect()
}

/// Shared-skill component: common names over the larger list size.
fn overlap_score(config: &MatchingConfig, requester: &[String], candidate: &[String]) -> f64 {
    let denominator = requester.len().max(candidate.len());
    if denominator == 0 {
        return 0.0;
    }

    let common = requester.iter().filter(|name| candidate.contains(name)).count();
    common as f64 / denominator as f64 * config.weights.overlap
}

/// Diversity component: candidate skills the requester lacks, outside the
/// requester's dominant category, over the candidate's skill count.
fn complementary_score(config: &MatchingConfig, requester: &[String], candidate: &[String]) -> f64 {
    if candidate.is_empty() {
        return 0.0;
    }

    let dominant = config.taxonomy.dominant_category(requester);
    let complementary = candidate
        .iter()
        .filter(|name| !requester.contains(name))
        // Option equality: two unclassified skills carry the same absent
        // category and do NOT count as complementary.
        .filter(|name| config.taxonomy.classify(name) != dominant)
        .count();

    complementary as f64 / candidate.len() as f64 * config.weights.complementary
}

/// Rank assumed for a side with no skills to average.
const NEUTRAL_LEVEL_RANK: f64 = 2.0;

fn average_level_rank(skills: &[Skill]) -> f64 {
    if skills.is_empty() {
        return NEUTRAL_LEVEL_RANK;
    }

    let sum: u32 = skills.iter().map(|s| u32::from(s.level.rank())).sum();
    f64::from(sum) / skills.len() as f64
}

/// Proximity component: full weight at equal average rank, minus a fixed
/// penalty per rank of distance, floored at zero.
fn level_alignment_score(config: &MatchingConfig, requester: &[Skill], candidate: &[Skill]) -> f64 {
    let diff = (average_level_rank(requester) - average_level_rank(candidate)).abs();
    (config.weights.level - diff * config.level_penalty_per_rank).max(0.0)
}
