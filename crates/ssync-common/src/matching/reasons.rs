use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::{Skill, SkillLevel};

/// Cap on the number of reasons attached to one match result.
const MAX_REASONS: usize = 3;

/// Expert-level skill count a candidate must exceed to earn the
/// high-expertise reason.
const EXPERT_SKILL_THRESHOLD: usize = 2;

static WORD_START: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\w").expect("valid word-start pattern"));

/// Up to three human-readable justifications, in fixed priority order:
/// shared skills, complementary skills, overall expertise. Reasons that
/// do not apply are skipped.
pub fn generate_compatibility_reasons(requester: &[Skill], candidate: &[Skill]) -> Vec<String> {
    let requester_names: Vec<String> = requester.iter().map(|s| s.name.to_lowercase()).collect();
    let candidate_names: Vec<String> = candidate.iter().map(|s| s.name.to_lowercase()).collect();

    let mut reasons = Vec::new();

    // Shared names in requester order, lowercased.
    let common: Vec<&str> = requester_names
        .iter()
        .filter(|name| candidate_names.contains(name))
        .map(String::as_str)
        .collect();
    if !common.is_empty() {
        reasons.push(format!("Shares expertise in {}", join_first_two(&common)));
    }

    // Candidate-only names in candidate order; the joined phrase is
    // title-cased as a whole, so the connective renders as "And".
    let complementary: Vec<&str> = candidate_names
        .iter()
        .filter(|name| !requester_names.contains(name))
        .map(String::as_str)
        .collect();
    if !complementary.is_empty() {
        reasons.push(format!(
            "Brings complementary skills: {}",
            title_case(&join_first_two(&complementary))
        ));
    }

    let expert_count = candidate
        .iter()
        .filter(|s| s.level == SkillLevel::Expert)
        .count();
    if expert_count > EXPERT_SKILL_THRESHOLD {
        reasons.push("High expertise level across core skills".to_string());
    }

    reasons.truncate(MAX_REASONS);
    reasons
}

fn join_first_two(names: &[&str]) -> String {
    names
        .iter()
        .take(2)
        .copied()
        .collect::<Vec<_>>()
        .join(" and ")
}

/// Uppercases the first character of every word in the input.
fn title_case(input: &str) -> String {
    WORD_START
        .replace_all(input, |caps: &Captures<'_>| caps[0].to_uppercase())
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skills(entries: &[(&str, SkillLevel)]) -> Vec<Skill> {
        entries
            .iter()
            .map(|(name, level)| Skill::new(*name, *level))
            .collect()
    }

    #[test]
    fn shared_skills_come_first_in_requester_order() {
        let requester = skills(&[
            ("React", SkillLevel::Expert),
            ("Node.js", SkillLevel::Advanced),
            ("Python", SkillLevel::Intermediate),
        ]);
        let candidate = skills(&[
            ("Python", SkillLevel::Expert),
            ("Node.js", SkillLevel::Expert),
        ]);

        let reasons = generate_compatibility_reasons(&requester, &candidate);
        assert_eq!(reasons[0], "Shares expertise in node.js and python");
    }

    #[test]
    fn shared_skill_names_are_lowercased() {
        let requester = skills(&[("Node.js", SkillLevel::Expert)]);
        let candidate = skills(&[("NODE.JS", SkillLevel::Expert)]);

        let reasons = generate_compatibility_reasons(&requester, &candidate);
        assert_eq!(reasons[0], "Shares expertise in node.js");
    }

    #[test]
    fn complementary_reason_title_cases_the_joined_phrase() {
        let requester = skills(&[("Node.js", SkillLevel::Expert)]);
        let candidate = skills(&[
            ("Node.js", SkillLevel::Expert),
            ("PostgreSQL", SkillLevel::Advanced),
            ("GraphQL", SkillLevel::Intermediate),
        ]);

        let reasons = generate_compatibility_reasons(&requester, &candidate);
        assert_eq!(
            reasons[1],
            "Brings complementary skills: Postgresql And Graphql"
        );
    }

    #[test]
    fn title_case_follows_word_boundaries() {
        assert_eq!(title_case("ui/ux and design systems"), "Ui/Ux And Design Systems");
        assert_eq!(title_case("machine learning"), "Machine Learning");
    }

    #[test]
    fn expertise_reason_requires_more_than_two_experts() {
        let requester = skills(&[("Figma", SkillLevel::Expert)]);
        let two_experts = skills(&[
            ("Kubernetes", SkillLevel::Expert),
            ("AWS", SkillLevel::Expert),
            ("Docker", SkillLevel::Advanced),
        ]);
        let three_experts = skills(&[
            ("Kubernetes", SkillLevel::Expert),
            ("AWS", SkillLevel::Expert),
            ("Terraform", SkillLevel::Expert),
        ]);

        let without = generate_compatibility_reasons(&requester, &two_experts);
        assert!(!without.contains(&"High expertise level across core skills".to_string()));

        let with = generate_compatibility_reasons(&requester, &three_experts);
        assert!(with.contains(&"High expertise level across core skills".to_string()));
    }

    #[test]
    fn reasons_are_capped_at_three() {
        let requester = skills(&[("Python", SkillLevel::Advanced)]);
        let candidate = skills(&[
            ("Python", SkillLevel::Expert),
            ("Kubernetes", SkillLevel::Expert),
            ("AWS", SkillLevel::Expert),
            ("Docker", SkillLevel::Expert),
        ]);

        let reasons = generate_compatibility_reasons(&requester, &candidate);
        assert_eq!(reasons.len(), 3);
        assert!(reasons[0].starts_with("Shares expertise in"));
        assert!(reasons[1].starts_with("Brings complementary skills:"));
        assert_eq!(reasons[2], "High expertise level across core skills");
    }

    #[test]
    fn no_reasons_for_an_empty_candidate() {
        let requester = skills(&[("React", SkillLevel::Expert)]);
        let reasons = generate_compatibility_reasons(&requester, &[]);
        assert!(reasons.is_empty());
    }
}
