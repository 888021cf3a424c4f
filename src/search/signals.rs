//! Per-candidate heuristics shared by the hybrid and rule-based scorers.
//!
//! All inputs are folded text; all outputs are in `0..=1` unless noted.

use itertools::Itertools;

use crate::profile::{CandidateProfile, MAX_RELATIONSHIP_STRENGTH};
use crate::requirements::tables::{AVAILABLE_TERMS, BUSY_TERMS};
use crate::requirements::{Budget, LocationPreference, Requirement};
use crate::text::{contains_term, fold};

pub const AVAILABLE: f64 = 1.0;
pub const NEUTRAL_AVAILABILITY: f64 = 0.5;
pub const BUSY: f64 = 0.2;

/// Relationship strength at or above which a candidate counts as close.
pub const HIGH_RELATIONSHIP: f64 = 7.0;

/// Busy wording wins over available wording; silence is neutral.
#[must_use]
pub fn availability(profile: &CandidateProfile) -> f64 {
    let status = fold(&profile.status_text());
    if BUSY_TERMS.iter().any(|term| contains_term(&status, term)) {
        BUSY
    } else if AVAILABLE_TERMS.iter().any(|term| contains_term(&status, term)) {
        AVAILABLE
    } else {
        NEUTRAL_AVAILABILITY
    }
}

/// How well the candidate's location suits the requested arrangement.
///
/// Remote work fits anyone. Hybrid prefers a known location. Local work
/// wants the candidate's city to appear in the description.
#[must_use]
pub fn location_fit(locations: &[String], requirement: &Requirement) -> f64 {
    let has_location = !locations.is_empty();
    match requirement.location {
        LocationPreference::Remote => 1.0,
        LocationPreference::Hybrid => {
            if has_location {
                0.8
            } else {
                0.5
            }
        }
        LocationPreference::Local => {
            if !has_location {
                return 0.2;
            }
            let description = fold(&requirement.description);
            if locations
                .iter()
                .any(|place| contains_term(&description, &fold(place)))
            {
                1.0
            } else {
                0.6
            }
        }
    }
}

/// `0.4·relationship/10 + 0.3·availability + 0.3·location_fit`.
#[must_use]
pub fn proximity(relationship: f64, availability: f64, location_fit: f64) -> f64 {
    0.4 * (relationship / MAX_RELATIONSHIP_STRENGTH) + 0.3 * availability + 0.3 * location_fit
}

/// Cost proxy from relationship strength; there is no real price field.
///
/// Weak ties are assumed to cost more, so they are penalised against tight
/// budgets and ignored against generous ones.
#[must_use]
pub fn budget_penalty(relationship: f64, budget: Budget) -> f64 {
    match budget {
        Budget::Low if relationship < 5.0 => (5.0 - relationship) / 5.0,
        Budget::Medium if relationship < 3.0 => (3.0 - relationship) / 6.0,
        _ => 0.0,
    }
}

/// Requirement roles this candidate plausibly fills, in requirement order.
///
/// A role matches when one of the candidate's own roles contains it, or when
/// every word of it (three letters or more) appears in the candidate text.
#[must_use]
pub fn matched_roles(
    required: &[String],
    candidate_roles: &[String],
    folded_text: &str,
) -> Vec<String> {
    let candidate_roles: Vec<String> = candidate_roles.iter().map(|r| fold(r)).collect();
    required
        .iter()
        .filter(|role| {
            let wanted = fold(role);
            if candidate_roles.iter().any(|own| own.contains(&wanted)) {
                return true;
            }
            let words: Vec<&str> = wanted
                .split(|c: char| !c.is_alphanumeric())
                .filter(|w| w.len() >= 3)
                .collect();
            !words.is_empty() && words.iter().all(|w| contains_term(folded_text, w))
        })
        .cloned()
        .unique()
        .collect()
}

/// True when some candidate role is exactly one of the required roles.
#[must_use]
pub fn exact_role_match(required: &[String], candidate_roles: &[String]) -> bool {
    candidate_roles
        .iter()
        .any(|own| required.iter().any(|role| fold(role) == fold(own)))
}

/// Requirement skills found among the candidate's skills, services or
/// expertise, in requirement order.
#[must_use]
pub fn matched_skills(required: &[String], profile_items: &[&String]) -> Vec<String> {
    let items: Vec<String> = profile_items.iter().map(|item| fold(item)).collect();
    required
        .iter()
        .filter(|skill| {
            let wanted = fold(skill);
            items.iter().any(|item| contains_term(item, &wanted))
        })
        .cloned()
        .unique()
        .collect()
}

/// True when a required skill equals one of the candidate's listed items.
#[must_use]
pub fn exact_skill_match(required: &[String], profile_items: &[&String]) -> bool {
    profile_items
        .iter()
        .any(|item| required.iter().any(|skill| fold(skill) == fold(item)))
}

/// Skills, services and expertise of a profile as one list.
#[must_use]
pub fn skill_items(profile: &CandidateProfile) -> Vec<&String> {
    profile
        .skills
        .iter()
        .chain(profile.services.iter())
        .chain(profile.expertise.iter())
        .collect()
}

/// Candidate tags mentioned in the folded description.
#[must_use]
pub fn matched_tags(tags: &[String], folded_description: &str) -> Vec<String> {
    tags.iter()
        .filter(|tag| contains_term(folded_description, &fold(tag)))
        .cloned()
        .unique()
        .collect()
}

/// Query terms occurring anywhere (substring) in the candidate text.
#[must_use]
pub fn matched_terms(query_terms: &[String], folded_text: &str) -> Vec<String> {
    query_terms
        .iter()
        .filter(|term| folded_text.contains(term.as_str()))
        .cloned()
        .collect()
}

/// The requirement names languages and the candidate speaks none of them.
#[must_use]
pub fn language_mismatch(required: &[String], spoken: &[String]) -> bool {
    if required.is_empty() {
        return false;
    }
    let spoken: Vec<String> = spoken.iter().map(|l| fold(l)).collect();
    !required.iter().any(|language| {
        let wanted = fold(language);
        spoken.iter().any(|own| own == &wanted)
    })
}
