//! Career Context Analyzer — infers seniority, archetype and next role from a vault snapshot.
//!
//! Pure and deterministic: no I/O, no clock, no randomness. Every list may be empty.
//!
//! Pipeline:
//! 1. Extract raw signals from power phrases (`signals::extract_signals`)
//! 2. Classify seniority via a first-match decision table
//! 3. Compute technical / leadership / strategic depth
//! 4. Classify impact scale and archetype
//! 5. Look up the next likely role

use once_cell::sync::Lazy;
use regex::Regex;

use crate::career::progression::next_likely_role;
use crate::career::signals::{
    count_keyword_hits, extract_signals, CareerSignals, LEADERSHIP_SOFT_SKILLS, TECH_KEYWORDS,
};
use crate::models::career::{CareerArchetype, CareerContext, ImpactScale, Seniority};
use crate::models::vault::{VaultData, VaultItem};

const MAX_RESPONSIBILITIES: usize = 8;
const RESPONSIBILITY_FALLBACK_CHARS: usize = 60;
const EXECUTIVE_PRESENCE_THRESHOLD: usize = 15;
const MIN_YEARS_OF_EXPERIENCE: u32 = 3;

static LEADING_VERB_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^\s*([a-z]+(?:ed|ing))\s+([^,.]+)").unwrap());

pub fn analyze_career_context(vault: &VaultData) -> CareerContext {
    let signals = extract_signals(&vault.power_phrases);
    let max_team_size = signals.max_team_size();

    let has_management_experience = signals.management_phrase_count > 0;
    let has_executive_exposure = signals.executive_phrase_count > 0
        || vault.executive_presence.len() > EXECUTIVE_PRESENCE_THRESHOLD;
    let has_budget_ownership = !signals.budget_sizes.is_empty();

    let (inferred_seniority, seniority_confidence) = infer_seniority(&SeniorityInputs {
        has_executive_exposure,
        has_budget_ownership,
        has_management_experience,
        max_team_size,
        power_phrase_count: vault.power_phrases.len(),
        leadership_count: vault.leadership.len(),
    });

    let years_of_experience = estimate_years_of_experience(
        vault.power_phrases.len(),
        max_team_size,
        vault.certifications.len(),
    );

    let technical_hits = count_keyword_hits(&vault.skills, TECH_KEYWORDS);
    let leadership_hits =
        vault.leadership.len() + count_keyword_hits(&vault.soft_skills, LEADERSHIP_SOFT_SKILLS);
    let (technical_depth, leadership_depth) = balance_depths(technical_hits, leadership_hits);
    let strategic_depth = strategic_depth(has_executive_exposure, has_management_experience);

    let impact_scale = classify_impact_scale(max_team_size, has_management_experience);
    let career_archetype = classify_archetype(
        technical_depth,
        leadership_depth,
        strategic_depth,
        has_management_experience,
    );
    let next_likely_role = next_likely_role(inferred_seniority, career_archetype).to_string();

    let CareerSignals {
        team_sizes,
        budget_sizes,
        company_sizes,
        ..
    } = signals;

    CareerContext {
        inferred_seniority,
        seniority_confidence,
        years_of_experience,
        has_management_experience,
        team_sizes_managed: team_sizes,
        has_executive_exposure,
        has_budget_ownership,
        budget_sizes_managed: budget_sizes,
        company_sizes,
        technical_depth,
        leadership_depth,
        strategic_depth,
        primary_responsibilities: primary_responsibilities(&vault.power_phrases),
        impact_scale,
        next_likely_role,
        career_archetype,
    }
}

#[derive(Debug, Clone, Copy)]
struct SeniorityInputs {
    has_executive_exposure: bool,
    has_budget_ownership: bool,
    has_management_experience: bool,
    max_team_size: u32,
    power_phrase_count: usize,
    leadership_count: usize,
}

/// First matching rule wins. `TeamLead` and `CLevel` are never produced here.
fn infer_seniority(inputs: &SeniorityInputs) -> (Seniority, u8) {
    let SeniorityInputs {
        has_executive_exposure: exec,
        has_budget_ownership: budget,
        has_management_experience: mgmt,
        max_team_size: team,
        power_phrase_count: phrases,
        leadership_count: leadership,
    } = *inputs;

    if exec && budget && team >= 50 {
        (Seniority::Vp, 90)
    } else if exec && team >= 30 {
        (Seniority::Director, 85)
    } else if mgmt && team >= 15 {
        (Seniority::SeniorManager, 80)
    } else if mgmt && team >= 5 {
        (Seniority::Manager, 85)
    } else if phrases > 50 && leadership > 10 {
        (Seniority::StaffPrincipalIc, 75)
    } else if phrases > 30 {
        (Seniority::SeniorIc, 80)
    } else if phrases > 15 {
        (Seniority::MidLevelIc, 85)
    } else {
        (Seniority::JuniorIc, 70)
    }
}

fn estimate_years_of_experience(
    power_phrase_count: usize,
    max_team_size: u32,
    certification_count: usize,
) -> u32 {
    let from_phrases = saturating_u32(power_phrase_count / 6);
    let from_team = if max_team_size > 0 {
        max_team_size / 3 + 5
    } else {
        0
    };
    let from_certifications = saturating_u32(certification_count).saturating_mul(2);

    from_phrases
        .max(from_team)
        .max(from_certifications)
        .max(MIN_YEARS_OF_EXPERIENCE)
}

/// Returns (technical_depth, leadership_depth) as rounded percentages of their combined hits.
fn balance_depths(technical_hits: usize, leadership_hits: usize) -> (u8, u8) {
    let total = (technical_hits + leadership_hits).max(1) as f64;
    let pct = |hits: usize| (100.0 * hits as f64 / total).round() as u8;
    (pct(technical_hits), pct(leadership_hits))
}

fn strategic_depth(has_executive_exposure: bool, has_management_experience: bool) -> u8 {
    if has_executive_exposure {
        75
    } else if has_management_experience {
        40
    } else {
        15
    }
}

fn classify_impact_scale(max_team_size: u32, has_management_experience: bool) -> ImpactScale {
    match max_team_size {
        50.. => ImpactScale::Company,
        20.. => ImpactScale::Organization,
        5.. => ImpactScale::Department,
        _ if has_management_experience => ImpactScale::Team,
        _ => ImpactScale::Individual,
    }
}

fn classify_archetype(
    technical_depth: u8,
    leadership_depth: u8,
    strategic_depth: u8,
    has_management_experience: bool,
) -> CareerArchetype {
    if technical_depth > 70 && !has_management_experience {
        CareerArchetype::DeepTechnical
    } else if technical_depth > 50 && has_management_experience {
        CareerArchetype::TechLeadership
    } else if has_management_experience && leadership_depth > 60 {
        CareerArchetype::PeopleManagement
    } else if strategic_depth > 60 {
        CareerArchetype::StrategicExecutive
    } else {
        CareerArchetype::Generalist
    }
}

/// Summarizes the first power phrases as "<verb> <first clause>", falling back to a
/// truncated copy of the phrase when it does not open with an -ed/-ing verb.
fn primary_responsibilities(power_phrases: &[VaultItem]) -> Vec<String> {
    power_phrases
        .iter()
        .take(MAX_RESPONSIBILITIES)
        .map(|item| summarize_phrase(item.as_str()))
        .filter(|summary| !summary.trim().is_empty())
        .collect()
}

fn summarize_phrase(phrase: &str) -> String {
    match LEADING_VERB_RE.captures(phrase) {
        Some(caps) => format!("{} {}", &caps[1], caps[2].trim()),
        None => phrase.chars().take(RESPONSIBILITY_FALLBACK_CHARS).collect(),
    }
}

fn saturating_u32(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}
