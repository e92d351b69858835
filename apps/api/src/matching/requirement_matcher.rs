//! Requirement Matcher — pluggable, trait-based scorer that measures résumé bullets
//! against job requirements.
//!
//! Default: `TokenOverlapScorer` (pure-Rust, deterministic, no remote call).
//!
//! `AppState` holds an `Arc<dyn RequirementScorer>`, chosen at startup.

use std::collections::BTreeSet;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;

// ────────────────────────────────────────────────────────────────────────────
// Data models
// ────────────────────────────────────────────────────────────────────────────

/// A single requirement taken from a job posting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Requirement {
    pub text: String,
    #[serde(default = "default_required")]
    pub is_required: bool,
}

fn default_required() -> bool {
    true
}

/// Best bullet found for one requirement.
#[derive(Debug, Clone, Serialize)]
pub struct RequirementMatch {
    pub requirement: String,
    pub is_required: bool,
    pub best_bullet: Option<String>,
    pub bullet_index: Option<usize>,
    pub strength: f32, // 0.0 – 1.0
    pub matched_terms: Vec<String>,
    pub missing_terms: Vec<String>,
}

/// A requirement no bullet covers well enough.
#[derive(Debug, Clone, Serialize)]
pub struct RequirementGap {
    pub requirement: String,
    pub is_required: bool,
    pub missing_terms: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MatchReport {
    pub overall_score: u32,                   // 0 – 100
    pub strong_matches: Vec<RequirementMatch>, // strength ≥ 0.75
    pub partial_matches: Vec<RequirementMatch>, // 0.4 – 0.74
    pub gaps: Vec<RequirementGap>,            // strength < 0.4
    pub recommendation: String,
    pub scorer_backend: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// Implement this to swap matching backends without touching the handler.
#[async_trait]
pub trait RequirementScorer: Send + Sync {
    async fn score(
        &self,
        bullets: &[String],
        requirements: &[Requirement],
    ) -> Result<MatchReport, AppError>;
}

/// Token-overlap scorer.
///
/// Algorithm:
/// 1. Tokenize bullets and requirements (lowercase, stop words dropped, plurals folded)
/// 2. strength = |req ∩ bullet| / |req| for the best bullet; ties go to the higher
///    Jaccard index, then the earlier bullet
/// 3. overall_score = Σ(strength × weight) / Σ(weight) × 100, required = 1.0, preferred = 0.5
/// 4. Classify: strong (≥0.75), partial (0.4–0.74), gap (<0.4)
pub struct TokenOverlapScorer;

#[async_trait]
impl RequirementScorer for TokenOverlapScorer {
    async fn score(
        &self,
        bullets: &[String],
        requirements: &[Requirement],
    ) -> Result<MatchReport, AppError> {
        Ok(compute_token_overlap(bullets, requirements))
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Core overlap algorithm
// ────────────────────────────────────────────────────────────────────────────

const STRONG_THRESHOLD: f32 = 0.75;
const PARTIAL_THRESHOLD: f32 = 0.4;
const REQUIRED_WEIGHT: f32 = 1.0;
const PREFERRED_WEIGHT: f32 = 0.5;

const STOP_WORDS: &[&str] = &[
    "a", "an", "and", "are", "as", "at", "be", "by", "for", "from", "have", "in", "into", "is",
    "it", "of", "on", "or", "our", "the", "their", "to", "we", "with", "you", "your", "will",
    "using", "experience", "ability", "strong", "plus", "preferred", "required", "years",
];

/// Lowercased, de-duplicated content tokens. `+` and `#` are kept so `c++` and `c#` survive.
pub fn tokenize(text: &str) -> BTreeSet<String> {
    text.to_lowercase()
        .split(|c: char| !(c.is_alphanumeric() || c == '+' || c == '#'))
        .filter(|t| t.chars().count() >= 2 && !STOP_WORDS.contains(t))
        .map(fold_plural)
        .collect()
}

fn fold_plural(token: &str) -> String {
    if token.chars().count() > 3 && token.ends_with('s') && !token.ends_with("ss") {
        token[..token.len() - 1].to_string()
    } else {
        token.to_string()
    }
}

struct Overlap {
    strength: f32,
    jaccard: f32,
    matched: BTreeSet<String>,
}

fn overlap(requirement: &BTreeSet<String>, bullet: &BTreeSet<String>) -> Overlap {
    let matched: BTreeSet<String> = requirement.intersection(bullet).cloned().collect();
    let union = requirement.union(bullet).count();
    let strength = if requirement.is_empty() {
        0.0
    } else {
        matched.len() as f32 / requirement.len() as f32
    };
    let jaccard = if union == 0 {
        0.0
    } else {
        matched.len() as f32 / union as f32
    };
    Overlap {
        strength,
        jaccard,
        matched,
    }
}

fn compute_token_overlap(bullets: &[String], requirements: &[Requirement]) -> MatchReport {
    if requirements.is_empty() {
        return MatchReport {
            overall_score: 0,
            strong_matches: vec![],
            partial_matches: vec![],
            gaps: vec![],
            recommendation: "No requirements supplied — cannot score match.".to_string(),
            scorer_backend: "token_overlap".to_string(),
        };
    }

    let bullet_tokens: Vec<BTreeSet<String>> = bullets.iter().map(|b| tokenize(b)).collect();

    let mut strong_matches = Vec::new();
    let mut partial_matches = Vec::new();
    let mut gaps = Vec::new();

    let mut total_weight = 0.0_f32;
    let mut total_score = 0.0_f32;

    for requirement in requirements {
        let req_tokens = tokenize(&requirement.text);
        let weight = if requirement.is_required {
            REQUIRED_WEIGHT
        } else {
            PREFERRED_WEIGHT
        };
        total_weight += weight;

        // Strictly-greater comparison keeps the earliest bullet on full ties
        let mut best: Option<(usize, Overlap)> = None;
        for (index, tokens) in bullet_tokens.iter().enumerate() {
            let candidate = overlap(&req_tokens, tokens);
            let better = match &best {
                None => candidate.strength > 0.0,
                Some((_, current)) => {
                    candidate.strength > current.strength
                        || (candidate.strength == current.strength
                            && candidate.jaccard > current.jaccard)
                }
            };
            if better {
                best = Some((index, candidate));
            }
        }

        let (bullet_index, strength, matched) = match best {
            Some((index, o)) => (Some(index), o.strength, o.matched),
            None => (None, 0.0, BTreeSet::new()),
        };
        total_score += strength * weight;

        let missing_terms: Vec<String> = req_tokens.difference(&matched).cloned().collect();

        if strength >= PARTIAL_THRESHOLD {
            let requirement_match = RequirementMatch {
                requirement: requirement.text.clone(),
                is_required: requirement.is_required,
                best_bullet: bullet_index.map(|i| bullets[i].clone()),
                bullet_index,
                strength,
                matched_terms: matched.into_iter().collect(),
                missing_terms,
            };
            if strength >= STRONG_THRESHOLD {
                strong_matches.push(requirement_match);
            } else {
                partial_matches.push(requirement_match);
            }
        } else {
            gaps.push(RequirementGap {
                requirement: requirement.text.clone(),
                is_required: requirement.is_required,
                missing_terms,
            });
        }
    }

    let overall_score = if total_weight > 0.0 {
        ((total_score / total_weight) * 100.0).round() as u32
    } else {
        0
    };

    let recommendation = build_recommendation(overall_score, &gaps);

    MatchReport {
        overall_score,
        strong_matches,
        partial_matches,
        gaps,
        recommendation,
        scorer_backend: "token_overlap".to_string(),
    }
}

/// Required gaps are listed ahead of preferred ones.
fn build_recommendation(score: u32, gaps: &[RequirementGap]) -> String {
    let mut ordered: Vec<&RequirementGap> = gaps.iter().collect();
    ordered.sort_by_key(|g| !g.is_required);
    let top_gaps: Vec<&str> = ordered
        .iter()
        .take(3)
        .map(|g| g.requirement.as_str())
        .collect();

    if score >= 80 {
        "Strong match. Your bullets directly cover the key requirements.".to_string()
    } else if score >= 60 {
        format!(
            "Moderate match ({score}/100). Consider adding bullets for: {}.",
            top_gaps.join("; ")
        )
    } else {
        format!(
            "Low match ({score}/100). Uncovered requirements: {}. Add evidence before applying.",
            top_gaps.join("; ")
        )
    }
}
