//! Signal extraction — regex tables that pull team sizes, budgets, executive exposure
//! and company-size hints out of free-text power phrases.
//!
//! Every extractor is total: text that fails a pattern contributes nothing.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::models::career::CompanySize;
use crate::models::vault::VaultItem;

static MANAGEMENT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(?:led|managed|directed|guided|supervised|oversaw|coordinated|built\s+team|hired|recruited|coached|mentored|spearheaded|headed|commanded|governed)\b",
    )
    .unwrap()
});

/// Ordered most specific first. Capture group 1 is the head count.
static TEAM_SIZE_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        Regex::new(r"(?i)\b(?:team|group|crew|staff)\s+of\s+(\d+)").unwrap(),
        Regex::new(r"(?i)\b(\d+)\+?\s+(?:engineers|people|reports|employees|staff|members)\b")
            .unwrap(),
        Regex::new(r"(?i)\b(?:over|managed|supervised|led)\s+(\d+)").unwrap(),
        Regex::new(r"(?i)\b(\d+)\s*[-–]\s*\d+\s+(?:rigs|teams|groups|people)\b").unwrap(),
    ]
});

/// Whole words only, with an optional plural `s`.
static EXECUTIVE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(?:board|c-suite|ceo|cto|cfo|coo|vp|executive\s+team|presented\s+to\s+leadership|senior\s+leadership)s?\b",
    )
    .unwrap()
});

static BUDGET_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\$\s?\d|\b(?:budget|p&l|revenue)\b|\bcost\s+sav").unwrap()
});

/// Ordered. Capture group 1 is the amount, group 2 the optional unit.
static BUDGET_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        Regex::new(
            r"(?i)\$\s?(\d{1,3}(?:,\d{3})+(?:\.\d+)?|\d+(?:\.\d+)?)\s*(million|billion|thousand|mm|m|k|b)?\b",
        )
        .unwrap(),
        Regex::new(
            r"(?i)\b(\d{1,3}(?:,\d{3})+(?:\.\d+)?|\d+(?:\.\d+)?)\s+(million|billion|thousand)\b",
        )
        .unwrap(),
    ]
});

static STARTUP_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:startup|seed|series\s+[ab]\b|early[\s-]stage)").unwrap()
});

static ENTERPRISE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:enterprise|fortune\s+\d+|global|international|f500)").unwrap()
});

/// Matched case-insensitively as substrings of each stated skill.
pub const TECH_KEYWORDS: &[&str] = &[
    "python",
    "java",
    "javascript",
    "typescript",
    "aws",
    "azure",
    "gcp",
    "kubernetes",
    "docker",
    "sql",
    "react",
    "angular",
    "vue",
    "api",
    "microservice",
    "cloud",
];

/// Matched case-insensitively as substrings of each soft skill.
pub const LEADERSHIP_SOFT_SKILLS: &[&str] = &[
    "communication",
    "leadership",
    "mentoring",
    "coaching",
    "collaboration",
];

/// Raw signals pulled from a vault before any classification happens.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CareerSignals {
    pub management_phrase_count: usize,
    pub team_sizes: Vec<u32>,
    pub executive_phrase_count: usize,
    pub budget_sizes: Vec<f64>,
    pub company_sizes: Vec<CompanySize>,
}

impl CareerSignals {
    pub fn max_team_size(&self) -> u32 {
        self.team_sizes.iter().copied().max().unwrap_or(0)
    }
}

pub fn extract_signals(power_phrases: &[VaultItem]) -> CareerSignals {
    let mut signals = CareerSignals::default();

    for phrase in power_phrases.iter().map(VaultItem::as_str) {
        if is_management_phrase(phrase) {
            signals.management_phrase_count += 1;
            if let Some(size) = extract_team_size(phrase) {
                signals.team_sizes.push(size);
            }
        }

        if is_executive_phrase(phrase) {
            signals.executive_phrase_count += 1;
        }

        if is_budget_phrase(phrase) {
            if let Some(amount) = extract_budget(phrase) {
                signals.budget_sizes.push(amount);
            }
        }

        let size = classify_company_size(phrase);
        if !signals.company_sizes.contains(&size) {
            signals.company_sizes.push(size);
        }
    }

    signals
}

pub fn is_management_phrase(phrase: &str) -> bool {
    MANAGEMENT_RE.is_match(phrase)
}

pub fn is_executive_phrase(phrase: &str) -> bool {
    EXECUTIVE_RE.is_match(phrase)
}

pub fn is_budget_phrase(phrase: &str) -> bool {
    BUDGET_RE.is_match(phrase)
}

/// First pattern that matches with a representable number wins.
pub fn extract_team_size(phrase: &str) -> Option<u32> {
    TEAM_SIZE_PATTERNS.iter().find_map(|re| {
        re.captures(phrase)
            .and_then(|caps| caps.get(1))
            .and_then(|m| m.as_str().parse::<u32>().ok())
    })
}

/// Returns the budget in raw currency units.
pub fn extract_budget(phrase: &str) -> Option<f64> {
    BUDGET_PATTERNS
        .iter()
        .find_map(|re| re.captures(phrase).and_then(|caps| budget_amount(&caps)))
}

fn budget_amount(caps: &Captures<'_>) -> Option<f64> {
    let amount: f64 = caps.get(1)?.as_str().replace(',', "").parse().ok()?;
    let unit = caps
        .get(2)
        .map(|m| m.as_str().to_ascii_lowercase())
        .unwrap_or_default();
    Some(amount * unit_multiplier(&unit)).filter(|value| value.is_finite())
}

fn unit_multiplier(unit: &str) -> f64 {
    match unit {
        "k" | "thousand" => 1e3,
        "m" | "mm" | "million" => 1e6,
        "b" | "billion" => 1e9,
        _ => 1.0,
    }
}

/// Startup markers take precedence over enterprise markers; anything else is midmarket.
pub fn classify_company_size(phrase: &str) -> CompanySize {
    if STARTUP_RE.is_match(phrase) {
        CompanySize::Startup
    } else if ENTERPRISE_RE.is_match(phrase) {
        CompanySize::Enterprise
    } else {
        CompanySize::Midmarket
    }
}

pub fn count_keyword_hits(items: &[VaultItem], keywords: &[&str]) -> usize {
    items
        .iter()
        .filter(|item| {
            let lower = item.as_str().to_lowercase();
            keywords.iter().any(|kw| lower.contains(kw))
        })
        .count()
}
