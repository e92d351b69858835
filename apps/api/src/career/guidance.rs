//! Career level guidance — static coaching focus per seniority level.
//!
//! Consumed by prompt construction downstream to decide which gap-analysis questions to surface.

use crate::models::career::Seniority;

/// Returns guidance for a seniority label. Unrecognized labels get the Mid-Level IC text.
pub fn career_level_guidance(level: &str) -> &'static str {
    guidance_for(resolve_level(level))
}

/// Maps a label to its seniority, defaulting to Mid-Level IC.
pub fn resolve_level(level: &str) -> Seniority {
    Seniority::from_label(level).unwrap_or(Seniority::MidLevelIc)
}

pub fn guidance_for(level: Seniority) -> &'static str {
    match level {
        Seniority::JuniorIc => {
            "FOCUS: Technical fundamentals, learning velocity, and concrete project contributions.\n\
             AVOID: Questions about managing people, budgets, or organizational strategy.\n\
             GAP CATEGORIES: Core skills, project outcomes, tooling familiarity, collaboration."
        }
        Seniority::MidLevelIc => {
            "FOCUS: Ownership of features end-to-end, technical depth, and measurable impact.\n\
             AVOID: Questions about executive presence or large-scale org design.\n\
             GAP CATEGORIES: Quantified results, technical breadth, peer mentoring, cross-team work."
        }
        Seniority::SeniorIc => {
            "FOCUS: System design, technical leadership without authority, and mentoring.\n\
             AVOID: Questions that assume direct reports or P&L ownership.\n\
             GAP CATEGORIES: Architecture decisions, influence on roadmap, mentoring outcomes, scale."
        }
        Seniority::StaffPrincipalIc => {
            "FOCUS: Cross-organization technical strategy, multi-team influence, and long-range bets.\n\
             AVOID: Questions about day-to-day people management or hiring pipelines.\n\
             GAP CATEGORIES: Org-wide impact, technical vision, standards adoption, executive communication."
        }
        Seniority::TeamLead => {
            "FOCUS: Balancing hands-on delivery with team coordination and growth of teammates.\n\
             AVOID: Questions about department budgets or board-level communication.\n\
             GAP CATEGORIES: Team delivery metrics, coaching, process improvement, stakeholder alignment."
        }
        Seniority::Manager => {
            "FOCUS: Team performance, hiring, coaching, and delivery predictability.\n\
             AVOID: Deep implementation details and individual coding output.\n\
             GAP CATEGORIES: Team size and growth, retention, performance management, delivery outcomes."
        }
        Seniority::SeniorManager => {
            "FOCUS: Managing managers, multi-team planning, and budget awareness.\n\
             AVOID: Questions centered on individual technical contributions.\n\
             GAP CATEGORIES: Org design, budget scope, cross-functional partnerships, leadership pipeline."
        }
        Seniority::Director => {
            "FOCUS: Organizational strategy, budget ownership, and executive stakeholder management.\n\
             AVOID: Tactical sprint-level or single-project questions.\n\
             GAP CATEGORIES: Budget and headcount scale, strategic initiatives, executive exposure, business outcomes."
        }
        Seniority::Vp => {
            "FOCUS: Business-level outcomes, P&L accountability, and board or C-suite communication.\n\
             AVOID: Team-level execution details and hands-on technical questions.\n\
             GAP CATEGORIES: Revenue and cost impact, company-wide transformation, board exposure, talent strategy."
        }
        Seniority::CLevel => {
            "FOCUS: Company vision, investor and board relationships, and enterprise-wide results.\n\
             AVOID: Functional execution details below the executive team.\n\
             GAP CATEGORIES: Market positioning, fundraising or M&A, company growth metrics, governance."
        }
    }
}
