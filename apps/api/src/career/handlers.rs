//! Axum route handlers for the Career Context API.

use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::career::analyzer::analyze_career_context;
use crate::career::guidance::{career_level_guidance, guidance_for, resolve_level};
use crate::errors::AppError;
use crate::models::career::{CareerContext, Seniority};
use crate::models::vault::VaultData;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeResponse {
    pub career_context: CareerContext,
    pub level_guidance: &'static str,
}

#[derive(Debug, Deserialize)]
pub struct GuidanceQuery {
    #[serde(default)]
    pub level: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GuidanceResponse {
    pub requested_level: String,
    pub resolved_level: Seniority,
    pub guidance: &'static str,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/career-context/analyze
///
/// Infers the career context for a vault snapshot and attaches the guidance text
/// for the inferred level.
pub async fn handle_analyze(
    State(state): State<AppState>,
    Json(vault): Json<VaultData>,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let total_items = vault.total_items();
    if total_items > state.config.max_vault_items {
        return Err(AppError::Validation(format!(
            "vault has {total_items} items; the limit is {}",
            state.config.max_vault_items
        )));
    }

    let career_context = analyze_career_context(&vault);
    info!(
        "Career context inferred: {} ({}%), archetype {:?}, {} power phrases",
        career_context.inferred_seniority,
        career_context.seniority_confidence,
        career_context.career_archetype,
        vault.power_phrases.len()
    );
    debug!(
        "Team sizes {:?}, budgets {:?}",
        career_context.team_sizes_managed, career_context.budget_sizes_managed
    );

    let level_guidance = guidance_for(career_context.inferred_seniority);

    Ok(Json(AnalyzeResponse {
        career_context,
        level_guidance,
    }))
}

/// GET /api/v1/career-context/guidance?level=...
///
/// Unrecognized or missing levels resolve to Mid-Level IC.
pub async fn handle_guidance(Query(query): Query<GuidanceQuery>) -> Json<GuidanceResponse> {
    let resolved_level = resolve_level(&query.level);
    debug!("Guidance requested for '{}' -> {resolved_level}", query.level);

    Json(GuidanceResponse {
        guidance: career_level_guidance(&query.level),
        requested_level: query.level,
        resolved_level,
    })
}
