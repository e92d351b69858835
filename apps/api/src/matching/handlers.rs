//! Axum route handlers for the Requirement Matching API.

use axum::{extract::State, Json};
use serde::Deserialize;
use tracing::info;

use crate::errors::AppError;
use crate::matching::requirement_matcher::{MatchReport, Requirement};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct MatchRequest {
    #[serde(default)]
    pub bullets: Vec<String>,
    pub requirements: Vec<Requirement>,
}

/// POST /api/v1/requirements/match
///
/// Scores résumé bullets against job requirements and surfaces uncovered requirements.
pub async fn handle_match(
    State(state): State<AppState>,
    Json(request): Json<MatchRequest>,
) -> Result<Json<MatchReport>, AppError> {
    if request.requirements.is_empty() {
        return Err(AppError::Validation(
            "requirements cannot be empty".to_string(),
        ));
    }

    let limit = state.config.max_vault_items;
    if request.bullets.len() > limit || request.requirements.len() > limit {
        return Err(AppError::Validation(format!(
            "at most {limit} bullets and {limit} requirements are accepted"
        )));
    }

    let report = state
        .requirement_scorer
        .score(&request.bullets, &request.requirements)
        .await?;

    info!(
        "Matched {} bullets against {} requirements: score {}, {} gaps",
        request.bullets.len(),
        request.requirements.len(),
        report.overall_score,
        report.gaps.len()
    );

    Ok(Json(report))
}
