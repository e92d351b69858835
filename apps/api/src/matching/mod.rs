// Requirement matching: token-overlap scoring of résumé bullets against job requirements.
// Scorer backends sit behind the `RequirementScorer` trait.

pub mod handlers;
pub mod requirement_matcher;
