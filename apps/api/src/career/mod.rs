// Career context inference: seniority, archetype, progression and level guidance.
// Pure functions over a vault snapshot. Persistence and AI calls belong to the caller.

pub mod analyzer;
pub mod guidance;
pub mod handlers;
pub mod progression;
pub mod signals;
