//! Role progression — static (seniority, archetype) → next likely role table.

use crate::models::career::{CareerArchetype, Seniority};

pub const FALLBACK_NEXT_ROLE: &str = "Next Senior Role";

const NEXT_ROLE_TABLE: &[(Seniority, CareerArchetype, &str)] = &[
    (Seniority::JuniorIc, CareerArchetype::DeepTechnical, "Mid-Level Engineer"),
    (Seniority::JuniorIc, CareerArchetype::Generalist, "Mid-Level IC"),
    (Seniority::MidLevelIc, CareerArchetype::DeepTechnical, "Senior Engineer"),
    (Seniority::MidLevelIc, CareerArchetype::TechLeadership, "Tech Lead"),
    (Seniority::MidLevelIc, CareerArchetype::Generalist, "Senior IC"),
    (Seniority::SeniorIc, CareerArchetype::DeepTechnical, "Staff Engineer"),
    (Seniority::SeniorIc, CareerArchetype::TechLeadership, "Engineering Manager"),
    (Seniority::SeniorIc, CareerArchetype::PeopleManagement, "Team Lead"),
    (Seniority::SeniorIc, CareerArchetype::Generalist, "Staff IC or Team Lead"),
    (Seniority::StaffPrincipalIc, CareerArchetype::DeepTechnical, "Principal Engineer"),
    (Seniority::StaffPrincipalIc, CareerArchetype::TechLeadership, "Engineering Director"),
    (Seniority::StaffPrincipalIc, CareerArchetype::Generalist, "Principal IC"),
    (Seniority::TeamLead, CareerArchetype::TechLeadership, "Engineering Manager"),
    (Seniority::TeamLead, CareerArchetype::PeopleManagement, "Manager"),
    (Seniority::Manager, CareerArchetype::TechLeadership, "Senior Engineering Manager"),
    (Seniority::Manager, CareerArchetype::PeopleManagement, "Senior Manager"),
    (Seniority::Manager, CareerArchetype::StrategicExecutive, "Director"),
    (Seniority::SeniorManager, CareerArchetype::TechLeadership, "Director of Engineering"),
    (Seniority::SeniorManager, CareerArchetype::PeopleManagement, "Director"),
    (Seniority::SeniorManager, CareerArchetype::StrategicExecutive, "Director"),
    (Seniority::Director, CareerArchetype::TechLeadership, "VP of Engineering"),
    (Seniority::Director, CareerArchetype::PeopleManagement, "Senior Director"),
    (Seniority::Director, CareerArchetype::StrategicExecutive, "VP"),
    (Seniority::Vp, CareerArchetype::TechLeadership, "CTO"),
    (Seniority::Vp, CareerArchetype::PeopleManagement, "SVP"),
    (Seniority::Vp, CareerArchetype::StrategicExecutive, "C-Level Executive"),
    (Seniority::CLevel, CareerArchetype::StrategicExecutive, "CEO or Board Member"),
];

/// Returns the suggested next role, or `FALLBACK_NEXT_ROLE` when the table has no entry.
pub fn next_likely_role(seniority: Seniority, archetype: CareerArchetype) -> &'static str {
    NEXT_ROLE_TABLE
        .iter()
        .find(|(s, a, _)| *s == seniority && *a == archetype)
        .map(|(_, _, role)| *role)
        .unwrap_or(FALLBACK_NEXT_ROLE)
}
