use std::fmt;

use serde::{Deserialize, Serialize};

/// Ordinal seniority labels, lowest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Seniority {
    #[serde(rename = "Junior IC")]
    JuniorIc,
    #[serde(rename = "Mid-Level IC")]
    MidLevelIc,
    #[serde(rename = "Senior IC")]
    SeniorIc,
    #[serde(rename = "Staff/Principal IC")]
    StaffPrincipalIc,
    #[serde(rename = "Team Lead")]
    TeamLead,
    Manager,
    #[serde(rename = "Senior Manager")]
    SeniorManager,
    Director,
    #[serde(rename = "VP")]
    Vp,
    #[serde(rename = "C-Level")]
    CLevel,
}

impl Seniority {
    pub const ALL: [Seniority; 10] = [
        Seniority::JuniorIc,
        Seniority::MidLevelIc,
        Seniority::SeniorIc,
        Seniority::StaffPrincipalIc,
        Seniority::TeamLead,
        Seniority::Manager,
        Seniority::SeniorManager,
        Seniority::Director,
        Seniority::Vp,
        Seniority::CLevel,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Seniority::JuniorIc => "Junior IC",
            Seniority::MidLevelIc => "Mid-Level IC",
            Seniority::SeniorIc => "Senior IC",
            Seniority::StaffPrincipalIc => "Staff/Principal IC",
            Seniority::TeamLead => "Team Lead",
            Seniority::Manager => "Manager",
            Seniority::SeniorManager => "Senior Manager",
            Seniority::Director => "Director",
            Seniority::Vp => "VP",
            Seniority::CLevel => "C-Level",
        }
    }

    /// Resolves a display label, ignoring surrounding whitespace and ASCII case.
    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim();
        Self::ALL
            .into_iter()
            .find(|s| s.label().eq_ignore_ascii_case(label))
    }
}

impl fmt::Display for Seniority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CareerArchetype {
    DeepTechnical,
    TechLeadership,
    PeopleManagement,
    StrategicExecutive,
    Generalist,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompanySize {
    Startup,
    Midmarket,
    Enterprise,
}

/// Breadth of organizational influence implied by team size and management signals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImpactScale {
    Individual,
    Team,
    Department,
    Organization,
    Company,
}

/// Inferred career profile. Computed fresh from a `VaultData` snapshot on every call.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerContext {
    pub inferred_seniority: Seniority,
    pub seniority_confidence: u8, // 0 – 100
    pub years_of_experience: u32, // floor of 3
    pub has_management_experience: bool,
    pub team_sizes_managed: Vec<u32>,
    pub has_executive_exposure: bool,
    pub has_budget_ownership: bool,
    pub budget_sizes_managed: Vec<f64>,
    pub company_sizes: Vec<CompanySize>,
    pub technical_depth: u8,
    pub leadership_depth: u8,
    pub strategic_depth: u8,
    pub primary_responsibilities: Vec<String>,
    pub impact_scale: ImpactScale,
    pub next_likely_role: String,
    pub career_archetype: CareerArchetype,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seniority_serde_uses_display_labels() {
        let json = serde_json::to_string(&Seniority::StaffPrincipalIc).unwrap();
        assert_eq!(json, r#""Staff/Principal IC""#);
        let parsed: Seniority = serde_json::from_str(r#""Mid-Level IC""#).unwrap();
        assert_eq!(parsed, Seniority::MidLevelIc);
    }

    #[test]
    fn test_serde_labels_match_display() {
        for level in Seniority::ALL {
            let json = serde_json::to_string(&level).unwrap();
            assert_eq!(json, format!("\"{level}\""));
        }
    }

    #[test]
    fn test_from_label_is_case_insensitive() {
        assert_eq!(Seniority::from_label("  vp "), Some(Seniority::Vp));
        assert_eq!(Seniority::from_label("senior ic"), Some(Seniority::SeniorIc));
        assert_eq!(Seniority::from_label("Unknown Level"), None);
    }

    #[test]
    fn test_seniority_is_ordinal() {
        assert!(Seniority::JuniorIc < Seniority::MidLevelIc);
        assert!(Seniority::Director < Seniority::Vp);
        assert!(Seniority::Vp < Seniority::CLevel);
    }

    #[test]
    fn test_archetype_serde_snake_case() {
        let json = serde_json::to_string(&CareerArchetype::StrategicExecutive).unwrap();
        assert_eq!(json, r#""strategic_executive""#);
        let json = serde_json::to_string(&ImpactScale::Organization).unwrap();
        assert_eq!(json, r#""organization""#);
        let json = serde_json::to_string(&CompanySize::Midmarket).unwrap();
        assert_eq!(json, r#""midmarket""#);
    }
}
