use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

/// Read-only snapshot of a user's career vault, assembled upstream from the datastore
/// and the extraction pipeline. Missing or `null` lists deserialize as empty.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VaultData {
    #[serde(deserialize_with = "null_as_empty")]
    pub power_phrases: Vec<VaultItem>,
    #[serde(deserialize_with = "null_as_empty")]
    pub skills: Vec<VaultItem>,
    #[serde(deserialize_with = "null_as_empty")]
    pub competencies: Vec<VaultItem>,
    #[serde(deserialize_with = "null_as_empty")]
    pub soft_skills: Vec<VaultItem>,
    #[serde(deserialize_with = "null_as_empty")]
    pub leadership: Vec<VaultItem>,
    #[serde(deserialize_with = "null_as_empty")]
    pub executive_presence: Vec<VaultItem>,
    #[serde(deserialize_with = "null_as_empty")]
    pub certifications: Vec<VaultItem>,
}

impl VaultData {
    /// Total number of items across every list.
    pub fn total_items(&self) -> usize {
        self.power_phrases.len()
            + self.skills.len()
            + self.competencies.len()
            + self.soft_skills.len()
            + self.leadership.len()
            + self.executive_presence.len()
            + self.certifications.len()
    }
}

/// A single free-text vault item. Accepts either a bare string or a record carrying
/// its text under one of the vault's column names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "VaultItemRepr")]
pub struct VaultItem {
    pub text: String,
}

impl VaultItem {
    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl From<&str> for VaultItem {
    fn from(text: &str) -> Self {
        Self {
            text: text.to_string(),
        }
    }
}

impl From<String> for VaultItem {
    fn from(text: String) -> Self {
        Self { text }
    }
}

/// Record columns that may carry an item's text, in priority order.
const TEXT_COLUMNS: &[&str] = &[
    "text",
    "power_phrase",
    "phrase",
    "stated_skill",
    "skill_name",
    "competency_name",
    "name",
];

#[derive(Deserialize)]
#[serde(untagged)]
enum VaultItemRepr {
    Text(String),
    Record(Map<String, Value>),
    Other(Value),
}

impl From<VaultItemRepr> for VaultItem {
    fn from(repr: VaultItemRepr) -> Self {
        match repr {
            VaultItemRepr::Text(text) => Self { text },
            VaultItemRepr::Record(record) => Self {
                text: record_text(&record).unwrap_or_default(),
            },
            VaultItemRepr::Other(_) => Self::default(),
        }
    }
}

/// First string-valued text column wins. Nulls and non-string values are skipped.
fn record_text(record: &Map<String, Value>) -> Option<String> {
    TEXT_COLUMNS
        .iter()
        .find_map(|column| record.get(*column).and_then(Value::as_str))
        .map(str::to_string)
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
