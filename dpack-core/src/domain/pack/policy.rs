// dpack-core/src/domain/pack/policy.rs

use serde::{Deserialize, Serialize};

use super::classification::{Jurisdiction, PiiLevel, PolicyScope};
use super::null_as_default;

/// Declarative access / masking rule. Descriptive only: nothing in this
/// crate enforces it against a live system.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PolicyRule {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,

    #[serde(default)]
    pub scope: PolicyScope,

    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub target_datasets: Vec<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub conditions: PolicyConditions,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actions: Option<PolicyActions>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PolicyConditions {
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub pii_level: Vec<PiiLevel>,

    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub jurisdiction: Vec<Jurisdiction>,

    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub roles: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PolicyActions {
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub allow: Vec<String>,

    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub deny: Vec<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub require_approval: bool,

    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub mask_columns: Vec<String>,
}

impl PolicyRule {
    pub fn covers_pii_level(&self, level: &PiiLevel) -> bool {
        self.conditions.pii_level.contains(level)
    }
}
