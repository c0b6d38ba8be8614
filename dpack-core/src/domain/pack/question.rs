// dpack-core/src/domain/pack/question.rs

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::null_as_default;

/// Natural-language demo question paired with the structured intent a
/// resolver is expected to produce for it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NlQuestion {
    #[serde(default, deserialize_with = "null_as_default")]
    pub question: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected_intent: Option<ExpectedIntent>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub expected_datasets: Vec<String>,

    /// `None` means the author never said, which is not the same as `false`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requires_approval: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExpectedIntent {
    #[serde(default, deserialize_with = "null_as_default")]
    pub measures: Vec<String>,

    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub dimensions: Vec<String>,

    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "BTreeMap::is_empty")]
    pub filters: BTreeMap<String, String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_range: Option<String>,
}

impl NlQuestion {
    pub fn measures(&self) -> &[String] {
        self.expected_intent
            .as_ref()
            .map(|i| i.measures.as_slice())
            .unwrap_or_default()
    }
}
