// dpack-core/src/domain/pack/glossary.rs

use serde::{Deserialize, Serialize};

use super::null_as_default;

/// Business vocabulary entry. Terms are not required to be unique.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GlossaryTerm {
    #[serde(default, deserialize_with = "null_as_default")]
    pub term: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub definition: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub domain: String,

    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub synonyms: Vec<String>,

    /// Dataset ids this term is computed from or found in.
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub related_datasets: Vec<String>,
}
