// dpack-core/src/domain/pack/mod.rs
//
// Declarative description of one business domain: schemas, vocabulary,
// access rules and the questions a demo must be able to answer.

pub mod classification;
pub mod dataset;
pub mod glossary;
pub mod policy;
pub mod question;

pub use classification::{FreshnessSla, Jurisdiction, PiiLevel, PolicyScope};
pub use dataset::{ColumnSpec, DatasetSpec};
pub use glossary::GlossaryTerm;
pub use policy::{PolicyActions, PolicyConditions, PolicyRule};
pub use question::{ExpectedIntent, NlQuestion};

use serde::{Deserialize, Deserializer, Serialize};

/// Reads an explicit YAML null (`~`, `null`) as the field's empty value, so
/// `description: ~` is reported by validation like a missing key.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// A bundle of datasets, glossary terms, policies and sample questions
/// for one business domain. `domain` is the registry key.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DomainPack {
    #[serde(default, deserialize_with = "null_as_default")]
    pub domain: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub datasets: Vec<DatasetSpec>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub glossary: Vec<GlossaryTerm>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub policies: Vec<PolicyRule>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub sample_questions: Vec<NlQuestion>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<PackMetadata>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PackMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
}

impl DomainPack {
    pub fn dataset_ids(&self) -> impl Iterator<Item = &str> {
        self.datasets.iter().map(|d| d.id.as_str())
    }

    /// Version string, if present and not blank.
    pub fn version(&self) -> Option<&str> {
        self.metadata
            .as_ref()
            .and_then(|m| m.version.as_deref())
            .filter(|v| !v.trim().is_empty())
    }
}
