// dpack-core/src/domain/pack/dataset.rs

use serde::{Deserialize, Serialize};

use super::classification::{FreshnessSla, Jurisdiction, PiiLevel};
use super::null_as_default;

/// Schema-level description of one dataset shipped with a pack.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DatasetSpec {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,

    /// Owning business domain.
    #[serde(default, deserialize_with = "null_as_default")]
    pub domain: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub owner: String,

    #[serde(default)]
    pub pii_level: PiiLevel,

    #[serde(default)]
    pub jurisdiction: Jurisdiction,

    #[serde(default)]
    pub freshness_sla: FreshnessSla,

    #[serde(default, deserialize_with = "null_as_default")]
    pub columns: Vec<ColumnSpec>,

    /// Rows of synthetic demo data. Signed so that bad input stays representable.
    #[serde(default, deserialize_with = "null_as_default")]
    pub sample_row_count: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ColumnSpec {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,

    /// Free-form SQL-ish type name (VARCHAR, DECIMAL(18,2), ...).
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub data_type: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub nullable: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pii: Option<bool>,
}

impl DatasetSpec {
    pub fn pii_columns(&self) -> impl Iterator<Item = &ColumnSpec> {
        self.columns.iter().filter(|c| c.is_pii())
    }

    /// Names of the first `limit` columns, for summaries.
    pub fn key_columns(&self, limit: usize) -> Vec<&str> {
        self.columns
            .iter()
            .take(limit)
            .map(|c| c.name.as_str())
            .collect()
    }
}

impl ColumnSpec {
    pub fn is_pii(&self) -> bool {
        self.pii.unwrap_or(false)
    }
}
