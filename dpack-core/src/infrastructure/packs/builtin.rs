// dpack-core/src/infrastructure/packs/builtin.rs
//
// Packs compiled into the binary. Registry order is the order of BUILTIN.

use tracing::debug;

use super::loader::parse_pack;
use crate::domain::pack::DomainPack;
use crate::infrastructure::error::InfrastructureError;

const BUILTIN: &[(&str, &str)] = &[
    ("credit_risk", include_str!("data/credit_risk.yaml")),
    ("aml_fcc", include_str!("data/aml_fcc.yaml")),
    ("finance_reporting", include_str!("data/finance_reporting.yaml")),
];

pub fn builtin_packs() -> Result<Vec<DomainPack>, InfrastructureError> {
    BUILTIN
        .iter()
        .map(|&(name, source)| {
            debug!(pack = name, "Parsing embedded domain pack");
            parse_pack(source)
                .map_err(|source| InfrastructureError::BuiltinPack { name, source })
        })
        .collect()
}
