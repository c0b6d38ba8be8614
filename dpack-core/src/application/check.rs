// dpack-core/src/application/check.rs
//
// USE CASE: validate every registered pack, keeping registry order so that
// console output and evidence are reproducible.

use serde::Serialize;
use tracing::{debug, warn};

use crate::domain::registry::PackRegistry;
use crate::domain::validation::{ValidationResult, validate_pack};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PackOutcome {
    pub domain: String,
    #[serde(flatten)]
    pub result: ValidationResult,
}

/// Per-pack results of one validation pass, in registry order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationRun {
    outcomes: Vec<PackOutcome>,
}

impl ValidationRun {
    pub fn outcomes(&self) -> &[PackOutcome] {
        &self.outcomes
    }

    pub fn all_valid(&self) -> bool {
        self.outcomes.iter().all(|o| o.result.valid())
    }

    pub fn invalid_count(&self) -> usize {
        self.outcomes.iter().filter(|o| !o.result.valid()).count()
    }

    pub fn result_for(&self, domain: &str) -> Option<&ValidationResult> {
        self.outcomes
            .iter()
            .find(|o| o.domain == domain)
            .map(|o| &o.result)
    }
}

pub fn validate_registry(registry: &PackRegistry) -> ValidationRun {
    let outcomes = registry
        .list_packs()
        .iter()
        .map(|pack| {
            let result = validate_pack(pack);
            if result.valid() {
                debug!(
                    domain = %pack.domain,
                    warnings = result.warnings().len(),
                    "Domain pack valid"
                );
            } else {
                warn!(
                    domain = %pack.domain,
                    errors = result.errors().len(),
                    "Domain pack invalid"
                );
            }
            PackOutcome {
                domain: pack.domain.clone(),
                result,
            }
        })
        .collect();

    ValidationRun { outcomes }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::domain::pack::DomainPack;
    use anyhow::Result;

    #[test]
    fn test_run_preserves_registry_order() -> Result<()> {
        let registry = PackRegistry::new(vec![
            DomainPack {
                domain: "Zeta".into(),
                ..Default::default()
            },
            DomainPack {
                domain: "Alpha".into(),
                ..Default::default()
            },
        ])?;

        let run = validate_registry(&registry);
        let domains: Vec<&str> = run.outcomes().iter().map(|o| o.domain.as_str()).collect();
        assert_eq!(domains, ["Zeta", "Alpha"]);
        assert!(!run.all_valid());
        assert_eq!(run.invalid_count(), 2);
        assert!(run.result_for("Alpha").is_some());
        assert!(run.result_for("Beta").is_none());
        Ok(())
    }

    #[test]
    fn test_outcome_serializes_flat() -> Result<()> {
        let outcome = PackOutcome {
            domain: "Treasury".into(),
            result: ValidationResult::new(vec![], vec!["No policies defined".into()]),
        };
        let json = serde_json::to_value(&outcome)?;
        assert_eq!(json["domain"], "Treasury");
        assert_eq!(json["valid"], true);
        assert_eq!(json["warnings"][0], "No policies defined");
        Ok(())
    }
}
