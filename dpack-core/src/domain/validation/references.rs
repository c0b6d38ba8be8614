// dpack-core/src/domain/validation/references.rs
//
// Checks that span several entities of the same pack.

use std::collections::HashSet;

use super::{Findings, ValidationResult};
use crate::domain::pack::{DomainPack, PiiLevel};

/// Dataset ids must be unique, and everything that names a dataset must
/// name one that exists in this pack.
///
/// Unknown ids in sample questions are errors; in policies and glossary
/// terms they are warnings. Packs without datasets are skipped here since
/// that condition is already reported at pack level.
pub fn check_dataset_references(pack: &DomainPack) -> ValidationResult {
    let mut findings = Findings::default();

    if pack.datasets.is_empty() {
        return findings.finish();
    }

    let mut known: HashSet<&str> = HashSet::new();
    for id in pack.dataset_ids() {
        if !known.insert(id) {
            findings.error(format!("Dataset {id} is defined more than once"));
        }
    }

    for question in &pack.sample_questions {
        for id in &question.expected_datasets {
            if !known.contains(id.as_str()) {
                findings.error(format!(
                    "NL Question \"{}\" references unknown dataset {id}",
                    question.question
                ));
            }
        }
    }

    for policy in &pack.policies {
        for id in &policy.target_datasets {
            if !known.contains(id.as_str()) {
                findings.warn(format!(
                    "Policy {} targets unknown dataset {id}",
                    policy.id
                ));
            }
        }
    }

    for term in &pack.glossary {
        for id in &term.related_datasets {
            if !known.contains(id.as_str()) {
                findings.warn(format!(
                    "Glossary term {} relates to unknown dataset {id}",
                    term.term
                ));
            }
        }
    }

    findings.finish()
}

/// Every HIGH-PII dataset should be covered by at least one policy that
/// conditions on HIGH PII. Advisory only.
pub fn check_policy_coverage(pack: &DomainPack) -> ValidationResult {
    let mut findings = Findings::default();

    let covered = pack
        .policies
        .iter()
        .any(|p| p.covers_pii_level(&PiiLevel::High));

    if !covered {
        for dataset in pack.datasets.iter().filter(|d| d.pii_level == PiiLevel::High) {
            findings.warn(format!(
                "Dataset {} has HIGH PII but no policy covers HIGH PII data",
                dataset.id
            ));
        }
    }

    findings.finish()
}
