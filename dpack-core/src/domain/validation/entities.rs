// dpack-core/src/domain/validation/entities.rs
//
// Per-entity structural checks. Message wording names the offending
// entity so a reader can find it in the pack file.

use super::{Findings, ValidationResult, is_blank};
use crate::domain::pack::{
    DatasetSpec, FreshnessSla, GlossaryTerm, Jurisdiction, NlQuestion, PiiLevel, PolicyRule,
    PolicyScope,
};

pub fn validate_dataset(dataset: &DatasetSpec) -> ValidationResult {
    let mut findings = Findings::default();
    let id = &dataset.id;

    if is_blank(id) {
        findings.error("Dataset missing id");
    }

    if is_blank(&dataset.name) {
        findings.error(format!("Dataset {id} missing name"));
    }

    if is_blank(&dataset.domain) {
        findings.error(format!("Dataset {id} missing domain"));
    }

    if is_blank(&dataset.owner) {
        findings.error(format!("Dataset {id} missing owner"));
    }

    if !dataset.pii_level.is_recognized() {
        findings.error(format!(
            "Dataset {id} has invalid piiLevel: {} (expected one of {})",
            dataset.pii_level,
            PiiLevel::ALLOWED.join(", ")
        ));
    }

    if !dataset.jurisdiction.is_recognized() {
        findings.error(format!(
            "Dataset {id} has invalid jurisdiction: {} (expected one of {})",
            dataset.jurisdiction,
            Jurisdiction::ALLOWED.join(", ")
        ));
    }

    if !dataset.freshness_sla.is_recognized() {
        findings.error(format!(
            "Dataset {id} has invalid freshnessSLA: {} (expected one of {})",
            dataset.freshness_sla,
            FreshnessSla::ALLOWED.join(", ")
        ));
    }

    if dataset.columns.is_empty() {
        findings.error(format!("Dataset {id} has no columns"));
    }

    for column in &dataset.columns {
        if is_blank(&column.name) {
            findings.error(format!("Dataset {id} has column with missing name"));
        }
        if is_blank(&column.data_type) {
            findings.error(format!("Dataset {id} column {} missing type", column.name));
        }
        if is_blank(&column.description) {
            findings.warn(format!(
                "Dataset {id} column {} missing description",
                column.name
            ));
        }
    }

    if dataset.pii_level == PiiLevel::None
        && let Some(column) = dataset.pii_columns().next()
    {
        findings.warn(format!(
            "Dataset {id} is declared PII level NONE but column {} is flagged as PII",
            column.name
        ));
    }

    if dataset.sample_row_count <= 0 {
        findings.error(format!("Dataset {id} has invalid sampleRowCount"));
    }

    findings.finish()
}

pub fn validate_glossary_term(term: &GlossaryTerm) -> ValidationResult {
    let mut findings = Findings::default();

    if is_blank(&term.term) {
        findings.error("Glossary term missing term name");
    }

    if is_blank(&term.definition) {
        findings.error(format!("Glossary term {} missing definition", term.term));
    }

    if is_blank(&term.domain) {
        findings.error(format!("Glossary term {} missing domain", term.term));
    }

    findings.finish()
}

pub fn validate_policy(policy: &PolicyRule) -> ValidationResult {
    let mut findings = Findings::default();
    let id = &policy.id;

    if is_blank(id) {
        findings.error("Policy missing id");
    }

    if is_blank(&policy.name) {
        findings.error(format!("Policy {id} missing name"));
    }

    if is_blank(&policy.description) {
        findings.error(format!("Policy {id} missing description"));
    }

    if !policy.scope.is_recognized() {
        findings.error(format!(
            "Policy {id} has invalid scope: {} (expected one of {})",
            policy.scope,
            PolicyScope::ALLOWED.join(", ")
        ));
    }

    // Only presence matters; the action lists are free-form.
    if policy.actions.is_none() {
        findings.error(format!("Policy {id} missing actions"));
    }

    findings.finish()
}

pub fn validate_question(question: &NlQuestion) -> ValidationResult {
    let mut findings = Findings::default();
    let text = &question.question;

    if is_blank(text) {
        findings.error("NL Question missing question text");
    }

    match &question.expected_intent {
        None => findings.error(format!("NL Question \"{text}\" missing expectedIntent")),
        Some(intent) if intent.measures.is_empty() => findings.error(format!(
            "NL Question \"{text}\" missing measures in expectedIntent"
        )),
        Some(_) => {}
    }

    if question.expected_datasets.is_empty() {
        findings.error(format!("NL Question \"{text}\" missing expectedDatasets"));
    }

    if question.requires_approval.is_none() {
        findings.warn(format!(
            "NL Question \"{text}\" missing requiresApproval flag"
        ));
    }

    findings.finish()
}
