// dpack-core/src/domain/validation/mod.rs
//
// The one validator shared by the CLI and the test suites.
// Every function here is total: problems are accumulated as messages,
// never raised.

pub mod entities;
pub mod references;

pub use entities::{validate_dataset, validate_glossary_term, validate_policy, validate_question};
pub use references::{check_dataset_references, check_policy_coverage};

use serde::Serialize;

use crate::domain::pack::DomainPack;

/// Minimum number of sample questions a pack needs to be demo-ready.
pub const MIN_SAMPLE_QUESTIONS: usize = 2;

/// Outcome of one validation call. `valid` is derived from `errors` at
/// construction and cannot drift from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    valid: bool,
    errors: Vec<String>,
    warnings: Vec<String>,
}

impl ValidationResult {
    pub fn new(errors: Vec<String>, warnings: Vec<String>) -> Self {
        Self {
            valid: errors.is_empty(),
            errors,
            warnings,
        }
    }

    /// A result carrying a single error.
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(vec![message.into()], Vec::new())
    }

    pub fn valid(&self) -> bool {
        self.valid
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::new(Vec::new(), Vec::new())
    }
}

/// Accumulator used while walking a pack.
#[derive(Debug, Default)]
pub(crate) struct Findings {
    errors: Vec<String>,
    warnings: Vec<String>,
}

impl Findings {
    pub(crate) fn error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
    }

    pub(crate) fn warn(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    pub(crate) fn absorb(&mut self, other: ValidationResult) {
        self.errors.extend(other.errors);
        self.warnings.extend(other.warnings);
    }

    pub(crate) fn finish(self) -> ValidationResult {
        ValidationResult::new(self.errors, self.warnings)
    }
}

pub(crate) fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Checks a whole pack: pack-level structure first, then every nested
/// entity, then references between them.
pub fn validate_pack(pack: &DomainPack) -> ValidationResult {
    let mut findings = Findings::default();

    if is_blank(&pack.domain) {
        findings.error("Domain name is required");
    }

    if is_blank(&pack.description) {
        findings.error("Domain description is required");
    }

    if pack.datasets.is_empty() {
        findings.error("At least one dataset is required");
    }

    if pack.glossary.is_empty() {
        findings.warn("No glossary terms defined");
    }

    if pack.policies.is_empty() {
        findings.warn("No policies defined");
    }

    if pack.sample_questions.len() < MIN_SAMPLE_QUESTIONS {
        findings.error(format!(
            "At least {} sample questions are required",
            MIN_SAMPLE_QUESTIONS
        ));
    }

    match pack.metadata.as_ref() {
        Some(metadata) if pack.version().is_some() => {
            if metadata.created.as_deref().is_none_or(is_blank) {
                findings.warn("Metadata missing created date");
            }
            if metadata.author.as_deref().is_none_or(is_blank) {
                findings.warn("Metadata missing author");
            }
        }
        _ => findings.error("Metadata with version is required"),
    }

    for dataset in &pack.datasets {
        findings.absorb(validate_dataset(dataset));
    }

    for term in &pack.glossary {
        findings.absorb(validate_glossary_term(term));
    }

    for policy in &pack.policies {
        findings.absorb(validate_policy(policy));
    }

    for question in &pack.sample_questions {
        findings.absorb(validate_question(question));
    }

    findings.absorb(check_dataset_references(pack));
    findings.absorb(check_policy_coverage(pack));

    findings.finish()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::domain::pack::{
        ColumnSpec, DatasetSpec, ExpectedIntent, FreshnessSla, GlossaryTerm, Jurisdiction,
        NlQuestion, PackMetadata, PiiLevel, PolicyActions, PolicyConditions, PolicyRule,
        PolicyScope,
    };

    fn dataset(id: &str) -> DatasetSpec {
        DatasetSpec {
            id: id.into(),
            name: format!("{id} table"),
            description: "Synthetic demo data".into(),
            domain: "Treasury".into(),
            owner: "treasury-data".into(),
            pii_level: PiiLevel::Low,
            jurisdiction: Jurisdiction::Eu,
            freshness_sla: FreshnessSla::Daily,
            columns: vec![ColumnSpec {
                name: "id".into(),
                data_type: "VARCHAR".into(),
                description: "Primary key".into(),
                nullable: false,
                pii: None,
            }],
            sample_row_count: 1_000,
        }
    }

    fn question(text: &str, datasets: &[&str]) -> NlQuestion {
        NlQuestion {
            question: text.into(),
            expected_intent: Some(ExpectedIntent {
                measures: vec!["balance".into()],
                ..Default::default()
            }),
            expected_datasets: datasets.iter().map(|d| d.to_string()).collect(),
            requires_approval: Some(false),
        }
    }

    fn valid_pack() -> DomainPack {
        DomainPack {
            domain: "Treasury".into(),
            description: "Liquidity and funding".into(),
            datasets: vec![dataset("cash_ladder")],
            glossary: vec![GlossaryTerm {
                term: "LCR".into(),
                definition: "Liquidity coverage ratio".into(),
                domain: "Treasury".into(),
                ..Default::default()
            }],
            policies: vec![PolicyRule {
                id: "tr-001".into(),
                name: "Treasury readers".into(),
                description: "Only treasury analysts read positions".into(),
                scope: PolicyScope::Domain,
                conditions: PolicyConditions::default(),
                actions: Some(PolicyActions::default()),
                ..Default::default()
            }],
            sample_questions: vec![
                question("What is our cash position?", &["cash_ladder"]),
                question("How did the cash position move?", &["cash_ladder"]),
            ],
            metadata: Some(PackMetadata {
                version: Some("1.0.0".into()),
                created: Some("2024-01-15".into()),
                author: Some("Treasury Data Team".into()),
                tags: vec![],
            }),
        }
    }

    #[test]
    fn test_valid_pack_has_no_findings() {
        let result = validate_pack(&valid_pack());
        assert!(result.valid(), "{:?}", result.errors());
        assert!(result.warnings().is_empty(), "{:?}", result.warnings());
    }

    #[test]
    fn test_validity_tracks_error_list() {
        let ok = ValidationResult::new(vec![], vec!["advisory".into()]);
        assert!(ok.valid());

        let ko = ValidationResult::new(vec!["broken".into()], vec![]);
        assert!(!ko.valid());
    }

    #[test]
    fn test_validation_is_idempotent() {
        let mut pack = valid_pack();
        pack.glossary.clear();
        pack.datasets[0].sample_row_count = 0;

        let first = validate_pack(&pack);
        let second = validate_pack(&pack);
        assert_eq!(first, second);
        assert!(!first.valid());
    }

    #[test]
    fn test_empty_pack_reports_exactly_three_structural_errors() {
        let pack = DomainPack {
            domain: "Treasury".into(),
            description: "Liquidity and funding".into(),
            datasets: vec![],
            sample_questions: vec![question("What is our cash position?", &["cash_ladder"])],
            metadata: Some(PackMetadata::default()),
            ..Default::default()
        };

        let result = validate_pack(&pack);
        insta::assert_snapshot!(result.errors().join("\n"), @r"
        At least one dataset is required
        At least 2 sample questions are required
        Metadata with version is required
        ");
    }

    #[test]
    fn test_too_few_questions_is_a_single_error() {
        let mut pack = valid_pack();
        pack.sample_questions.clear();

        let result = validate_pack(&pack);
        let count = result
            .errors()
            .iter()
            .filter(|e| e.contains("sample questions are required"))
            .count();
        assert_eq!(count, 1);
    }

    #[test]
    fn test_blank_domain_and_description() {
        let mut pack = valid_pack();
        pack.domain = "   ".into();
        pack.description = String::new();

        let result = validate_pack(&pack);
        assert!(result.errors().contains(&"Domain name is required".to_string()));
        assert!(result.errors().contains(&"Domain description is required".to_string()));
    }

    #[test]
    fn test_empty_glossary_and_policies_only_warn() {
        let mut pack = valid_pack();
        pack.glossary.clear();
        pack.policies.clear();

        let result = validate_pack(&pack);
        assert!(result.valid());
        assert_eq!(
            result.warnings(),
            ["No glossary terms defined", "No policies defined"]
        );
    }

    #[test]
    fn test_metadata_without_author_warns() {
        let mut pack = valid_pack();
        if let Some(meta) = pack.metadata.as_mut() {
            meta.author = None;
        }

        let result = validate_pack(&pack);
        assert!(result.valid());
        assert_eq!(result.warnings(), ["Metadata missing author"]);
    }

    #[test]
    fn test_nested_entity_errors_are_folded_in() {
        let mut pack = valid_pack();
        pack.datasets[0].columns.clear();
        pack.glossary[0].definition.clear();
        pack.policies[0].actions = None;
        pack.sample_questions[1].expected_intent = Some(ExpectedIntent::default());

        let result = validate_pack(&pack);
        insta::assert_snapshot!(result.errors().join("\n"), @r#"
        Dataset cash_ladder has no columns
        Glossary term LCR missing definition
        Policy tr-001 missing actions
        NL Question "How did the cash position move?" missing measures in expectedIntent
        "#);
    }

    #[test]
    fn test_unknown_dataset_reference_is_an_error() {
        let mut pack = valid_pack();
        pack.sample_questions[0]
            .expected_datasets
            .push("fx_positions".into());

        let result = validate_pack(&pack);
        assert!(!result.valid());
        assert_eq!(
            result.errors(),
            [r#"NL Question "What is our cash position?" references unknown dataset fx_positions"#]
        );
    }
}
