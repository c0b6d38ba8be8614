// dpack-core/src/application/evidence.rs
//
// USE CASE: write the evidence snapshot of a validation run, as JSON for
// machines and Markdown for reviewers.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{info, instrument};

use crate::application::check::{PackOutcome, ValidationRun};
use crate::domain::pack::{DomainPack, FreshnessSla, Jurisdiction, PiiLevel};
use crate::domain::validation::ValidationResult;
use crate::error::DpackError;
use crate::infrastructure::error::InfrastructureError;
use crate::infrastructure::fs::atomic_write;
use crate::infrastructure::report::EvidenceRenderer;

pub const EVIDENCE_JSON: &str = "validation_results.json";
pub const EVIDENCE_MARKDOWN: &str = "validation_results.md";
pub const EXECUTION_CONTEXT: &str = "Domain Pack Smoke Run";

// --- DTOs ---
// Exactly what ends up in validation_results.json.

#[derive(Debug, Serialize)]
pub struct EvidenceReport<'a> {
    pub timestamp: String,
    pub execution_context: &'static str,
    pub total_packs: usize,
    pub all_valid: bool,
    pub summary: EvidenceSummary,
    /// One entry per pack, same order as `packs`.
    pub validation_results: Vec<PackOutcome>,
    pub packs: Vec<PackEvidence<'a>>,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct EvidenceSummary {
    pub total_datasets: usize,
    pub total_glossary_terms: usize,
    pub total_policies: usize,
    pub total_sample_questions: usize,
}

#[derive(Debug, Serialize)]
pub struct PackEvidence<'a> {
    pub domain: &'a str,
    pub description: &'a str,
    pub dataset_count: usize,
    pub glossary_term_count: usize,
    pub policy_count: usize,
    pub sample_question_count: usize,
    pub datasets: Vec<DatasetEvidence<'a>>,
    pub sample_questions: Vec<QuestionEvidence<'a>>,
}

#[derive(Debug, Serialize)]
pub struct DatasetEvidence<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub pii_level: &'a PiiLevel,
    pub jurisdiction: &'a Jurisdiction,
    pub freshness_sla: &'a FreshnessSla,
    pub column_count: usize,
    pub sample_row_count: i64,
}

#[derive(Debug, Serialize)]
pub struct QuestionEvidence<'a> {
    pub question: &'a str,
    pub measures: &'a [String],
    pub datasets: &'a [String],
    pub requires_approval: bool,
}

#[derive(Serialize)]
struct MarkdownContext<'a> {
    report: &'a EvidenceReport<'a>,
    packs: &'a [DomainPack],
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvidencePaths {
    pub json: PathBuf,
    pub markdown: PathBuf,
}

impl EvidenceSummary {
    pub fn from_packs(packs: &[DomainPack]) -> Self {
        Self {
            total_datasets: packs.iter().map(|p| p.datasets.len()).sum(),
            total_glossary_terms: packs.iter().map(|p| p.glossary.len()).sum(),
            total_policies: packs.iter().map(|p| p.policies.len()).sum(),
            total_sample_questions: packs.iter().map(|p| p.sample_questions.len()).sum(),
        }
    }
}

impl<'a> From<&'a DomainPack> for PackEvidence<'a> {
    fn from(pack: &'a DomainPack) -> Self {
        Self {
            domain: &pack.domain,
            description: &pack.description,
            dataset_count: pack.datasets.len(),
            glossary_term_count: pack.glossary.len(),
            policy_count: pack.policies.len(),
            sample_question_count: pack.sample_questions.len(),
            datasets: pack
                .datasets
                .iter()
                .map(|ds| DatasetEvidence {
                    id: &ds.id,
                    name: &ds.name,
                    pii_level: &ds.pii_level,
                    jurisdiction: &ds.jurisdiction,
                    freshness_sla: &ds.freshness_sla,
                    column_count: ds.columns.len(),
                    sample_row_count: ds.sample_row_count,
                })
                .collect(),
            sample_questions: pack
                .sample_questions
                .iter()
                .map(|q| QuestionEvidence {
                    question: &q.question,
                    measures: q.measures(),
                    datasets: &q.expected_datasets,
                    requires_approval: q.requires_approval.unwrap_or(false),
                })
                .collect(),
        }
    }
}

/// Lines the run up with `packs`. A pack the run never saw is reported as
/// failed rather than silently passing.
pub fn build_report<'a>(
    timestamp: DateTime<Utc>,
    packs: &'a [DomainPack],
    run: &ValidationRun,
) -> EvidenceReport<'a> {
    let validation_results: Vec<PackOutcome> = packs
        .iter()
        .map(|pack| PackOutcome {
            domain: pack.domain.clone(),
            result: run
                .result_for(&pack.domain)
                .cloned()
                .unwrap_or_else(|| ValidationResult::failure("Pack was not validated")),
        })
        .collect();

    EvidenceReport {
        timestamp: timestamp.to_rfc3339_opts(SecondsFormat::Millis, true),
        execution_context: EXECUTION_CONTEXT,
        total_packs: packs.len(),
        all_valid: validation_results.iter().all(|o| o.result.valid()),
        summary: EvidenceSummary::from_packs(packs),
        validation_results,
        packs: packs.iter().map(PackEvidence::from).collect(),
    }
}

#[instrument(skip(packs, run), fields(packs = packs.len()))]
pub fn write_evidence(
    evidence_dir: &Path,
    timestamp: DateTime<Utc>,
    packs: &[DomainPack],
    run: &ValidationRun,
) -> Result<EvidencePaths, DpackError> {
    let report = build_report(timestamp, packs, run);

    // 1. JSON
    let json_path = evidence_dir.join(EVIDENCE_JSON);
    let json_content =
        serde_json::to_string_pretty(&report).map_err(InfrastructureError::from)?;
    atomic_write(&json_path, json_content)?;
    info!(path = ?json_path, "Evidence JSON written");

    // 2. Markdown
    let markdown_path = evidence_dir.join(EVIDENCE_MARKDOWN);
    let markdown = EvidenceRenderer::new()?.render(MarkdownContext {
        report: &report,
        packs,
    })?;
    atomic_write(&markdown_path, markdown)?;
    info!(path = ?markdown_path, "Evidence markdown written");

    Ok(EvidencePaths {
        json: json_path,
        markdown: markdown_path,
    })
}
