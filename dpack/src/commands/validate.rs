// dpack/src/commands/validate.rs
//
// USE CASE: validate every registered pack, write evidence, fail the
// process if any pack is invalid.

use anyhow::Context;
use chrono::Utc;
use comfy_table::Table;
use std::path::PathBuf;

use crate::cli::SourceArgs;
use crate::commands::open_workspace;
use dpack_core::DomainPack;
use dpack_core::application::{ValidationRun, validate_registry, write_evidence};
use dpack_core::application::evidence::EvidenceSummary;

pub fn execute(
    source: SourceArgs,
    evidence_dir: Option<PathBuf>,
    no_evidence: bool,
) -> anyhow::Result<()> {
    println!("🚀 Starting domain pack validation...");

    let workspace = open_workspace(source)?;
    let packs = workspace.registry.list_packs();
    if packs.is_empty() {
        anyhow::bail!(
            "❌ No domain packs registered.\n👉 Check --packs-dir or `pack-paths` in dpack.yaml."
        );
    }

    let run = validate_registry(&workspace.registry);
    print_outcomes(packs, &run);

    if !no_evidence {
        let dir = evidence_dir
            .unwrap_or_else(|| workspace.project_dir.join(&workspace.config.evidence_path));
        let paths = write_evidence(&dir, Utc::now(), packs, &run)
            .with_context(|| format!("Failed to write evidence to {:?}", dir))?;
        println!("\n📄 Written evidence JSON: {}", paths.json.display());
        println!("📄 Written evidence markdown: {}", paths.markdown.display());
    }

    print_summary(packs, &run);

    if !run.all_valid() {
        eprintln!(
            "\n❌ FAILURE. {} of {} domain packs failed validation.",
            run.invalid_count(),
            packs.len()
        );
        std::process::exit(1);
    }

    println!("\n✨ SUCCESS! All domain packs validated.");
    Ok(())
}

fn print_outcomes(packs: &[DomainPack], run: &ValidationRun) {
    for (pack, outcome) in packs.iter().zip(run.outcomes()) {
        println!("\n🔍 Validating {} pack...", pack.domain);
        println!(
            "   {} datasets, {} glossary terms, {} policies, {} sample questions",
            pack.datasets.len(),
            pack.glossary.len(),
            pack.policies.len(),
            pack.sample_questions.len()
        );
        if let Some(version) = pack.version() {
            println!("   Metadata version: {}", version);
        }

        let result = &outcome.result;
        if result.valid() {
            println!("   ✅ Validation passed");
        } else {
            println!("   ❌ Validation failed");
            for error in result.errors() {
                println!("      ERROR: {}", error);
            }
        }
        for warning in result.warnings() {
            println!("      WARNING: {}", warning);
        }
    }
}

fn print_summary(packs: &[DomainPack], run: &ValidationRun) {
    let summary = EvidenceSummary::from_packs(packs);

    let mut table = Table::new();
    table.set_header(vec!["Domain", "Status", "Errors", "Warnings"]);
    for outcome in run.outcomes() {
        let status = if outcome.result.valid() { "PASS" } else { "FAIL" };
        table.add_row(vec![
            outcome.domain.clone(),
            status.to_string(),
            outcome.result.errors().len().to_string(),
            outcome.result.warnings().len().to_string(),
        ]);
    }

    println!("\n📊 VALIDATION SUMMARY");
    println!("{table}");
    println!("   Total Packs: {}", packs.len());
    println!(
        "   All Valid: {}",
        if run.all_valid() { "✅ YES" } else { "❌ NO" }
    );
    println!("   Total Datasets: {}", summary.total_datasets);
    println!("   Total Glossary Terms: {}", summary.total_glossary_terms);
    println!("   Total Policies: {}", summary.total_policies);
    println!("   Total Sample Questions: {}", summary.total_sample_questions);
}
