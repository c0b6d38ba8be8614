// dpack/src/commands/show.rs
//
// USE CASE: print one pack in full.

use comfy_table::Table;

use crate::cli::SourceArgs;
use crate::commands::open_workspace;
use dpack_core::domain::DomainError;

const KEY_COLUMNS: usize = 3;

pub fn execute(source: SourceArgs, domain: String) -> anyhow::Result<()> {
    let workspace = open_workspace(source)?;
    let Some(pack) = workspace.registry.get_pack(&domain) else {
        return Err(DomainError::PackNotFound(domain).into());
    };

    println!("📦 {}", pack.domain);
    println!("   {}", pack.description);
    if let Some(meta) = &pack.metadata {
        println!(
            "   Version: {} | Created: {} | Author: {}",
            meta.version.as_deref().unwrap_or("-"),
            meta.created.as_deref().unwrap_or("-"),
            meta.author.as_deref().unwrap_or("-")
        );
        if !meta.tags.is_empty() {
            println!("   Tags: {}", meta.tags.join(", "));
        }
    }

    let mut datasets = Table::new();
    datasets.set_header(vec![
        "ID",
        "Name",
        "PII",
        "Jurisdiction",
        "Freshness",
        "Columns",
        "Rows",
        "Owner",
        "Key Columns",
    ]);
    for ds in &pack.datasets {
        let mut key_columns = ds.key_columns(KEY_COLUMNS).join(", ");
        if ds.columns.len() > KEY_COLUMNS {
            key_columns.push_str(", ...");
        }
        datasets.add_row(vec![
            ds.id.clone(),
            ds.name.clone(),
            ds.pii_level.to_string(),
            ds.jurisdiction.to_string(),
            ds.freshness_sla.to_string(),
            ds.columns.len().to_string(),
            ds.sample_row_count.to_string(),
            ds.owner.clone(),
            key_columns,
        ]);
    }
    println!("\n🗄️  Datasets ({})", pack.datasets.len());
    println!("{datasets}");

    println!("\n📖 Glossary ({})", pack.glossary.len());
    for term in &pack.glossary {
        if term.synonyms.is_empty() {
            println!("   • {}: {}", term.term, term.definition);
        } else {
            println!(
                "   • {} ({}): {}",
                term.term,
                term.synonyms.join(", "),
                term.definition
            );
        }
    }

    println!("\n🔒 Policies ({})", pack.policies.len());
    for policy in &pack.policies {
        println!(
            "   • [{}] {} ({}): {}",
            policy.id, policy.name, policy.scope, policy.description
        );
    }

    println!("\n💬 Sample Questions ({})", pack.sample_questions.len());
    for (i, q) in pack.sample_questions.iter().enumerate() {
        println!("   {}. {}", i + 1, q.question);
        println!("      Measures: {}", q.measures().join(", "));
        println!("      Datasets: {}", q.expected_datasets.join(", "));
        println!(
            "      Requires Approval: {}",
            match q.requires_approval {
                Some(true) => "Yes",
                Some(false) => "No",
                None => "unspecified",
            }
        );
    }

    Ok(())
}
