// dpack/src/commands/list.rs
//
// USE CASE: list registered packs in registry order.

use comfy_table::Table;

use crate::cli::SourceArgs;
use crate::commands::open_workspace;

pub fn execute(source: SourceArgs) -> anyhow::Result<()> {
    let workspace = open_workspace(source)?;

    let mut table = Table::new();
    table.set_header(vec![
        "Domain",
        "Version",
        "Datasets",
        "Glossary",
        "Policies",
        "Questions",
    ]);

    for pack in workspace.registry.list_packs() {
        table.add_row(vec![
            pack.domain.clone(),
            pack.version().unwrap_or("-").to_string(),
            pack.datasets.len().to_string(),
            pack.glossary.len().to_string(),
            pack.policies.len().to_string(),
            pack.sample_questions.len().to_string(),
        ]);
    }

    println!("📦 {} domain pack(s) registered", workspace.registry.len());
    println!("{table}");
    Ok(())
}
