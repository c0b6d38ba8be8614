// Built-in domain packs checked through the shared validator.

use anyhow::{Context, Result};
use dpack_core::PackRegistry;
use dpack_core::application::{RegistrySources, load_registry, validate_registry};
use dpack_core::domain::pack::{DomainPack, PiiLevel, PolicyScope};
use dpack_core::domain::validation::{validate_dataset, validate_pack};

fn registry() -> Result<PackRegistry> {
    Ok(load_registry(&RegistrySources::default())?)
}

#[test]
fn test_exactly_three_builtin_packs() -> Result<()> {
    let registry = registry()?;
    assert_eq!(registry.len(), 3);
    assert_eq!(
        registry.list_domain_names(),
        ["Credit Risk", "AML/FCC", "Finance/Reg Reporting"]
    );
    Ok(())
}

#[test]
fn test_lookup_by_exact_domain_name() -> Result<()> {
    let registry = registry()?;
    for name in ["Credit Risk", "AML/FCC", "Finance/Reg Reporting"] {
        let pack = registry.get_pack(name).context(name.to_string())?;
        assert_eq!(pack.domain, name);
    }
    assert!(registry.get_pack("nonexistent").is_none());
    Ok(())
}

#[test]
fn test_every_pack_passes_validation_without_warnings() -> Result<()> {
    let registry = registry()?;
    let run = validate_registry(&registry);

    for outcome in run.outcomes() {
        assert!(
            outcome.result.valid(),
            "{}: {:?}",
            outcome.domain,
            outcome.result.errors()
        );
        assert!(
            outcome.result.warnings().is_empty(),
            "{}: {:?}",
            outcome.domain,
            outcome.result.warnings()
        );
    }
    assert!(run.all_valid());
    Ok(())
}

#[test]
fn test_validity_matches_error_list() -> Result<()> {
    for pack in registry()?.list_packs() {
        let result = validate_pack(pack);
        assert_eq!(result.valid(), result.errors().is_empty());
    }
    Ok(())
}

#[test]
fn test_validation_is_repeatable() -> Result<()> {
    for pack in registry()?.list_packs() {
        assert_eq!(validate_pack(pack), validate_pack(pack));
    }
    Ok(())
}

#[test]
fn test_metadata_is_complete() -> Result<()> {
    for pack in registry()?.list_packs() {
        let meta = pack.metadata.as_ref().context("metadata")?;
        assert!(meta.version.is_some());
        assert!(meta.created.is_some());
        assert!(meta.author.is_some());
    }
    Ok(())
}

#[test]
fn test_packs_are_runnable_in_demo_mode() -> Result<()> {
    for pack in registry()?.list_packs() {
        assert!(pack.sample_questions.len() >= 2, "{}", pack.domain);
        for dataset in &pack.datasets {
            assert!(dataset.sample_row_count > 0);
            assert!(!dataset.columns.is_empty());
            assert!(validate_dataset(dataset).valid(), "{}", dataset.id);
        }
    }
    Ok(())
}

#[test]
fn test_questions_reference_datasets_of_their_own_pack() -> Result<()> {
    for pack in registry()?.list_packs() {
        let ids: Vec<&str> = pack.dataset_ids().collect();
        for question in &pack.sample_questions {
            assert!(!question.measures().is_empty());
            assert!(question.requires_approval.is_some());
            for id in &question.expected_datasets {
                assert!(ids.contains(&id.as_str()), "{} -> {}", question.question, id);
            }
        }
    }
    Ok(())
}

#[test]
fn test_high_pii_datasets_are_covered_by_a_policy() -> Result<()> {
    for pack in registry()?.list_packs() {
        let has_high_pii = pack.datasets.iter().any(|d| d.pii_level == PiiLevel::High);
        if has_high_pii {
            assert!(
                pack.policies.iter().any(|p| p.covers_pii_level(&PiiLevel::High)),
                "{}",
                pack.domain
            );
        }
        for policy in &pack.policies {
            assert!(matches!(
                policy.scope,
                PolicyScope::Dataset | PolicyScope::Domain | PolicyScope::Global
            ));
        }
    }
    Ok(())
}

#[test]
fn test_broken_copy_of_builtin_pack_is_flagged() -> Result<()> {
    let registry = registry()?;
    let mut pack: DomainPack = registry.get_pack("AML/FCC").context("AML/FCC")?.clone();
    pack.sample_questions[0]
        .expected_datasets
        .push("wire_transfers".into());
    pack.datasets[0].sample_row_count = 0;

    let result = validate_pack(&pack);
    assert!(!result.valid());
    assert!(
        result
            .errors()
            .iter()
            .any(|e| e.contains("references unknown dataset wire_transfers"))
    );
    assert!(
        result
            .errors()
            .iter()
            .any(|e| e == "Dataset transactions has invalid sampleRowCount")
    );
    Ok(())
}
