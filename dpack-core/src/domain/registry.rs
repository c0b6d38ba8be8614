// dpack-core/src/domain/registry.rs

use std::collections::HashSet;

use crate::domain::error::DomainError;
use crate::domain::pack::DomainPack;

/// Read-only, insertion-ordered collection of domain packs.
///
/// Built once at startup and passed explicitly to whoever needs it;
/// there is no global instance.
#[derive(Debug, Clone, Default)]
pub struct PackRegistry {
    packs: Vec<DomainPack>,
}

impl PackRegistry {
    /// Fails if two packs share the same `domain`.
    pub fn new(packs: Vec<DomainPack>) -> Result<Self, DomainError> {
        let mut seen = HashSet::new();
        for pack in &packs {
            if !seen.insert(pack.domain.as_str()) {
                return Err(DomainError::DuplicateDomain(pack.domain.clone()));
            }
        }
        Ok(Self { packs })
    }

    pub fn list_packs(&self) -> &[DomainPack] {
        &self.packs
    }

    /// Exact, case-sensitive match on the domain name.
    pub fn get_pack(&self, name: &str) -> Option<&DomainPack> {
        self.packs.iter().find(|p| p.domain == name)
    }

    pub fn list_domain_names(&self) -> Vec<&str> {
        self.packs.iter().map(|p| p.domain.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.packs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.packs.is_empty()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn pack(domain: &str) -> DomainPack {
        DomainPack {
            domain: domain.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_lookup_is_exact_and_case_sensitive() -> anyhow::Result<()> {
        let registry = PackRegistry::new(vec![pack("Credit Risk"), pack("AML/FCC")])?;

        assert_eq!(
            registry.get_pack("Credit Risk").map(|p| p.domain.as_str()),
            Some("Credit Risk")
        );
        assert!(registry.get_pack("credit risk").is_none());
        assert!(registry.get_pack("Credit").is_none());
        assert!(registry.get_pack("nonexistent").is_none());
        Ok(())
    }

    #[test]
    fn test_order_is_insertion_order_and_stable() -> anyhow::Result<()> {
        let registry = PackRegistry::new(vec![pack("B"), pack("A"), pack("C")])?;
        assert_eq!(registry.list_domain_names(), ["B", "A", "C"]);
        assert_eq!(registry.list_domain_names(), registry.list_domain_names());
        assert_eq!(registry.list_packs()[1].domain, "A");
        assert_eq!(registry.len(), 3);
        Ok(())
    }

    #[test]
    fn test_duplicate_domain_is_rejected() {
        let err = PackRegistry::new(vec![pack("AML/FCC"), pack("AML/FCC")]).unwrap_err();
        assert!(matches!(err, DomainError::DuplicateDomain(ref d) if d == "AML/FCC"));
    }

    #[test]
    fn test_empty_registry() -> anyhow::Result<()> {
        let registry = PackRegistry::new(vec![])?;
        assert!(registry.is_empty());
        assert!(registry.list_domain_names().is_empty());
        Ok(())
    }
}
