//! Scan a catalog: derive every selector, look for the target, and compute
//! the reference value.

use crate::catalog::ValidatedCatalog;
use crate::selector::{HashAlgorithm, Selector, derive_selector};

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectorEntry {
    pub signature: String,
    pub selector: Selector,
}

/// Everything the renderers need, in catalog order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScanReport {
    pub algorithm: HashAlgorithm,
    pub selectors: Vec<SelectorEntry>,
    pub target: Selector,
    #[serde(rename = "match")]
    pub matched: Option<String>,
    pub reference: SelectorEntry,
}

pub fn scan(catalog: &ValidatedCatalog, algorithm: HashAlgorithm) -> ScanReport {
    // 1) Selector per entry.
    let selectors = catalog
        .signatures
        .iter()
        .map(|sig| SelectorEntry {
            signature: sig.clone(),
            selector: derive_selector(sig, algorithm),
        })
        .collect();

    // 2) Match pass recomputes rather than reusing step 1.
    let matched = find_match(&catalog.signatures, catalog.target, algorithm);
    match &matched {
        Some(sig) => log::info!("{} matches {}", catalog.target, sig),
        None => log::info!("{} matches no catalog entry", catalog.target),
    }

    // 3) Reference value.
    let reference = SelectorEntry {
        signature: catalog.reference.clone(),
        selector: derive_selector(&catalog.reference, algorithm),
    };

    ScanReport {
        algorithm,
        selectors,
        target: catalog.target,
        matched,
        reference,
    }
}

/// First signature whose selector equals `target`.
pub fn find_match(
    signatures: &[String],
    target: Selector,
    algorithm: HashAlgorithm,
) -> Option<String> {
    signatures
        .iter()
        .find(|sig| derive_selector(sig, algorithm) == target)
        .cloned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CatalogSpec;
    use pretty_assertions::assert_eq;

    fn builtin() -> ValidatedCatalog {
        CatalogSpec::builtin().validate_and_build().unwrap()
    }

    #[test]
    fn builtin_target_has_no_sha3_match() {
        let report = scan(&builtin(), HashAlgorithm::Sha3_256);
        assert_eq!(report.matched, None);
        assert_eq!(report.selectors.len(), 5);
    }

    #[test]
    fn builtin_target_has_no_keccak_match() {
        let report = scan(&builtin(), HashAlgorithm::Keccak256);
        assert_eq!(report.matched, None);
    }

    #[test]
    fn target_matches_listed_signature() {
        let mut cat = builtin();
        cat.signatures.push("initialized()".to_string());
        let report = scan(&cat, HashAlgorithm::Keccak256);
        assert_eq!(report.matched.as_deref(), Some("initialized()"));
    }

    #[test]
    fn match_names_entry_with_equal_selector() {
        let cat = builtin();
        let target = derive_selector("getBlocklistCount()", HashAlgorithm::Sha3_256);
        assert_eq!(
            find_match(&cat.signatures, target, HashAlgorithm::Sha3_256).as_deref(),
            Some("getBlocklistCount()")
        );
    }

    #[test]
    fn reference_agrees_with_first_pass() {
        let report = scan(&builtin(), HashAlgorithm::Sha3_256);
        let first_pass = report
            .selectors
            .iter()
            .find(|e| e.signature == report.reference.signature)
            .unwrap();
        assert_eq!(first_pass.selector, report.reference.selector);
        assert_eq!(report.reference.selector.to_string(), "0x53c9b97f");
    }

    #[test]
    fn order_is_preserved() {
        let report = scan(&builtin(), HashAlgorithm::Sha3_256);
        let sigs: Vec<&str> = report.selectors.iter().map(|e| e.signature.as_str()).collect();
        assert_eq!(sigs, crate::catalog::builtin::SIGNATURES.to_vec());
    }
}
