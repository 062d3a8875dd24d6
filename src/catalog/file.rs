//! Catalog file (catalog.json): a list of candidate signatures plus an
//! optional target selector and reference signature.
//!
//! JSON shape:
//! {
//!   "signatures": ["isBlocklisted(address)", "initialize()"],
//!   "target": "0x158ef93e",                // optional
//!   "reference": "isBlocklisted(address)"  // optional, need not be listed
//! }
//!
//! Signatures are kept byte-for-byte; duplicates are rejected so a target
//! can match at most one entry.

use crate::Result;
use crate::catalog::builtin;
use crate::selector::Selector;

use anyhow::{Context, bail};
use serde::Deserialize;
use std::collections::BTreeSet;
use std::fs;

#[derive(Debug, Clone, Deserialize)]
pub struct CatalogSpec {
    #[serde(default)]
    pub signatures: Vec<String>,

    #[serde(default)]
    pub target: Option<String>,

    #[serde(default)]
    pub reference: Option<String>,
}

/// Catalog ready for scanning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedCatalog {
    pub signatures: Vec<String>,
    pub target: Selector,
    pub reference: String,
}

impl CatalogSpec {
    /// The built-in blocklist catalog.
    pub fn builtin() -> Self {
        Self {
            signatures: builtin::SIGNATURES.iter().map(|s| s.to_string()).collect(),
            target: Some(builtin::TARGET.to_string()),
            reference: Some(builtin::REFERENCE.to_string()),
        }
    }

    pub fn from_file(path: &str) -> Result<Self> {
        let text =
            fs::read_to_string(path).with_context(|| format!("read catalog file {}", path))?;
        serde_json::from_str(&text).with_context(|| format!("parse catalog file {}", path))
    }

    /// Check entries are present and unique, and resolve defaults.
    pub fn validate_and_build(&self) -> Result<ValidatedCatalog> {
        if self.signatures.is_empty() {
            bail!("catalog contained no signatures");
        }

        let mut seen = BTreeSet::new();
        for sig in &self.signatures {
            if !seen.insert(sig.as_str()) {
                bail!("duplicate signature in catalog: {:?}", sig);
            }
        }

        let target = self.target.as_deref().unwrap_or(builtin::TARGET);
        let target: Selector = target
            .parse()
            .with_context(|| format!("bad catalog target {:?}", target))?;

        let reference = self
            .reference
            .clone()
            .unwrap_or_else(|| builtin::REFERENCE.to_string());

        Ok(ValidatedCatalog {
            signatures: self.signatures.clone(),
            target,
            reference,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn builtin_catalog_validates() {
        let cat = CatalogSpec::builtin().validate_and_build().unwrap();
        assert_eq!(cat.signatures.len(), 5);
        assert_eq!(cat.signatures[0], "isBlocklisted(address)");
        assert_eq!(cat.target.to_string(), "0x158ef93e");
        assert_eq!(cat.reference, "isBlocklisted(address)");
    }

    #[test]
    fn optional_fields_default() {
        let spec: CatalogSpec = serde_json::from_str(r#"{"signatures": ["initialize()"]}"#).unwrap();
        let cat = spec.validate_and_build().unwrap();
        assert_eq!(cat.target.to_string(), builtin::TARGET);
        assert_eq!(cat.reference, builtin::REFERENCE);
    }

    #[test]
    fn empty_catalog_is_rejected() {
        let spec: CatalogSpec = serde_json::from_str("{}").unwrap();
        let err = spec.validate_and_build().unwrap_err();
        assert!(err.to_string().contains("no signatures"));
    }

    #[test]
    fn duplicate_signature_is_rejected() {
        let spec: CatalogSpec =
            serde_json::from_str(r#"{"signatures": ["initialize()", "initialize()"]}"#).unwrap();
        let err = spec.validate_and_build().unwrap_err();
        assert!(err.to_string().contains("duplicate signature"));
    }

    #[test]
    fn bad_target_is_rejected() {
        let spec: CatalogSpec =
            serde_json::from_str(r#"{"signatures": ["initialize()"], "target": "0x12"}"#).unwrap();
        assert!(spec.validate_and_build().is_err());
    }

    #[test]
    fn missing_file_reports_path() {
        let err = CatalogSpec::from_file("/nonexistent/catalog.json").unwrap_err();
        assert!(err.to_string().contains("/nonexistent/catalog.json"));
    }
}
