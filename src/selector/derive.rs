use crate::Result;
use crate::selector::HashAlgorithm;

use anyhow::{Context, bail};
use regex::Regex;
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Number of digest bytes kept in a selector (8 hex chars).
pub const SELECTOR_LEN: usize = 4;

/// Truncated digest of an operation signature.
///
/// Always renders as `0x` followed by 8 lowercase hex digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Selector([u8; SELECTOR_LEN]);

impl Selector {
    pub fn new(bytes: [u8; SELECTOR_LEN]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; SELECTOR_LEN] {
        &self.0
    }
}

/// Hash `signature` exactly as given and keep the first four digest bytes.
pub fn derive_selector(signature: &str, algorithm: HashAlgorithm) -> Selector {
    let digest = algorithm.digest(signature.as_bytes());
    let mut bytes = [0u8; SELECTOR_LEN];
    bytes.copy_from_slice(&digest[..SELECTOR_LEN]);

    let selector = Selector::new(bytes);
    log::debug!("{} {:?} -> {}", algorithm, signature, selector);
    selector
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl Serialize for Selector {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl FromStr for Selector {
    type Err = anyhow::Error;

    /// Accepts `0x158ef93e`, `0X158EF93E` or a bare `158ef93e`.
    fn from_str(s: &str) -> Result<Self> {
        const SELECTOR_RE: &str = r#"^(?:0[xX])?([0-9a-fA-F]{8})$"#;
        let re = Regex::new(SELECTOR_RE)?;

        let digits = match re.captures(s.trim()).and_then(|c| c.get(1)) {
            Some(m) => m.as_str(),
            None => bail!("selector must be 8 hex digits with optional 0x prefix: {:?}", s),
        };

        let mut bytes = [0u8; SELECTOR_LEN];
        hex::decode_to_slice(digits, &mut bytes)
            .with_context(|| format!("bad selector hex {}", digits))?;
        Ok(Selector::new(bytes))
    }
}
