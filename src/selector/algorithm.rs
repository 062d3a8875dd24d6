//! Digest algorithms a selector can be derived with.

use serde::Serialize;
use sha3::{Digest, Keccak256, Sha3_256};
use std::fmt;

/// 256-bit digest used to hash a signature.
///
/// `Sha3_256` is the NIST-padded SHA3 variant; `Keccak256` keeps the original
/// Keccak padding and is what EVM call data expects.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum, Serialize)]
pub enum HashAlgorithm {
    #[default]
    #[value(name = "sha3-256")]
    #[serde(rename = "sha3-256")]
    Sha3_256,
    #[value(name = "keccak256")]
    #[serde(rename = "keccak256")]
    Keccak256,
}

impl HashAlgorithm {
    pub fn digest(self, bytes: &[u8]) -> [u8; 32] {
        let mut out = [0u8; 32];
        match self {
            HashAlgorithm::Sha3_256 => out.copy_from_slice(&Sha3_256::digest(bytes)),
            HashAlgorithm::Keccak256 => out.copy_from_slice(&Keccak256::digest(bytes)),
        }
        out
    }

    pub fn name(self) -> &'static str {
        match self {
            HashAlgorithm::Sha3_256 => "sha3-256",
            HashAlgorithm::Keccak256 => "keccak256",
        }
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
