//! Call data for single-`address` operations such as `isBlocklisted(address)`.
//!
//! Layout (36 bytes): selector[0..4] ++ zero[4..16] ++ address[16..36].

use crate::Result;
use crate::selector::Selector;

use anyhow::{Context, bail};
use regex::Regex;

pub const ADDRESS_LEN: usize = 20;
pub const CALLDATA_LEN: usize = 4 + 32;

/// Parse `0x` followed by 40 hex digits (any case) into raw address bytes.
pub fn parse_address(s: &str) -> Result<[u8; ADDRESS_LEN]> {
    const ADDRESS_RE: &str = r#"^0[xX]([0-9a-fA-F]{40})$"#;
    let re = Regex::new(ADDRESS_RE)?;

    let digits = match re.captures(s.trim()).and_then(|c| c.get(1)) {
        Some(m) => m.as_str(),
        None => bail!("address must be 0x followed by 40 hex digits: {:?}", s),
    };

    let mut out = [0u8; ADDRESS_LEN];
    hex::decode_to_slice(digits, &mut out).with_context(|| format!("bad address hex {}", s))?;
    Ok(out)
}

pub fn encode_address_call(selector: Selector, address: &[u8; ADDRESS_LEN]) -> [u8; CALLDATA_LEN] {
    let mut data = [0u8; CALLDATA_LEN];
    data[..4].copy_from_slice(selector.as_bytes());
    data[CALLDATA_LEN - ADDRESS_LEN..].copy_from_slice(address);
    data
}

pub fn to_hex(data: &[u8]) -> String {
    format!("0x{}", hex::encode(data))
}
