//! The catalog checked when no catalog file is given.

/// Blocklist contract operations, in display order.
pub const SIGNATURES: [&str; 5] = [
    "isBlocklisted(address)",
    "initialize()",
    "getBlocklistCount()",
    "addToBlocklist(address,string)",
    "removeFromBlocklist(address)",
];

/// Selector observed on the wire that we try to attribute.
pub const TARGET: &str = "0x158ef93e";

/// Signature whose selector is printed as the reference value.
pub const REFERENCE: &str = "isBlocklisted(address)";
