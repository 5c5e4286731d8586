//! Table of rate coefficient functions whose arguments are rewritten to double precision.
//!
//! A call is recognized by the 4 characters right before its opening parenthesis,
//! so a function with a 3-letter name is matched together with the blank before it
//! (" ARR"), which keeps it apart from names ending in ARR.

/// 4-character lookbehinds of the recognized rate functions
pub const RATE_FUNCTION_PREFIXES: &[&str] = &[
    "TERM", "TYP3", "TYP2", "PHO2", "ERCO", "TJPL", " ARR", "ARR2",
];

/// physical variables (air density, temperature, humidity) passed to rate functions as is
pub const RESERVED_IDENTIFIERS: &[&str] = &["AIR", "TEMP", "H2Oz"];

/// length of the lookbehind window in characters
pub const PREFIX_LEN: usize = 4;

pub fn default_prefixes() -> Vec<String> {
    RATE_FUNCTION_PREFIXES.iter().map(|p| p.to_string()).collect()
}

pub fn default_reserved_identifiers() -> Vec<String> {
    RESERVED_IDENTIFIERS.iter().map(|s| s.to_string()).collect()
}
