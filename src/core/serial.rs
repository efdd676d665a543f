//! Deterministic serial numbers and model codes
//!
//! Serials are pure functions of (prefix, year, index), so a batch can
//! never contain duplicates and reruns with the same seed produce the
//! same identifiers.

/// Serial number: `{PREFIX}{YEAR}{index:05}`, e.g. `YW202600042`
pub fn serial_number(prefix: &str, year: i32, index: usize) -> String {
    format!("{}{}{:05}", prefix, year, index)
}

/// First `n` characters of a table entry, for building model codes.
/// Character-based: the catalog contains accented names.
pub fn code_prefix(s: &str, n: usize) -> String {
    s.chars().take(n).collect()
}

/// Two-letter uppercased serial prefix derived from a brand name
pub fn brand_prefix(brand: &str) -> String {
    brand.chars().take(2).flat_map(char::to_uppercase).collect()
}

/// Accessory model code: `{brand:3}-{subtype:3}-{index:03}`
pub fn accessory_code(brand: &str, sub_type: &str, index: usize) -> String {
    format!("{}-{}-{:03}", code_prefix(brand, 3), code_prefix(sub_type, 3), index)
}

/// Spare part model code: `{brand:3}{family:3}{index:04}`
pub fn spare_part_code(brand: &str, family: &str, index: usize) -> String {
    format!("{}{}{:04}", code_prefix(brand, 3), code_prefix(family, 3), index)
}
