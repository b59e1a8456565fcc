//! Unit Conversions
//!
//! Byte-size and time helpers built on the registry's unit constants.

use crate::error::{Error, Result};

use super::constant::{BYTES_TO_GB, BYTES_TO_KB, BYTES_TO_MB, MIC_SEC};

pub fn bytes_to_gb(bytes: u64) -> f64 {
    bytes as f64 / BYTES_TO_GB as f64
}

/// Divides by [`BYTES_TO_MB`], so the result is slightly larger than a true MiB count
pub fn bytes_to_mb(bytes: u64) -> f64 {
    bytes as f64 / BYTES_TO_MB as f64
}

pub fn bytes_to_kb(bytes: u64) -> f64 {
    bytes as f64 / BYTES_TO_KB as f64
}

pub fn micros_to_secs(micros: u64) -> f64 {
    micros as f64 / MIC_SEC as f64
}

/// Format bytes for a capacity column
pub fn format_capacity(bytes: u64) -> String {
    if bytes >= BYTES_TO_GB {
        format!("{:.2}GiB", bytes_to_gb(bytes))
    } else if bytes >= BYTES_TO_MB {
        format!("{:.2}MiB", bytes_to_mb(bytes))
    } else if bytes >= BYTES_TO_KB {
        format!("{:.2}KiB", bytes_to_kb(bytes))
    } else {
        format!("{}B", bytes)
    }
}

/// Parse a Kubernetes quantity (e.g. "10Gi", "500M", "4096") to bytes.
///
/// Integer arithmetic throughout; a fractional part is truncated to whole
/// bytes. Values that do not fit in a `u64` are rejected.
pub fn parse_quantity(s: &str) -> Result<u64> {
    let s = s.trim();
    if s.is_empty() {
        return Err(Error::CapacityParse("empty quantity".into()));
    }

    let num_end = s
        .char_indices()
        .find(|(_, c)| !c.is_ascii_digit() && *c != '.')
        .map(|(i, _)| i)
        .unwrap_or(s.len());
    let (num_str, unit_str) = s.split_at(num_end);

    // Kubernetes suffixes: binary (Ki, Mi, ...) and decimal SI (k, M, ...)
    let multiplier: u64 = match unit_str {
        "" => 1,
        "Ki" => 1 << 10,
        "Mi" => 1 << 20,
        "Gi" => 1 << 30,
        "Ti" => 1 << 40,
        "Pi" => 1 << 50,
        "Ei" => 1 << 60,
        "k" => 1_000,
        "M" => 1_000_000,
        "G" => 1_000_000_000,
        "T" => 1_000_000_000_000,
        "P" => 1_000_000_000_000_000,
        "E" => 1_000_000_000_000_000_000,
        _ => return Err(Error::CapacityParse(format!("unknown unit: {}", unit_str))),
    };

    let invalid = || Error::CapacityParse(format!("invalid number: {}", s));
    let (int_str, frac_str) = num_str.split_once('.').unwrap_or((num_str, ""));
    if (int_str.is_empty() && frac_str.is_empty()) || frac_str.contains('.') {
        return Err(invalid());
    }

    let whole: u64 = if int_str.is_empty() {
        0
    } else {
        int_str.parse().map_err(|_| invalid())?
    };

    // digits past 10^-18 cannot contribute a whole byte for any suffix
    let frac_digits = &frac_str[..frac_str.len().min(18)];
    let fraction: u64 = if frac_digits.is_empty() {
        0
    } else {
        let numerator: u128 = frac_digits.parse().map_err(|_| invalid())?;
        let scale = 10u128.pow(frac_digits.len() as u32);
        (numerator * multiplier as u128 / scale) as u64
    };

    whole
        .checked_mul(multiplier)
        .and_then(|bytes| bytes.checked_add(fraction))
        .ok_or_else(|| Error::CapacityParse(format!("quantity overflows u64: {}", s)))
}
