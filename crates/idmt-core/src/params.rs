//! Reading relay settings from an external parameter source.
//!
//! Raw values arrive as text. Anything missing, unparseable, or non-finite is
//! read as `0.0`, which turns the affected relay into a degenerate one with an
//! empty curve.

use std::collections::HashMap;

use crate::error::ParseError;
use crate::relay::{ParamField, PerRelay, RelayConfig, RelaySettings};

/// Something that can report the current text of the six named inputs.
pub trait ParameterSource {
    fn raw_value(&self, field: ParamField) -> Option<String>;

    /// Normalized numeric value of a field.
    fn value(&self, field: ParamField) -> f64 {
        normalize_param(self.raw_value(field).as_deref())
    }

    /// Fresh snapshot of all three relays.
    fn read_settings(&self) -> RelaySettings {
        PerRelay::from_fn(|slot| {
            RelayConfig::new(
                self.value(slot.pickup_field()),
                self.value(slot.multiplier_field()),
            )
        })
    }
}

impl ParameterSource for HashMap<ParamField, String> {
    fn raw_value(&self, field: ParamField) -> Option<String> {
        self.get(&field).cloned()
    }
}

impl ParameterSource for RelaySettings {
    fn raw_value(&self, field: ParamField) -> Option<String> {
        Some(self.get(field.slot).value(field.kind).to_string())
    }
}

/// Parse the whole string as a finite number.
pub fn parse_strict(raw: &str) -> Result<f64, ParseError> {
    let s = raw.trim();
    if s.is_empty() {
        return Err(ParseError::Empty);
    }
    let v: f64 = s
        .parse()
        .map_err(|_| ParseError::NotANumber(s.to_string()))?;
    if !v.is_finite() {
        return Err(ParseError::NonFinite(s.to_string()));
    }
    Ok(v)
}

/// Parse the longest leading number, ignoring trailing text (`"12kA"` is 12).
pub fn parse_leading(raw: &str) -> Result<f64, ParseError> {
    let s = raw.trim_start();
    if s.is_empty() {
        return Err(ParseError::Empty);
    }
    let prefix = numeric_prefix(s);
    if prefix.is_empty() {
        return Err(ParseError::NotANumber(s.trim_end().to_string()));
    }
    parse_strict(prefix)
}

/// Boundary normalization: every failure reads as `0.0`.
pub fn normalize_param(raw: Option<&str>) -> f64 {
    let Some(raw) = raw else {
        return 0.0;
    };
    match parse_leading(raw) {
        Ok(v) => v,
        Err(e) => {
            log::debug!("[params] {e}; using 0");
            0.0
        }
    }
}

// [sign] digits [. digits] [e [sign] digits], at least one mantissa digit.
fn numeric_prefix(s: &str) -> &str {
    let b = s.as_bytes();
    let mut i = 0;
    if matches!(b.first(), Some(b'+' | b'-')) {
        i += 1;
    }
    let int_start = i;
    while i < b.len() && b[i].is_ascii_digit() {
        i += 1;
    }
    let mut digits = i - int_start;
    if i < b.len() && b[i] == b'.' {
        let frac_start = i + 1;
        let mut j = frac_start;
        while j < b.len() && b[j].is_ascii_digit() {
            j += 1;
        }
        digits += j - frac_start;
        if digits > 0 {
            i = j;
        }
    }
    if digits == 0 {
        return &s[..0];
    }
    if i < b.len() && matches!(b[i], b'e' | b'E') {
        let mut j = i + 1;
        if matches!(b.get(j), Some(b'+' | b'-')) {
            j += 1;
        }
        let exp_start = j;
        while j < b.len() && b[j].is_ascii_digit() {
            j += 1;
        }
        if j > exp_start {
            i = j;
        }
    }
    &s[..i]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefix_scanner_stops_at_first_non_numeric() {
        assert_eq!(numeric_prefix("12kA"), "12");
        assert_eq!(numeric_prefix("1.5.2"), "1.5");
        assert_eq!(numeric_prefix("2e"), "2");
        assert_eq!(numeric_prefix("2e-1x"), "2e-1");
        assert_eq!(numeric_prefix("-.25"), "-.25");
        assert_eq!(numeric_prefix("."), "");
        assert_eq!(numeric_prefix("abc"), "");
    }
}
