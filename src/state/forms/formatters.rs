//! Live input masks
//!
//! Formatters never validate. They reshape whatever the user typed into the
//! canonical display form and are safe to re-apply on every keystroke.

use super::field::FieldName;

/// Digits before the hyphen in a postal code
const POSTAL_PREFIX_DIGITS: usize = 5;
/// Digits after the hyphen in a postal code
const POSTAL_SUFFIX_DIGITS: usize = 3;

/// Apply the mask for `field`, passing unmasked fields through unchanged
pub fn format(field: FieldName, raw: &str) -> String {
    match field {
        FieldName::PostalCode => format_postal_code(raw),
        FieldName::State => format_state(raw),
        FieldName::Street | FieldName::Number => raw.to_string(),
    }
}

/// Mask a postal code as `NNNNN-NNN`.
///
/// Non-digits are dropped. Up to five digits are shown bare; past that a
/// hyphen follows the fifth digit and at most three more digits are kept.
pub fn format_postal_code(raw: &str) -> String {
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();

    if digits.len() <= POSTAL_PREFIX_DIGITS {
        return digits;
    }

    // `digits` is pure ASCII, so byte offsets are char offsets
    let suffix_end = digits.len().min(POSTAL_PREFIX_DIGITS + POSTAL_SUFFIX_DIGITS);
    format!(
        "{}-{}",
        &digits[..POSTAL_PREFIX_DIGITS],
        &digits[POSTAL_PREFIX_DIGITS..suffix_end]
    )
}

/// Uppercase a state abbreviation, one character at a time.
///
/// Characters whose uppercase form expands to several characters (`ß`) are
/// kept as typed so the length never changes.
pub fn format_state(raw: &str) -> String {
    raw.chars().map(upper_single).collect()
}

fn upper_single(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => c,
    }
}
