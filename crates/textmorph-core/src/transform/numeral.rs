//! Numeral-base encoders
//!
//! Input is split into maximal decimal-digit runs (any script) and the runs
//! between them. Those are copied through; decimal runs are re-encoded by
//! numeric value. Validation admits digits in the broad sense, so a form
//! like `²` passes validation and is then copied through unconverted.

use super::{Transform, TransformResult};
use crate::classify::{decimal_digit_value, is_all_digits, is_decimal_digit, is_meaningless};
use rand::RngCore;

/// Each digit as a 4-bit group, groups separated by spaces
#[derive(Debug, Clone, Copy, Default)]
pub struct BinaryEncode;

/// Each digit as its own octal value, separated by spaces
#[derive(Debug, Clone, Copy, Default)]
pub struct OctalEncode;

/// Each digit run as one lower-case hexadecimal number
#[derive(Debug, Clone, Copy, Default)]
pub struct HexadecimalEncode;

fn validate_digits(input: &str) -> bool {
    let trimmed = input.trim();
    !is_meaningless(trimmed) && is_all_digits(trimmed)
}

/// Split `text` into alternating decimal / non-decimal runs
fn runs(text: &str) -> impl Iterator<Item = (bool, &str)> {
    let mut rest = text;
    std::iter::from_fn(move || {
        let first = rest.chars().next()?;
        let digit = is_decimal_digit(first);
        let end = rest
            .char_indices()
            .find(|(_, c)| is_decimal_digit(*c) != digit)
            .map(|(i, _)| i)
            .unwrap_or(rest.len());
        let (run, tail) = rest.split_at(end);
        rest = tail;
        Some((digit, run))
    })
}

/// Re-encode every digit run with `encode`; a run it cannot encode is kept as-is.
fn encode_digit_runs(input: &str, encode: impl Fn(&str) -> Option<String>) -> String {
    runs(input.trim())
        .map(|(digit, run)| {
            if digit {
                encode(run).unwrap_or_else(|| run.to_string())
            } else {
                run.to_string()
            }
        })
        .collect()
}

fn per_digit(run: &str, format: impl Fn(u32) -> String) -> Option<String> {
    let groups = run
        .chars()
        .map(|c| decimal_digit_value(c).map(&format))
        .collect::<Option<Vec<_>>>()?;
    Some(groups.join(" "))
}

/// Arbitrary-length decimal string to lower-case hex by repeated division
pub(crate) fn decimal_to_hex(run: &str) -> Option<String> {
    let mut digits = run
        .chars()
        .map(decimal_digit_value)
        .collect::<Option<Vec<u32>>>()?;
    if digits.is_empty() {
        return None;
    }

    let mut hex = Vec::new();
    while digits.iter().any(|d| *d != 0) {
        let mut remainder = 0;
        let mut quotient = Vec::with_capacity(digits.len());
        for d in &digits {
            let acc = remainder * 10 + d;
            let q = acc / 16;
            remainder = acc % 16;
            if !(quotient.is_empty() && q == 0) {
                quotient.push(q);
            }
        }
        hex.push(std::char::from_digit(remainder, 16)?);
        digits = quotient;
    }

    if hex.is_empty() {
        return Some("0".to_string());
    }
    Some(hex.iter().rev().collect())
}

impl Transform for BinaryEncode {
    fn name(&self) -> &'static str {
        "binary"
    }

    fn validate(&self, input: &str) -> bool {
        validate_digits(input)
    }

    fn transform(&self, input: &str, _rng: &mut dyn RngCore) -> TransformResult<String> {
        Ok(encode_digit_runs(input, |run| per_digit(run, |d| format!("{:04b}", d))))
    }
}

impl Transform for OctalEncode {
    fn name(&self) -> &'static str {
        "octal"
    }

    fn validate(&self, input: &str) -> bool {
        validate_digits(input)
    }

    fn transform(&self, input: &str, _rng: &mut dyn RngCore) -> TransformResult<String> {
        Ok(encode_digit_runs(input, |run| per_digit(run, |d| format!("{:o}", d))))
    }
}

impl Transform for HexadecimalEncode {
    fn name(&self) -> &'static str {
        "hexadecimal"
    }

    fn validate(&self, input: &str) -> bool {
        validate_digits(input)
    }

    fn transform(&self, input: &str, _rng: &mut dyn RngCore) -> TransformResult<String> {
        Ok(encode_digit_runs(input, decimal_to_hex))
    }
}
