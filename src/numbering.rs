//! Dice-roll numbering
//!
//! Maps 0-indexed list positions to fixed-width base-`sides` numerals
//! with digits `1..=sides`, the way a physical dice throw sequence reads.

use crate::error::WordlistError;

/// Number of dice rolls needed to address a list of `length` entries.
///
/// Numbered output only makes sense when every roll sequence maps to an
/// entry and vice versa, so `length` must be an exact power of `sides`.
pub fn required_rolls(length: usize, sides: usize) -> Result<u32, WordlistError> {
    debug_assert!(sides >= 2);
    let mut rolls = 0u32;
    let mut span = 1usize;
    while span < length {
        span = match span.checked_mul(sides) {
            Some(s) => s,
            None => return Err(WordlistError::InvalidLength { length, sides }),
        };
        rolls += 1;
    }
    if span == length && rolls > 0 {
        Ok(rolls)
    } else {
        Err(WordlistError::InvalidLength { length, sides })
    }
}

/// Digits of `num` in base `base`, most significant first.
fn base_digits(mut num: usize, base: usize) -> Vec<usize> {
    let mut digits = Vec::new();
    loop {
        digits.push(num % base);
        num /= base;
        if num == 0 {
            break;
        }
    }
    digits.reverse();
    digits
}

/// Render list position `index` as a `rolls`-wide dice numeral.
///
/// Digits run `1..=sides` and are left-padded with `1`. Multi-character
/// digits (`sides > 9`) are separated by `-` so the sequence stays
/// unambiguous; single-character digits are packed.
pub fn dice_numeral(index: usize, rolls: u32, sides: usize) -> String {
    let separator = if sides > 9 { "-" } else { "" };
    let digits = base_digits(index, sides);
    let padding = (rolls as usize).saturating_sub(digits.len());
    let padded = std::iter::repeat(1)
        .take(padding)
        .chain(digits.into_iter().map(|d| d + 1));
    padded
        .map(|d| d.to_string())
        .collect::<Vec<_>>()
        .join(separator)
}

/// Decode a dice numeral back to its 0-indexed list position.
///
/// Inverse of [`dice_numeral`]; used by tests to verify the round trip.
pub fn numeral_to_index(numeral: &str, sides: usize) -> Option<usize> {
    let digits: Vec<usize> = if sides > 9 {
        numeral
            .split('-')
            .map(|d| d.parse::<usize>().ok())
            .collect::<Option<_>>()?
    } else {
        numeral
            .chars()
            .map(|c| c.to_digit(10).map(|d| d as usize))
            .collect::<Option<_>>()?
    };
    let mut index = 0usize;
    for d in digits {
        if d < 1 || d > sides {
            return None;
        }
        index = index.checked_mul(sides)?.checked_add(d - 1)?;
    }
    Some(index)
}
