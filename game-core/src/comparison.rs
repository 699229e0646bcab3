use game_types::Hint;
use std::collections::BTreeSet;

/// Convert a `feet'inches` height into total inches.
///
/// Missing or unparsable inches count as zero. Returns `None` when the feet
/// component is not a number or the total does not fit, in which case the
/// height has no ordering.
pub fn height_to_inches(height: &str) -> Option<i32> {
    let mut parts = height.splitn(2, '\'');
    let feet = leading_integer(parts.next()?)?;
    let inches = parts.next().and_then(leading_integer).unwrap_or(0);
    feet.checked_mul(12)?.checked_add(inches)
}

/// Parse the integer at the start of a string, ignoring anything after it
fn leading_integer(text: &str) -> Option<i32> {
    let text = text.trim_start();
    let digits_end = text
        .char_indices()
        .find(|(_, c)| !c.is_ascii_digit())
        .map(|(i, _)| i)
        .unwrap_or(text.len());

    text[..digits_end].parse().ok()
}

pub fn directional_hint<T: PartialOrd>(guessed: T, target: T) -> Hint {
    if guessed < target {
        Hint::Lower
    } else if guessed > target {
        Hint::Higher
    } else {
        Hint::Equal
    }
}

/// Split a position label like "Guard/Forward" into normalized role tokens
pub fn split_positions(label: &str) -> BTreeSet<String> {
    label
        .split(|c: char| c == '/' || c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(|token| token.to_lowercase())
        .collect()
}
