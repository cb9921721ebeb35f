//! Digit grouping helpers shared by language converters.

/// Split a string of decimal digits into groups of `x`, counted from the right.
///
/// Groups are yielded most significant first. The first group holds the
/// leftover digits and may be shorter than `x`. `x` must be nonzero.
pub fn split_by_x(digits: &str, x: usize) -> impl Iterator<Item = &str> {
    let len = digits.len();
    let head = if len > x { len % x } else { len };

    let first = (head > 0).then(|| &digits[..head]);
    first
        .into_iter()
        .chain((head..len).step_by(x).map(move |i| &digits[i..i + x]))
}

/// Split a non-negative integer into 3-digit chunk values, most significant first.
///
/// Zero yields a single `0` chunk.
pub fn chunks(value: u128) -> Vec<u32> {
    let digits = value.to_string();
    split_by_x(&digits, 3).map(group_value).collect()
}

/// Decompose a chunk into its `(ones, tens, hundreds)` digits.
///
/// Only the last three digits are considered: `307` gives `(7, 0, 3)`.
pub fn get_digits(chunk: u32) -> (u32, u32, u32) {
    (chunk % 10, chunk / 10 % 10, chunk / 100 % 10)
}

/// Integer value of a group of at most three ASCII digits.
fn group_value(group: &str) -> u32 {
    group
        .bytes()
        .fold(0, |acc, b| acc * 10 + u32::from(b.wrapping_sub(b'0')))
}
