//! Integer literal grammar shared by the signed and unsigned wrappers.
//!
//! Accepted: an optional sign (signed only), then a base prefix `0b`, `0o`
//! or `0x` (any case), a bare leading `0` for octal, or decimal digits.
//! `_` may separate digits, and may follow a base prefix.

/// Parsed integer literal: sign and magnitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct IntLiteral {
    pub negative: bool,
    pub magnitude: u64,
}

/// Parses `input` as an integer literal. Returns `None` on any grammar
/// violation or if the magnitude does not fit in 64 bits.
pub(crate) fn parse_int_literal(input: &str, allow_sign: bool) -> Option<IntLiteral> {
    let (negative, unsigned) = match input.as_bytes().first()? {
        b'+' if allow_sign => (false, &input[1..]),
        b'-' if allow_sign => (true, &input[1..]),
        _ => (false, input),
    };
    if unsigned.is_empty() {
        return None;
    }

    let lower = unsigned.to_ascii_lowercase();
    let (radix, digits) = if lower.len() >= 3 && lower.starts_with("0b") {
        (2, &unsigned[2..])
    } else if lower.len() >= 3 && lower.starts_with("0o") {
        (8, &unsigned[2..])
    } else if lower.len() >= 3 && lower.starts_with("0x") {
        (16, &unsigned[2..])
    } else if unsigned.starts_with('0') {
        (8, &unsigned[1..])
    } else {
        (10, unsigned)
    };

    let magnitude = if digits.contains('_') {
        if !underscores_ok(unsigned) {
            return None;
        }
        parse_digits(&digits.replace('_', ""), radix)?
    } else {
        parse_digits(digits, radix)?
    };

    Some(IntLiteral {
        negative,
        magnitude,
    })
}

// Empty digits are valid only after a bare leading zero, i.e. "0" itself.
fn parse_digits(digits: &str, radix: u32) -> Option<u64> {
    if digits.is_empty() {
        return Some(0);
    }
    if !digits.chars().all(|c| c.is_digit(radix)) {
        return None;
    }
    u64::from_str_radix(digits, radix).ok()
}

/// Underscores must sit between digits, or directly after a base prefix.
fn underscores_ok(unsigned: &str) -> bool {
    let bytes = unsigned.as_bytes();
    let lower = |b: u8| b.to_ascii_lowercase();
    let mut i = 0;
    // 'd' after a digit or prefix, '_' after an underscore, '^' at the start
    let mut last = b'^';
    let mut hex = false;
    if bytes.len() >= 2 && bytes[0] == b'0' && matches!(lower(bytes[1]), b'b' | b'o' | b'x') {
        i = 2;
        last = b'd';
        hex = lower(bytes[1]) == b'x';
    }
    for &b in &bytes[i..] {
        if b.is_ascii_digit() || (hex && matches!(lower(b), b'a'..=b'f')) {
            last = b'd';
        } else if b == b'_' {
            if last != b'd' {
                return false;
            }
            last = b'_';
        } else if last == b'_' {
            return false;
        } else {
            last = b'!';
        }
    }
    last != b'_'
}
