//! Text comparison used to order rows.
//!
//! Cell text is compared numerically when both sides look like numbers and with
//! a locale-aware collation otherwise. Empty text sorts after everything else in
//! ascending order.

use std::cmp::Ordering;

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Compare two extracted cell texts.
///
/// Two empty strings are equal. An empty string is greater than any non-empty
/// one. The whole result, the empty rule included, is reversed when
/// `descending` is set.
pub fn compare_text(a: &str, b: &str, descending: bool) -> Ordering {
    let ascending = match (a.is_empty(), b.is_empty()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => match (parse_number(a), parse_number(b)) {
            (Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
            _ => locale_compare(a, b),
        },
    };
    if descending {
        ascending.reverse()
    } else {
        ascending
    }
}

/// Parse text that reads as a number.
///
/// Accepts surrounding whitespace, an optional sign, decimal notation with an
/// optional fraction and exponent, `Infinity`, and `0x`/`0o`/`0b` integer
/// literals. Returns `None` for blank text and for anything else.
pub fn parse_number(text: &str) -> Option<f64> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    if let Some(value) = parse_radix_literal(text) {
        return Some(value);
    }

    let (negative, unsigned) = match text.as_bytes()[0] {
        b'+' => (false, &text[1..]),
        b'-' => (true, &text[1..]),
        _ => (false, text),
    };
    let magnitude = if unsigned == "Infinity" {
        f64::INFINITY
    } else if is_decimal_literal(unsigned) {
        unsigned.parse::<f64>().ok()?
    } else {
        return None;
    };
    Some(if negative { -magnitude } else { magnitude })
}

// Unsigned only, like the source coercion.
fn parse_radix_literal(text: &str) -> Option<f64> {
    let bytes = text.as_bytes();
    if bytes.len() < 3 || bytes[0] != b'0' {
        return None;
    }
    let radix = match bytes[1] {
        b'x' | b'X' => 16,
        b'o' | b'O' => 8,
        b'b' | b'B' => 2,
        _ => return None,
    };
    let digits = &text[2..];
    if !digits.chars().all(|c| c.is_digit(radix)) {
        return None;
    }
    // Digit-by-digit so long literals degrade to float precision instead of overflowing.
    Some(digits.chars().fold(0.0, |acc, c| {
        acc * f64::from(radix) + f64::from(c.to_digit(radix).unwrap_or(0))
    }))
}

// `f64::from_str` also takes "inf", "nan" and friends; only plain decimal notation counts.
fn is_decimal_literal(text: &str) -> bool {
    let mut chars = text.chars().peekable();
    let mut mantissa_digits = 0;

    while chars.next_if(|c| c.is_ascii_digit()).is_some() {
        mantissa_digits += 1;
    }
    if chars.next_if_eq(&'.').is_some() {
        while chars.next_if(|c| c.is_ascii_digit()).is_some() {
            mantissa_digits += 1;
        }
    }
    if mantissa_digits == 0 {
        return false;
    }

    if chars.next_if(|c| *c == 'e' || *c == 'E').is_some() {
        chars.next_if(|c| *c == '+' || *c == '-');
        let mut exponent_digits = 0;
        while chars.next_if(|c| c.is_ascii_digit()).is_some() {
            exponent_digits += 1;
        }
        if exponent_digits == 0 {
            return false;
        }
    }

    chars.next().is_none()
}

/// Locale-aware string ordering.
///
/// A multi-level collation in the spirit of the Unicode collation algorithm:
/// base letters first (accents stripped, case folded), then accents, then case
/// with lowercase before uppercase. Code point order breaks any remaining tie so
/// the result is a total order.
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    primary_key(a)
        .cmp(primary_key(b))
        .then_with(|| secondary_key(a).cmp(secondary_key(b)))
        .then_with(|| tertiary_key(a).cmp(tertiary_key(b)))
        .then_with(|| a.cmp(b))
}

fn primary_key(text: &str) -> impl Iterator<Item = char> + '_ {
    text.nfkd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
}

fn secondary_key(text: &str) -> impl Iterator<Item = char> + '_ {
    text.nfkd().flat_map(char::to_lowercase)
}

fn tertiary_key(text: &str) -> impl Iterator<Item = bool> + '_ {
    text.nfkd()
        .filter(|c| !is_combining_mark(*c))
        .map(char::is_uppercase)
}
