/// Strip everything but ASCII digits from user input.
pub fn digits_only(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Permissive email syntax check: one '@' separating non-empty parts
/// without whitespace, and a '.' inside the domain part. This is a
/// deliberate RFC-light shape check, not full RFC 5322.
pub fn is_valid_email_syntax(email: &str) -> bool {
    let mut parts = email.splitn(2, '@');
    let local = match parts.next() {
        Some(p) => p,
        None => return false,
    };
    let domain = match parts.next() {
        Some(p) => p,
        None => return false, // no '@' at all
    };

    let clean = |s: &str| !s.is_empty() && !s.chars().any(|c| c.is_whitespace() || c == '@');

    if !clean(local) || !clean(domain) {
        return false;
    }

    // The domain needs an interior dot: "a.b", not ".b" or "a."
    match domain.find('.') {
        Some(pos) => pos > 0 && pos < domain.len() - 1,
        None => false,
    }
}

/// Validate an 11-digit Brazilian CPF number (digits only, no punctuation).
///
/// Both trailing check digits are recomputed with the weighted-sum mod 11
/// algorithm; a remainder of 10 or 11 counts as 0. Strings of 11 identical
/// digits pass the arithmetic but are rejected outright.
pub fn is_valid_taxpayer_id(cpf: &str) -> bool {
    if cpf.len() != 11 || !cpf.chars().all(|c| c.is_ascii_digit()) {
        return false;
    }

    let digits: Vec<u32> = cpf.chars().map(|c| c.to_digit(10).unwrap()).collect();

    // All-identical sequences like "00000000000" are formally consistent
    // but not valid CPFs
    if digits.iter().all(|&d| d == digits[0]) {
        return false;
    }

    check_digit(&digits[..9], 10) == digits[9] && check_digit(&digits[..10], 11) == digits[10]
}

/// Compute one CPF check digit over `digits` with weights counting down
/// from `first_weight` to 2.
fn check_digit(digits: &[u32], first_weight: u32) -> u32 {
    let sum: u32 = digits
        .iter()
        .enumerate()
        .map(|(i, &d)| d * (first_weight - i as u32))
        .sum();

    let remainder = (sum * 10) % 11;
    if remainder >= 10 {
        0
    } else {
        remainder
    }
}

/// Format a CPF as "XXX.XXX.XXX-XX".
///
/// Non-digits are stripped first. Anything shorter than 11 digits is
/// returned unformatted; callers cap input length at 11 digits before
/// formatting, so longer strings are not handled here.
pub fn format_taxpayer_id(raw: &str) -> String {
    let digits = digits_only(raw);
    if digits.len() != 11 {
        return digits;
    }

    format!(
        "{}.{}.{}-{}",
        &digits[0..3],
        &digits[3..6],
        &digits[6..9],
        &digits[9..11]
    )
}
