/// Individual password strength criteria, in scoring order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Criterion {
    MinLength,
    Lowercase,
    Uppercase,
    Digit,
    SpecialChar,
}

impl Criterion {
    /// Human-readable name shown in the "add: ..." strength feedback
    pub fn description(&self) -> &'static str {
        match self {
            Criterion::MinLength => "At least 8 characters",
            Criterion::Lowercase => "A lowercase letter",
            Criterion::Uppercase => "An uppercase letter",
            Criterion::Digit => "A number",
            Criterion::SpecialChar => "A special character",
        }
    }

    fn satisfied_by(&self, password: &str) -> bool {
        match self {
            Criterion::MinLength => password.chars().count() >= 8,
            Criterion::Lowercase => password.chars().any(|c| c.is_lowercase()),
            Criterion::Uppercase => password.chars().any(|c| c.is_uppercase()),
            Criterion::Digit => password.chars().any(|c| c.is_ascii_digit()),
            Criterion::SpecialChar => password.chars().any(|c| !c.is_ascii_alphanumeric()),
        }
    }
}

const ALL_CRITERIA: [Criterion; 5] = [
    Criterion::MinLength,
    Criterion::Lowercase,
    Criterion::Uppercase,
    Criterion::Digit,
    Criterion::SpecialChar,
];

/// Result of scoring a password: satisfied-criteria count plus the
/// criteria still missing, in the fixed order above.
#[derive(Debug, Clone, PartialEq)]
pub struct StrengthReport {
    pub level: u8,
    pub missing: Vec<Criterion>,
}

/// Score a password against the five independent criteria.
///
/// Each satisfied criterion contributes one point, so `level` ranges
/// from 0 (empty input) to 5 (all criteria met).
pub fn score_password(password: &str) -> StrengthReport {
    let mut level = 0;
    let mut missing = Vec::new();

    for criterion in ALL_CRITERIA {
        if criterion.satisfied_by(password) {
            level += 1;
        } else {
            missing.push(criterion);
        }
    }

    StrengthReport { level, missing }
}

/// Presentation label for a strength level. Level 0 shares the
/// "Very weak" label with level 1.
pub fn strength_label(level: u8) -> &'static str {
    match level {
        0 | 1 => "Very weak",
        2 => "Weak",
        3 => "Fair",
        4 => "Good",
        _ => "Very strong",
    }
}

/// Indicator color for a strength level (red through green).
pub fn strength_color(level: u8) -> &'static str {
    match level {
        0 | 1 => "#ef4444",
        2 => "#f97316",
        3 => "#eab308",
        4 => "#22c55e",
        _ => "#16a34a",
    }
}
