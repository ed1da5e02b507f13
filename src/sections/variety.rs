//! Character variety section - scores lowercase, uppercase, digit and
//! symbol presence.

use super::SectionScore;
use secrecy::{ExposeSecret, SecretString};

/// Scores the four character-class criteria, one point each.
///
/// Checks run in fixed order (lowercase, uppercase, digit, symbol) and do
/// not short-circuit; each missing class appends its own suggestion.
pub fn character_variety_section(password: &SecretString) -> SectionScore {
    let pwd = password.expose_secret();
    let has_lower = pwd.chars().any(|c| c.is_lowercase());
    let has_upper = pwd.chars().any(|c| c.is_uppercase());
    let has_digit = pwd.chars().any(|c| c.is_ascii_digit());
    let has_symbol = pwd.chars().any(|c| c.is_ascii_punctuation());

    let checks = [
        (has_lower, "Add lowercase letters."),
        (has_upper, "Add uppercase letters."),
        (has_digit, "Add at least one digit."),
        (has_symbol, "Add special characters (e.g. !@#$%)."),
    ];

    let mut outcome = SectionScore::default();
    for (present, advice) in checks {
        if present {
            outcome.points += 1;
        } else {
            outcome.suggestions.push(advice.to_string());
        }
    }
    outcome
}
