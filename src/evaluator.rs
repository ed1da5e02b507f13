//! Password strength evaluator - main evaluation logic.

use secrecy::SecretString;

use crate::sections::{
    SectionScore, character_variety_section, diversity_section, length_section,
};
use crate::types::{PasswordEvaluation, PasswordScore};

/// Evaluates password strength against the scoring rubric.
///
/// # Arguments
/// * `password` - The password to evaluate
///
/// # Returns
/// A `PasswordEvaluation` containing the score and one suggestion per
/// criterion that awarded no points, in criterion order.
///
/// Never fails; the empty password is a valid input that scores 0 with a
/// suggestion for every criterion.
pub fn evaluate_password_strength(password: &SecretString) -> PasswordEvaluation {
    // Orchestrator: execute sections in fixed order
    let sections: [fn(&SecretString) -> SectionScore; 3] = [
        length_section,
        character_variety_section,
        diversity_section,
    ];

    let mut score = 0u8;
    let mut suggestions = Vec::new();

    for section_fn in sections {
        let outcome = section_fn(password);
        score += outcome.points;
        suggestions.extend(outcome.suggestions);
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(score, suggestions = suggestions.len(), "password evaluated");

    PasswordEvaluation {
        score: PasswordScore::new(score),
        suggestions,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PasswordStrength;

    fn secret(s: &str) -> SecretString {
        SecretString::new(s.to_string().into())
    }

    #[test]
    fn test_evaluate_full_credit_password() {
        // Every criterion satisfied: 2 for length, 1 for each of the rest
        let evaluation = evaluate_password_strength(&secret("CorrectHorse!42x"));

        assert_eq!(evaluation.score.value(), 7);
        assert!(evaluation.suggestions.is_empty());
        assert_eq!(evaluation.strength(), PasswordStrength::VeryStrong);
    }

    #[test]
    fn test_evaluate_empty_password() {
        let evaluation = evaluate_password_strength(&secret(""));

        assert_eq!(evaluation.score.value(), 0);
        assert_eq!(evaluation.suggestions.len(), 6);
        assert_eq!(evaluation.strength(), PasswordStrength::Weak);
    }

    #[test]
    fn test_evaluate_lowercase_only_word() {
        // 8 chars (+1), lowercase (+1), 7 distinct of 8 (+1)
        let evaluation = evaluate_password_strength(&secret("password"));

        assert_eq!(evaluation.score.value(), 3);
        assert_eq!(
            evaluation.suggestions,
            vec![
                "Add uppercase letters.",
                "Add at least one digit.",
                "Add special characters (e.g. !@#$%).",
            ]
        );
        assert_eq!(evaluation.strength(), PasswordStrength::Medium);
    }

    #[test]
    fn test_evaluate_repeated_short_password() {
        // Lowercase is the only point; every other criterion fails
        let evaluation = evaluate_password_strength(&secret("aaaa"));

        assert_eq!(evaluation.score.value(), 1);
        assert_eq!(evaluation.suggestions.len(), 5);
        assert_eq!(evaluation.strength(), PasswordStrength::Weak);
    }

    #[test]
    fn test_evaluate_length_partial_credit_has_no_suggestion() {
        // 10 chars sits in the 1-point band; no lengthen advice expected
        let evaluation = evaluate_password_strength(&secret("Abcdef12!x"));

        assert_eq!(evaluation.score.value(), 6);
        assert!(
            !evaluation
                .suggestions
                .iter()
                .any(|s| s.contains("Lengthen"))
        );
    }

    #[test]
    fn test_evaluate_is_deterministic() {
        let first = evaluate_password_strength(&secret("MyPass123!"));
        let second = evaluate_password_strength(&secret("MyPass123!"));

        assert_eq!(first, second);
    }

    #[test]
    fn test_evaluate_score_stays_in_bounds() {
        let test_passwords = [
            "",
            "a",
            "password",
            "MyPass123!",
            "VeryStrongPassword123!@#",
            "aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa",
        ];

        for pwd_str in test_passwords {
            let evaluation = evaluate_password_strength(&secret(pwd_str));
            assert!(
                evaluation.score.value() <= PasswordScore::MAX,
                "Score {} out of bounds for password '{}'",
                evaluation.score.value(),
                pwd_str
            );
        }
    }
}
