//! Core evaluation types: score, strength tier and evaluation result.

use std::fmt;

/// Score awarded by the evaluation rubric, always in `0..=PasswordScore::MAX`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct PasswordScore(u8);

impl PasswordScore {
    /// Highest score the rubric can award.
    pub const MAX: u8 = 8;

    pub(crate) fn new(value: u8) -> Self {
        debug_assert!(value <= Self::MAX);
        PasswordScore(value)
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}

impl fmt::Display for PasswordScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.0, Self::MAX)
    }
}

/// Qualitative strength tier derived from the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordStrength {
    Weak,
    Medium,
    Strong,
    VeryStrong,
}

impl PasswordStrength {
    /// Classifies a score. Thresholds are inclusive lower bounds, checked
    /// from highest to lowest.
    pub fn from_score(score: PasswordScore) -> Self {
        match score.value() {
            7.. => PasswordStrength::VeryStrong,
            5.. => PasswordStrength::Strong,
            3.. => PasswordStrength::Medium,
            _ => PasswordStrength::Weak,
        }
    }
}

impl fmt::Display for PasswordStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PasswordStrength::Weak => "Weak",
            PasswordStrength::Medium => "Medium",
            PasswordStrength::Strong => "Strong",
            PasswordStrength::VeryStrong => "Very Strong",
        };
        f.write_str(label)
    }
}

/// Result of evaluating a single password.
///
/// Constructed fresh per evaluation; `suggestions` holds one entry per
/// rubric criterion that awarded no points, in criterion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordEvaluation {
    pub score: PasswordScore,
    pub suggestions: Vec<String>,
}

impl PasswordEvaluation {
    /// Returns the strength tier for this evaluation's score.
    pub fn strength(&self) -> PasswordStrength {
        PasswordStrength::from_score(self.score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strength_thresholds() {
        let cases = [
            (0, PasswordStrength::Weak),
            (2, PasswordStrength::Weak),
            (3, PasswordStrength::Medium),
            (4, PasswordStrength::Medium),
            (5, PasswordStrength::Strong),
            (6, PasswordStrength::Strong),
            (7, PasswordStrength::VeryStrong),
            (8, PasswordStrength::VeryStrong),
        ];

        for (value, expected) in cases {
            let strength = PasswordStrength::from_score(PasswordScore::new(value));
            assert_eq!(strength, expected, "score {} misclassified", value);
        }
    }

    #[test]
    fn test_strength_display_labels() {
        assert_eq!(PasswordStrength::Weak.to_string(), "Weak");
        assert_eq!(PasswordStrength::Medium.to_string(), "Medium");
        assert_eq!(PasswordStrength::Strong.to_string(), "Strong");
        assert_eq!(PasswordStrength::VeryStrong.to_string(), "Very Strong");
    }

    #[test]
    fn test_score_display() {
        assert_eq!(PasswordScore::new(3).to_string(), "3/8");
        assert_eq!(PasswordScore::new(8).to_string(), "8/8");
    }
}
