//! Diversity section - scores the ratio of distinct characters.

use super::SectionScore;
use secrecy::{ExposeSecret, SecretString};
use std::collections::HashSet;

/// Awards 1 point when the distinct character count strictly exceeds 60%
/// of the total character count. The empty password fails (0 > 0 is
/// false).
pub fn diversity_section(password: &SecretString) -> SectionScore {
    let pwd = password.expose_secret();
    let total = pwd.chars().count();
    let distinct: HashSet<char> = pwd.chars().collect();

    if distinct.len() as f64 > total as f64 * 0.6 {
        SectionScore::awarded(1)
    } else {
        SectionScore::missed("Avoid repeated characters (aaaa, 1111).")
    }
}
