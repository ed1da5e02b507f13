//! Length section - scores password length.

use super::SectionScore;
use secrecy::{ExposeSecret, SecretString};

const GOOD_LENGTH: usize = 12;
const MIN_LENGTH: usize = 8;

/// Scores the password by character count.
///
/// Awards 2 points at `GOOD_LENGTH` or more, 1 point at `MIN_LENGTH` or
/// more. Below `MIN_LENGTH` the section awards nothing and suggests
/// lengthening; the partial-credit band carries no suggestion.
pub fn length_section(password: &SecretString) -> SectionScore {
    let len = password.expose_secret().chars().count();
    if len >= GOOD_LENGTH {
        SectionScore::awarded(2)
    } else if len >= MIN_LENGTH {
        SectionScore::awarded(1)
    } else {
        SectionScore::missed("Lengthen the password to at least 8-12 characters.")
    }
}
