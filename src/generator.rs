//! Random password generation over a configurable alphabet.

use rand::Rng;
use rand::rngs::OsRng;
use thiserror::Error;

const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &[u8] = b"0123456789";
const SYMBOLS: &[u8] = b"!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// Smallest length the generator accepts.
pub const MIN_GENERATED_LENGTH: usize = 4;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeneratorError {
    #[error("minimum recommended length is 4 characters (requested {0})")]
    LengthTooShort(usize),
}

/// Validated generation parameters.
///
/// A config can only be constructed with an acceptable length, so
/// generation itself never fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationConfig {
    length: usize,
    include_symbols: bool,
}

impl GenerationConfig {
    /// Validates the requested length and builds the config.
    ///
    /// # Errors
    /// Returns `GeneratorError::LengthTooShort` when `length` is below
    /// `MIN_GENERATED_LENGTH`.
    pub fn new(length: usize, include_symbols: bool) -> Result<Self, GeneratorError> {
        if length < MIN_GENERATED_LENGTH {
            return Err(GeneratorError::LengthTooShort(length));
        }
        Ok(GenerationConfig {
            length,
            include_symbols,
        })
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn include_symbols(&self) -> bool {
        self.include_symbols
    }
}

/// Characters eligible for sampling under the given config.
fn build_alphabet(config: &GenerationConfig) -> Vec<u8> {
    let mut alphabet =
        Vec::with_capacity(LOWERCASE.len() + UPPERCASE.len() + DIGITS.len() + SYMBOLS.len());
    alphabet.extend_from_slice(LOWERCASE);
    alphabet.extend_from_slice(UPPERCASE);
    alphabet.extend_from_slice(DIGITS);
    if config.include_symbols {
        alphabet.extend_from_slice(SYMBOLS);
    }
    alphabet
}

/// Generates a random password matching the config.
///
/// Every character is drawn independently and uniformly from the
/// configured alphabet using the operating system's secure random source,
/// so repeated calls are safe to use for credentials.
pub fn generate_password(config: &GenerationConfig) -> String {
    let alphabet = build_alphabet(config);
    let mut rng = OsRng;

    let password: String = (0..config.length)
        .map(|_| {
            let idx = rng.gen_range(0..alphabet.len());
            alphabet[idx] as char
        })
        .collect();

    #[cfg(feature = "tracing")]
    tracing::debug!(
        length = config.length,
        include_symbols = config.include_symbols,
        alphabet = alphabet.len(),
        "password generated"
    );

    password
}
