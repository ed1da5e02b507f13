//! Password toolkit library
//!
//! This library provides password strength evaluation against a fixed
//! scoring rubric and random password generation over a configurable
//! alphabet, backed by the operating system's secure random source.
//!
//! # Features
//!
//! - `tracing`: Enables logging via tracing crate
//!
//! # Example
//!
//! ```rust,no_run
//! use pwd_toolkit::{GenerationConfig, evaluate_password_strength, generate_password};
//! use secrecy::SecretString;
//!
//! // Evaluate a password
//! let password = SecretString::new("MyP@ssw0rd!".to_string().into());
//! let evaluation = evaluate_password_strength(&password);
//!
//! println!("Score: {}", evaluation.score);
//! println!("Strength: {}", evaluation.strength());
//!
//! // Generate a fresh one
//! let config = GenerationConfig::new(16, true).expect("valid length");
//! let generated = generate_password(&config);
//! ```

// Internal modules
mod evaluator;
mod generator;
mod sections;
mod types;

// Public API
pub use evaluator::evaluate_password_strength;
pub use generator::{GenerationConfig, GeneratorError, MIN_GENERATED_LENGTH, generate_password};
pub use types::{PasswordEvaluation, PasswordScore, PasswordStrength};
