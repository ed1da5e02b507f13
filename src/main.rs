//! Interactive console driver for the password toolkit.
//!
//! All console I/O lives here; the library stays silent.

use anyhow::Result;
use console::style;
use inquire::{Confirm, Password, PasswordDisplayMode, Select, Text};
use secrecy::SecretString;

use pwd_toolkit::{
    GenerationConfig, PasswordEvaluation, evaluate_password_strength, generate_password,
};

const CHECK: &str = "Check a password";
const GENERATE: &str = "Generate a password";
const QUIT: &str = "Quit";

fn main() -> Result<()> {
    println!("{}", style("===== PASSWORD TOOLKIT =====").bold());

    loop {
        let choice = Select::new("What would you like to do?", vec![CHECK, GENERATE, QUIT])
            .prompt()?;

        match choice {
            CHECK => check_password()?,
            GENERATE => generate_new_password()?,
            QUIT => break,
            _ => unreachable!(),
        }
    }

    println!("\nThanks for using the password toolkit!");
    Ok(())
}

fn check_password() -> Result<()> {
    let input = Password::new("Password to check:")
        .with_display_mode(PasswordDisplayMode::Masked)
        .without_confirmation()
        .prompt()?;

    let password = SecretString::new(input.into());
    print_report(&evaluate_password_strength(&password));
    Ok(())
}

fn generate_new_password() -> Result<()> {
    let raw_length = Text::new("Password length (e.g. 12):").prompt()?;
    let Ok(length) = raw_length.trim().parse::<usize>() else {
        println!("{}", style("Please enter a valid number.").red());
        return Ok(());
    };

    let include_symbols = Confirm::new("Include symbols?")
        .with_default(true)
        .prompt()?;

    let config = match GenerationConfig::new(length, include_symbols) {
        Ok(config) => config,
        Err(e) => {
            println!("{}", style(e).red());
            return Ok(());
        }
    };

    let generated = generate_password(&config);
    println!("\nGenerated password:");
    println!("  {}", style(&generated).green().bold());

    let password = SecretString::new(generated.into());
    print_report(&evaluate_password_strength(&password));
    Ok(())
}

fn print_report(evaluation: &PasswordEvaluation) {
    println!("\n{}", style("=== Result ===").bold());
    println!(
        "Score: {} - Strength: {}",
        evaluation.score,
        style(evaluation.strength()).cyan()
    );

    if evaluation.suggestions.is_empty() {
        println!("{}", style("No suggestions: well balanced password.").green());
    } else {
        println!("\nSuggestions:");
        for suggestion in &evaluation.suggestions {
            println!("- {suggestion}");
        }
    }
    println!();
}
