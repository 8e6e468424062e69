//! CLI error types for structured error handling.
//!
//! This module provides typed errors that map to specific exit codes,
//! enabling consistent error handling across the CLI.

use std::fmt;

use rental_core::RentalError;

use crate::constants::exit_codes;

/// CLI-specific errors with associated exit codes.
#[derive(Debug)]
pub enum CliError {
    /// Resource not found (config, car)
    NotFound { message: String, hint: String },

    /// Invalid user input
    InvalidInput {
        message: String,
        hint: Option<String>,
    },

    /// The ledger reported an internal inconsistency
    LedgerFault(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::NotFound { message, .. } => write!(f, "{}", message),
            CliError::InvalidInput { message, .. } => write!(f, "{}", message),
            CliError::LedgerFault(message) => write!(f, "Ledger fault: {}", message),
        }
    }
}

impl std::error::Error for CliError {}

impl CliError {
    /// Create a NotFound error with message and hint.
    pub fn not_found(message: impl Into<String>, hint: impl Into<String>) -> Self {
        CliError::NotFound {
            message: message.into(),
            hint: hint.into(),
        }
    }

    /// Create an InvalidInput error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        CliError::InvalidInput {
            message: message.into(),
            hint: None,
        }
    }

    /// Create an InvalidInput error with a hint.
    pub fn invalid_input_with_hint(message: impl Into<String>, hint: impl Into<String>) -> Self {
        CliError::InvalidInput {
            message: message.into(),
            hint: Some(hint.into()),
        }
    }

    /// Hint shown below the error message, if any.
    pub fn hint(&self) -> Option<&str> {
        match self {
            CliError::NotFound { hint, .. } => Some(hint),
            CliError::InvalidInput { hint, .. } => hint.as_deref(),
            CliError::LedgerFault(_) => {
                Some("This is a bug in the rental ledger; please report it.")
            }
        }
    }

    /// Get the exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::NotFound { .. } => exit_codes::NOT_FOUND,
            CliError::InvalidInput { .. } => exit_codes::INVALID_INPUT,
            CliError::LedgerFault(_) => exit_codes::LEDGER_FAULT,
        }
    }
}

impl From<RentalError> for CliError {
    fn from(err: RentalError) -> Self {
        let message = err.to_string();
        match err {
            RentalError::CarNotFound(_) => {
                CliError::not_found(message, "Run `rental cars --all` to see the catalog.")
            }
            RentalError::CarUnavailable(_) => CliError::invalid_input_with_hint(
                message,
                "Run `rental cars` to see cars that are available.",
            ),
            RentalError::InvalidDuration(_) => CliError::invalid_input_with_hint(
                message,
                "Enter a whole number of days, 1 or more.",
            ),
            RentalError::DuplicateIdentity(_) | RentalError::InvalidRate { .. } => {
                CliError::invalid_input_with_hint(message, "Check the [[cars]] entries in your config.")
            }
            RentalError::RentalRecordMissing(_) => CliError::LedgerFault(message),
        }
    }
}

/// Exit code and hint for an error returned from a command handler.
pub fn classify(err: &anyhow::Error) -> (i32, Option<String>) {
    if let Some(cli_err) = err.downcast_ref::<CliError>() {
        return (cli_err.exit_code(), cli_err.hint().map(String::from));
    }
    if let Some(rental_err) = err.downcast_ref::<RentalError>() {
        let cli_err = CliError::from(rental_err.clone());
        return (cli_err.exit_code(), cli_err.hint().map(String::from));
    }
    (exit_codes::FAILURE, None)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rental_errors_map_to_exit_codes() {
        let cases = [
            (RentalError::CarNotFound("Z".into()), exit_codes::NOT_FOUND),
            (RentalError::CarUnavailable("C1".into()), exit_codes::INVALID_INPUT),
            (RentalError::InvalidDuration(0), exit_codes::INVALID_INPUT),
            (RentalError::DuplicateIdentity("C1".into()), exit_codes::INVALID_INPUT),
            (RentalError::RentalRecordMissing("C1".into()), exit_codes::LEDGER_FAULT),
        ];
        for (err, code) in cases {
            assert_eq!(CliError::from(err).exit_code(), code);
        }
    }

    #[test]
    fn test_classify_downcasts() {
        let err = anyhow::Error::new(RentalError::CarNotFound("ZZZ".into()));
        let (code, hint) = classify(&err);
        assert_eq!(code, exit_codes::NOT_FOUND);
        assert!(hint.unwrap().contains("rental cars"));

        let err = anyhow::Error::new(CliError::invalid_input("bad"));
        assert_eq!(classify(&err), (exit_codes::INVALID_INPUT, None));

        let err = anyhow::anyhow!("something else");
        assert_eq!(classify(&err), (exit_codes::FAILURE, None));
    }
}
