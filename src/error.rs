//! Error types for the Twilio API client.
//!
//! This module contains error types used throughout the crate for configuration
//! and validation errors.
//!
//! # Error Handling
//!
//! All configuration constructors return `Result<T, ConfigError>` to enable
//! fail-fast validation. Error messages are designed to be clear and actionable.
//!
//! # Example
//!
//! ```rust
//! use twilio_api::{AccountSid, ConfigError};
//!
//! let result = AccountSid::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyAccountSid)));
//! ```

use thiserror::Error;

/// Errors that can occur while configuring the client.
///
/// Each variant provides a clear, actionable error message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Account SID cannot be empty.
    #[error("Account SID cannot be empty. Please provide a valid Twilio Account SID.")]
    EmptyAccountSid,

    /// Account SID does not look like an account identifier.
    #[error("Invalid Account SID '{sid}'. Expected an identifier starting with 'AC'.")]
    InvalidAccountSid {
        /// The invalid SID that was provided.
        sid: String,
    },

    /// Auth token cannot be empty.
    #[error("Auth token cannot be empty. Please provide a valid Twilio auth token.")]
    EmptyAuthToken,

    /// A base URL override is invalid.
    #[error("Invalid base URL '{url}'. Please provide a URL with scheme (e.g., 'https://api.twilio.com').")]
    InvalidBaseUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },
}
