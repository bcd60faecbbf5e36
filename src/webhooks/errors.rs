//! Webhook-specific error types.
//!
//! Messages are deliberately generic so a rejected request learns nothing
//! about which part of its signature was wrong.

use thiserror::Error;

/// Error type for webhook validation.
///
/// # Example
///
/// ```rust
/// use twilio_api::webhooks::WebhookError;
///
/// let error = WebhookError::InvalidSignature;
/// assert_eq!(error.to_string(), "Webhook signature verification failed");
/// ```
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum WebhookError {
    /// The request carried no `X-Twilio-Signature` value.
    #[error("Webhook request has no signature")]
    MissingSignature,

    /// The signature did not match any configured auth token.
    #[error("Webhook signature verification failed")]
    InvalidSignature,

    /// The signature was valid but the body does not hash to the
    /// `bodySHA256` value it was signed with.
    #[error("Webhook body does not match its signed hash")]
    BodyHashMismatch,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert!(WebhookError::MissingSignature
            .to_string()
            .contains("no signature"));
        assert!(WebhookError::InvalidSignature
            .to_string()
            .contains("verification failed"));
        assert!(WebhookError::BodyHashMismatch.to_string().contains("hash"));
    }

    #[test]
    fn test_webhook_error_implements_std_error() {
        let error: &dyn std::error::Error = &WebhookError::InvalidSignature;
        assert!(error.source().is_none());
    }
}
