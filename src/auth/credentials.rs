//! Account credentials.

use crate::config::{AccountSid, AuthToken};

/// The account identifier and secret token used to authenticate requests.
///
/// Credentials are immutable once created. They are cloned into the
/// [`Client`](crate::clients::Client) and shared by every service handle.
///
/// # Thread Safety
///
/// `Credentials` is `Send + Sync`, making it safe to share across threads.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Credentials {
    account_sid: AccountSid,
    auth_token: AuthToken,
}

impl Credentials {
    /// Creates credentials from an account SID and auth token.
    #[must_use]
    pub const fn new(account_sid: AccountSid, auth_token: AuthToken) -> Self {
        Self {
            account_sid,
            auth_token,
        }
    }

    /// Returns the account SID.
    #[must_use]
    pub const fn account_sid(&self) -> &AccountSid {
        &self.account_sid
    }

    /// Returns the auth token.
    #[must_use]
    pub const fn auth_token(&self) -> &AuthToken {
        &self.auth_token
    }

    /// Returns the `(username, password)` pair for HTTP basic authentication.
    #[must_use]
    pub fn basic_auth(&self) -> (&str, &str) {
        (self.account_sid.as_ref(), self.auth_token.as_ref())
    }
}
