//! Account resource implementation.
//!
//! Accounts are the only core resource addressed from the API root rather
//! than beneath the current account, so listing returns the main account and
//! its subaccounts.
//!
//! # Example
//!
//! ```rust,ignore
//! use twilio_api::rest::resources::{AccountCreateParams, AccountListParams};
//!
//! let account = client.accounts().get("AC123").await?;
//! println!("{}: {:?}", account.friendly_name, account.status);
//!
//! let sub = client
//!     .accounts()
//!     .create(&AccountCreateParams {
//!         friendly_name: Some("Support".to_string()),
//!     })
//!     .await?;
//! ```

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::clients::{Client, HttpError, InvalidHttpRequestError, Params};
use crate::config::Product;
use crate::rest::resources::common;
use crate::rest::{LegacyPage, ListResource, Page, PageIterator, ResourcePath};
use crate::types::{NullString, TwilioTime};

/// The lifecycle status of an account.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AccountStatus {
    /// The account is in use.
    Active,
    /// The account is suspended and cannot make requests.
    Suspended,
    /// The account is permanently closed.
    Closed,
    /// A status this library does not know about.
    #[default]
    #[serde(other)]
    Unknown,
}

/// A Twilio account or subaccount.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Account {
    /// The account SID.
    pub sid: String,
    /// A human-readable name.
    pub friendly_name: String,
    /// Current status.
    pub status: AccountStatus,
    /// `Trial` or `Full`.
    #[serde(rename = "type")]
    pub account_type: String,
    /// The parent account for subaccounts.
    pub owner_account_sid: NullString,
    /// When the account was created.
    pub date_created: TwilioTime,
    /// When the account was last updated.
    pub date_updated: TwilioTime,
    /// Path of this resource.
    pub uri: String,
    /// Paths of related collections keyed by name.
    pub subresource_uris: HashMap<String, String>,
}

impl ListResource for Account {
    const KEY: &'static str = "accounts";
    type Envelope = LegacyPage<Self>;
}

/// Filters for listing accounts.
#[derive(Debug, Clone, Serialize, Default, PartialEq, Eq)]
pub struct AccountListParams {
    /// Only accounts with exactly this name.
    #[serde(rename = "FriendlyName", skip_serializing_if = "Option::is_none")]
    pub friendly_name: Option<String>,
    /// Only accounts in this status.
    #[serde(rename = "Status", skip_serializing_if = "Option::is_none")]
    pub status: Option<AccountStatus>,
    /// Records per page.
    #[serde(rename = "PageSize", skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
}

/// Fields for creating a subaccount.
#[derive(Debug, Clone, Serialize, Default, PartialEq, Eq)]
pub struct AccountCreateParams {
    /// A human-readable name.
    #[serde(rename = "FriendlyName", skip_serializing_if = "Option::is_none")]
    pub friendly_name: Option<String>,
}

/// Fields for updating an account.
#[derive(Debug, Clone, Serialize, Default, PartialEq, Eq)]
pub struct AccountUpdateParams {
    /// A new name.
    #[serde(rename = "FriendlyName", skip_serializing_if = "Option::is_none")]
    pub friendly_name: Option<String>,
    /// A new status; closing an account cannot be undone.
    #[serde(rename = "Status", skip_serializing_if = "Option::is_none")]
    pub status: Option<AccountStatus>,
}

/// Operations on accounts.
#[derive(Debug, Clone, Copy)]
pub struct AccountService<'c> {
    client: &'c Client,
}

impl<'c> AccountService<'c> {
    /// Creates a service handle.
    #[must_use]
    pub const fn new(client: &'c Client) -> Self {
        Self { client }
    }

    fn collection() -> ResourcePath {
        ResourcePath::root(Product::Api, "Accounts")
    }

    /// Fetches an account by SID.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn get(&self, sid: &str) -> Result<Account, HttpError> {
        common::fetch(self.client, &Self::collection().id(sid), Params::new()).await
    }

    /// Creates a subaccount.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn create(&self, params: &AccountCreateParams) -> Result<Account, HttpError> {
        common::submit(self.client, &Self::collection(), params).await
    }

    /// Updates an account.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn update(
        &self,
        sid: &str,
        params: &AccountUpdateParams,
    ) -> Result<Account, HttpError> {
        common::submit(self.client, &Self::collection().id(sid), params).await
    }

    /// Fetches the first page of accounts.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn get_page(&self, params: &AccountListParams) -> Result<Page<Account>, HttpError> {
        common::fetch_page(self.client, &Self::collection(), params).await
    }

    /// Pages through accounts.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError`] if the filters cannot be encoded.
    pub fn page_iterator(
        &self,
        params: &AccountListParams,
    ) -> Result<PageIterator<'c, Account>, InvalidHttpRequestError> {
        common::iterate(self.client, &Self::collection(), params)
    }
}

impl Client {
    /// Returns the account service.
    #[must_use]
    pub const fn accounts(&self) -> AccountService<'_> {
        AccountService::new(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_account_deserializes_from_api_fixture() {
        let account: Account = serde_json::from_value(json!({
            "auth_token": "redacted",
            "date_created": "Thu, 30 Jul 2015 20:00:00 +0000",
            "date_updated": "Thu, 30 Jul 2015 20:00:00 +0000",
            "friendly_name": "friendly_name",
            "owner_account_sid": null,
            "sid": "ACaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa",
            "status": "active",
            "subresource_uris": {
                "calls": "/2010-04-01/Accounts/ACaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa/Calls.json"
            },
            "type": "Full",
            "uri": "/2010-04-01/Accounts/ACaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa.json"
        }))
        .unwrap();

        assert_eq!(account.status, AccountStatus::Active);
        assert_eq!(account.account_type, "Full");
        assert!(!account.owner_account_sid.is_valid());
        assert!(account.date_created.is_valid());
        assert_eq!(account.subresource_uris.len(), 1);
    }

    #[test]
    fn test_unknown_status_is_tolerated() {
        let account: Account = serde_json::from_value(json!({"status": "frozen"})).unwrap();
        assert_eq!(account.status, AccountStatus::Unknown);
    }

    #[test]
    fn test_list_params_use_provider_names() {
        let params = Params::from_serialize(&AccountListParams {
            status: Some(AccountStatus::Suspended),
            page_size: Some(20),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(params.get("Status"), Some("suspended"));
        assert_eq!(params.get("PageSize"), Some("20"));
        assert!(!params.contains("FriendlyName"));
    }
}
