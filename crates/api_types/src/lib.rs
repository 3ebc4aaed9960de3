//! Request and response bodies shared by the HTTP server and its clients.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub mod wallet {
    use super::*;

    /// Read-facing projection of a wallet.
    #[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct WalletDto {
        pub id: i64,
        pub name: String,
        /// RFC3339 timestamp in UTC, set once when the wallet is created.
        pub creation_date: DateTime<Utc>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub user_id: Option<i64>,
    }

    /// Request body for creating a wallet.
    ///
    /// `name` is optional on the wire so a `null` name is reported as a
    /// validation error rather than a deserialization failure.
    #[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
    pub struct CreateWalletDto {
        #[serde(default)]
        pub name: Option<String>,
    }

    /// Request body for renaming an existing wallet.
    #[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
    pub struct UpdateWalletDto {
        #[serde(default)]
        pub id: Option<i64>,
        #[serde(default)]
        pub name: Option<String>,
    }
}

pub mod error {
    use super::*;

    /// Body returned with every non-2xx response.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct ErrorBody {
        /// Stable error code, e.g. `W003`.
        pub code: String,
        pub error: String,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        pub fields: Vec<FieldErrorView>,
    }

    #[derive(Debug, PartialEq, Eq, Serialize, Deserialize)]
    pub struct FieldErrorView {
        pub field: String,
        pub message: String,
    }
}
