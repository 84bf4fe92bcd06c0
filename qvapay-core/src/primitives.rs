//! Response objects returned by the QvaPay api.
//!
//! The client hands responses back untouched, these types are for callers that want to decode
//! the body. All of them are serializable and deserializable using serde.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// `GET /info`
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppInfo {
    pub user_id: u64,
    pub name: String,
    pub url: String,
    pub desc: String,
    pub callback: String,
    #[serde(default)]
    pub logo: String,
    pub uuid: String,
    pub secret: String,
    #[serde(deserialize_with = "deserialize_flag")]
    pub active: bool,
    #[serde(deserialize_with = "deserialize_flag")]
    pub enabled: bool,
}

/// `GET /create_invoice`
///
/// Echoes the request and adds the payment urls. `signed_url` expires 30 minutes after issuance.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invoice {
    pub app_id: String,
    pub amount: String,
    pub description: String,
    #[serde(default)]
    pub remote_id: Option<String>,
    #[serde(deserialize_with = "deserialize_flag")]
    pub signed: bool,
    // the api spells it without the c
    #[serde(alias = "transation_uuid")]
    pub transaction_uuid: String,
    pub url: String,
    #[serde(rename = "signedUrl", default)]
    pub signed_url: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub uuid: String,
    pub user_id: u64,
    pub app_id: u64,
    pub amount: String,
    pub description: String,
    #[serde(default)]
    pub remote_id: Option<String>,
    pub status: String,
    pub paid_by_user_id: u64,
    #[serde(deserialize_with = "deserialize_flag")]
    pub signed: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub paid_by: Option<PaidBy>,
    #[serde(default)]
    pub app: Option<TransactionApp>,
    #[serde(default)]
    pub owner: Option<Owner>,
}

impl Transaction {
    pub fn is_pending(&self) -> bool {
        self.status == "pending"
    }

    pub fn is_paid(&self) -> bool {
        self.status == "paid"
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaidBy {
    pub name: String,
    pub logo: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionApp {
    pub user_id: u64,
    pub name: String,
    pub url: String,
    pub desc: String,
    pub callback: String,
    #[serde(default)]
    pub success_url: String,
    #[serde(default)]
    pub cancel_url: String,
    pub logo: String,
    pub uuid: String,
    #[serde(deserialize_with = "deserialize_flag")]
    pub active: bool,
    #[serde(deserialize_with = "deserialize_flag")]
    pub enabled: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Owner {
    pub uuid: String,
    pub username: String,
    pub name: String,
    pub lastname: String,
    pub logo: String,
}

/// A page of results. `GET /transactions` returns up to 50 transactions per page, newest first.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paginated<T> {
    pub current_page: u64,
    pub data: Vec<T>,
    pub first_page_url: String,
    pub from: Option<u64>,
    pub last_page: u64,
    pub last_page_url: String,
    pub next_page_url: Option<String>,
    pub path: String,
    pub per_page: u64,
    pub prev_page_url: Option<String>,
    pub to: Option<u64>,
    pub total: u64,
}

impl<T> Paginated<T> {
    pub const fn has_next_page(&self) -> bool {
        self.current_page < self.last_page
    }
}

pub type Transactions = Paginated<Transaction>;

/// `GET /balance` returns a bare decimal string such as `"66.00"`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Balance(pub String);

impl Balance {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// The api is not consistent about flags: `1`, `"1"` and `true` all occur.
fn deserialize_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flag {
        Bool(bool),
        Number(i64),
        Text(String),
    }

    Ok(match Flag::deserialize(deserializer)? {
        Flag::Bool(flag) => flag,
        Flag::Number(number) => number != 0,
        Flag::Text(text) => !matches!(text.as_str(), "" | "0" | "false"),
    })
}
