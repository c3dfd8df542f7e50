//! Request, response, and result types for the LNbits API.

use chrono::Local;
use serde::{Deserialize, Deserializer, Serialize};

/// Format of the `date` field on [`Invoice`].
const INVOICE_DATE_FORMAT: &str = "%m/%d/%Y, %H:%M:%S";

/// Sentinel pay link id meaning "no link was found".
pub const PAY_ID_NONE: i64 = -1;

/// Body of `POST /api/v1/payments`.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct CreateInvoiceRequest<'a> {
    /// false: the invoice is for an incoming payment.
    pub out: bool,
    pub amount: i64,
    pub memo: &'a str,
    pub unit: &'a str,
    pub webhook: &'a str,
    /// false: do not use the internal fake wallet.
    pub internal: bool,
}

/// Relevant fields of the `POST /api/v1/payments` response.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct CreateInvoiceResponse {
    pub payment_request: String,
    pub payment_hash: String,
}

/// One entry of the `GET /lnurlp/api/v1/links` response.
///
/// LNbits has served `id`/`min`/`max` both as JSON numbers and as quoted
/// strings, depending on version; both shapes are accepted.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct PayLinkEntry {
    #[serde(deserialize_with = "int_or_string")]
    pub id: i64,
    pub description: String,
    #[serde(deserialize_with = "int_or_string")]
    pub min: i64,
    #[serde(deserialize_with = "int_or_string")]
    pub max: i64,
    pub lnurl: String,
}

fn int_or_string<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Int(i64),
        Str(String),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Int(n) => Ok(n),
        Raw::Str(s) => s.parse().map_err(serde::de::Error::custom),
    }
}

/// An invoice as returned by [`crate::LnbitsClient::create_invoice`].
///
/// Always fully populated: when the remote call failed,
/// `payment_request` and `payment_hash` are empty and the remaining
/// fields carry the requested values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Invoice {
    /// Local creation time, formatted `MM/DD/YYYY, HH:MM:SS`.
    pub date: String,
    /// Requested amount.
    pub amount: i64,
    /// Requested unit, normally "sat".
    pub unit: String,
    /// BOLT11 payment request; empty when creation failed.
    pub payment_request: String,
    /// Payment hash identifying the invoice; empty when creation failed.
    pub payment_hash: String,
}

impl Invoice {
    /// An invoice record with the payment fields still empty, stamped
    /// with the current local time.
    pub(crate) fn unpaid(amount: i64, unit: &str) -> Self {
        Self {
            date: Local::now().format(INVOICE_DATE_FORMAT).to_string(),
            amount,
            unit: unit.to_string(),
            payment_request: String::new(),
            payment_hash: String::new(),
        }
    }
}

/// An LNURL-pay link as returned by [`crate::LnbitsClient::get_lnurlp`].
///
/// Always fully populated: when no link could be fetched or matched,
/// the sentinel value from [`PayLink::default`] is returned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PayLink {
    /// Link id; [`PAY_ID_NONE`] when no link was found.
    pub pay_id: i64,
    pub description: String,
    /// Minimum payable amount in sats.
    pub min_sats: i64,
    /// Maximum payable amount in sats.
    pub max_sats: i64,
    /// The encoded LNURL string.
    pub lnurl: String,
}

impl Default for PayLink {
    fn default() -> Self {
        Self {
            pay_id: PAY_ID_NONE,
            description: "description".to_string(),
            min_sats: -1,
            max_sats: -1,
            lnurl: "lnurl".to_string(),
        }
    }
}

impl From<PayLinkEntry> for PayLink {
    fn from(entry: PayLinkEntry) -> Self {
        Self {
            pay_id: entry.id,
            description: entry.description,
            min_sats: entry.min,
            max_sats: entry.max,
            lnurl: entry.lnurl,
        }
    }
}
