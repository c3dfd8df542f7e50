//! LNbits wallet API client library.
//!
//! This crate provides a small async client for a self-hosted
//! [LNbits](https://lnbits.com) instance. It supports:
//!
//! - Fetching the wallet record for a read-only API key
//! - Creating invoices for incoming payments
//! - Looking up LNURL-pay links
//! - Transparent Tor routing for `.onion` hosts
//!
//! Invoice and pay-link results are always fully populated: when the
//! remote call fails, the documented default/sentinel values are returned
//! and the failure is logged instead of surfaced.
//!
//! # Example
//!
//! ```no_run
//! use lnbits_client::{LnbitsClient, LnbitsConfig};
//!
//! # async fn example() -> Result<(), lnbits_client::LnbitsError> {
//! let config = LnbitsConfig::new("https://legend.lnbits.com")
//!     .with_read_key("my-read-key");
//! let client = LnbitsClient::new(config)?;
//!
//! // Wallet record, as raw JSON
//! let wallet = client.get_wallet().await?;
//! println!("balance: {}", wallet["balance"]);
//!
//! // A 100 sat invoice; payment fields are empty if the call failed
//! let invoice = client.create_invoice(100, "coffee", "sat").await;
//! println!("pay: {}", invoice.payment_request);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod types;

pub use client::LnbitsClient;
pub use config::{LnbitsConfig, TOR_SOCKS5_PROXY};
pub use error::LnbitsError;
pub use types::{Invoice, PayLink, PAY_ID_NONE};

/// Crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
