//! LNbits HTTP client.

use reqwest::{Client, Method, Proxy, RequestBuilder};
use serde_json::Value;
use tracing::{debug, warn};

use crate::config::LnbitsConfig;
use crate::error::LnbitsError;
use crate::types::{CreateInvoiceRequest, CreateInvoiceResponse, Invoice, PayLink, PayLinkEntry};

/// Client for a remote LNbits wallet.
///
/// Holds the connection configuration and a pooled HTTP client, built once.
/// Cloning is cheap; the underlying connection pool is shared.
#[derive(Clone)]
pub struct LnbitsClient {
    http: Client,
    config: LnbitsConfig,
}

impl LnbitsClient {
    /// Create a client for the given configuration.
    ///
    /// When the host is a Tor hidden service, outbound requests for both
    /// http and https are routed through the local SOCKS5 proxy. The proxy
    /// is wired here, once, not per request.
    pub fn new(config: LnbitsConfig) -> Result<Self, LnbitsError> {
        let mut builder = Client::builder();
        if let Some(proxy) = config.socks5_proxy() {
            builder = builder.proxy(Proxy::all(proxy)?);
        }
        let http = builder.build()?;

        Ok(Self { http, config })
    }

    /// Create a client from `LNBITS_*` environment variables.
    ///
    /// See [`LnbitsConfig::from_env`] for the recognized variables.
    pub fn from_env() -> Result<Self, LnbitsError> {
        Self::new(LnbitsConfig::from_env())
    }

    /// Get the configuration.
    pub fn config(&self) -> &LnbitsConfig {
        &self.config
    }

    /// Fetch the wallet record for the configured read key.
    ///
    /// The parsed JSON body is returned as-is, without validation. Unlike
    /// [`create_invoice`](Self::create_invoice) and
    /// [`get_lnurlp`](Self::get_lnurlp), failures propagate to the caller.
    pub async fn get_wallet(&self) -> Result<Value, LnbitsError> {
        debug!("get_wallet");

        let url = format!("{}/wallet", self.config.wallet_api_url());
        let response = self.request(Method::GET, url).send().await?;
        Ok(response.json().await?)
    }

    /// Create an invoice for an incoming payment of `amount`.
    ///
    /// Always returns a fully populated [`Invoice`]: on success the
    /// payment fields come from the LNbits response, on any failure they
    /// stay empty and the reason is logged. A successful call creates a
    /// real invoice on the remote wallet; there is no deduplication.
    pub async fn create_invoice(&self, amount: i64, memo: &str, unit: &str) -> Invoice {
        debug!(amount, unit, "create_invoice");

        let mut invoice = Invoice::unpaid(amount, unit);
        match self.try_create_invoice(amount, memo, unit).await {
            Ok(created) => {
                invoice.payment_request = created.payment_request;
                invoice.payment_hash = created.payment_hash;
            }
            Err(e) => warn!("create_invoice falling back to empty payment fields: {e}"),
        }
        invoice
    }

    /// Look up an invoice by payment hash.
    ///
    /// Kept for parity with the LNbits API surface
    /// (`GET /api/v1/payments/<payment_hash>`); not implemented.
    pub async fn get_invoice(&self, _payment_hash: &str) -> Result<Value, LnbitsError> {
        Err(LnbitsError::NotImplemented("get_invoice"))
    }

    /// Fetch an LNURL-pay link.
    ///
    /// With `pay_id == None` the first link in server order is returned,
    /// otherwise the first link whose id matches. Always returns a fully
    /// populated [`PayLink`]: on any failure, including an empty list or an
    /// unmatched id, the sentinel [`PayLink::default`] is returned and the
    /// reason is logged.
    pub async fn get_lnurlp(&self, pay_id: Option<i64>) -> PayLink {
        debug!(?pay_id, "get_lnurlp");

        match self.try_get_lnurlp(pay_id).await {
            Ok(link) => link,
            Err(e) => {
                warn!("get_lnurlp falling back to sentinel pay link: {e}");
                PayLink::default()
            }
        }
    }

    async fn try_create_invoice(
        &self,
        amount: i64,
        memo: &str,
        unit: &str,
    ) -> Result<CreateInvoiceResponse, LnbitsError> {
        let body = CreateInvoiceRequest {
            out: false,
            amount,
            memo,
            unit,
            webhook: &self.config.webhook,
            internal: false,
        };

        let url = format!("{}/payments", self.config.wallet_api_url());
        let response = self.request(Method::POST, url).json(&body).send().await?;
        Ok(response.json().await?)
    }

    async fn try_get_lnurlp(&self, pay_id: Option<i64>) -> Result<PayLink, LnbitsError> {
        let url = format!("{}/links", self.config.lnurl_api_url());
        let response = self.request(Method::GET, url).send().await?;
        let links: Vec<PayLinkEntry> = response.json().await?;

        select_pay_link(links, pay_id)
            .map(PayLink::from)
            .ok_or(LnbitsError::NoMatchingPayLink(pay_id))
    }

    /// Build a request carrying the standard LNbits headers.
    ///
    /// Headers are computed per call, so they always reflect the current
    /// configuration.
    fn request(&self, method: Method, url: String) -> RequestBuilder {
        self.http
            .request(method, url)
            .header("X-Api-Key", &self.config.read_key)
            .header("Content-Type", "application/json")
    }
}

/// Select a pay link from a server-ordered list.
///
/// No id: the first entry. With an id: the first entry whose id matches.
fn select_pay_link(links: Vec<PayLinkEntry>, pay_id: Option<i64>) -> Option<PayLinkEntry> {
    match pay_id {
        None => links.into_iter().next(),
        Some(id) => links.into_iter().find(|link| link.id == id),
    }
}

impl std::fmt::Debug for LnbitsClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LnbitsClient")
            .field("config", &self.config)
            .finish()
    }
}
