use qvapay_core::{
    error::ValidationError, invoice::ValidatedInvoice, params::Credentials, params::QueryParams,
    transaction::TransactionId,
};

use crate::{
    config::HttpOptions,
    error::QvapayError,
    http::{reqwest::ReqwestHttpClient, ApiResponse, HttpClient},
};

/// Client for the QvaPay app api.
///
/// Every call is a single `GET` request authenticated with the app credentials. Responses are
/// returned as received; use [`ApiResponse::json`] to decode them. Invoice requests are validated
/// before the transport is called, so a [`QvapayError::Validation`] never reaches the network.
#[derive(Debug, Clone)]
pub struct QvapayClient<H: HttpClient = ReqwestHttpClient> {
    credentials: Credentials,
    http: H,
}

impl QvapayClient<ReqwestHttpClient> {
    pub fn from_options(
        credentials: Credentials,
        options: &HttpOptions,
    ) -> Result<Self, QvapayError> {
        Ok(Self::new(credentials, ReqwestHttpClient::new(options)?))
    }
}

impl<H: HttpClient> QvapayClient<H> {
    pub const fn new(credentials: Credentials, http: H) -> Self {
        Self { credentials, http }
    }

    pub fn app_id(&self) -> &str {
        &self.credentials.app_id
    }

    pub fn app_secret(&self) -> &str {
        &self.credentials.app_secret
    }

    pub const fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub const fn http(&self) -> &H {
        &self.http
    }

    fn authenticated(&self) -> QueryParams {
        QueryParams::authenticated(&self.credentials)
    }

    /// `GET /info`: settings and limits of the app.
    pub async fn get_app_info(&self) -> Result<ApiResponse, QvapayError> {
        self.http.get("/info", &self.authenticated()).await
    }

    /// `GET /create_invoice`: creates a payment url for the given amount.
    ///
    /// Accepts an `InvoiceRequest` or untyped json (`&serde_json::Value`).
    pub async fn create_invoice<R>(&self, request: R) -> Result<ApiResponse, QvapayError>
    where
        R: TryInto<ValidatedInvoice, Error = ValidationError>,
    {
        let invoice = request.try_into()?;
        let params = QueryParams::for_invoice(&self.credentials, &invoice);
        self.http.get("/create_invoice", &params).await
    }

    /// `GET /transactions`: the first page of transactions, newest first.
    pub async fn list_transactions(&self) -> Result<ApiResponse, QvapayError> {
        self.http.get("/transactions", &self.authenticated()).await
    }

    /// `GET /transactions?page=<page>`
    pub async fn list_transactions_page(&self, page: u64) -> Result<ApiResponse, QvapayError> {
        let params = self.authenticated().with("page", page.to_string());
        self.http.get("/transactions", &params).await
    }

    /// `GET /transaction/{uuid}`: a single transaction with its app, payer and owner.
    pub async fn get_transaction(
        &self,
        uuid: impl Into<TransactionId>,
    ) -> Result<ApiResponse, QvapayError> {
        let path = uuid.into().path();
        self.http.get(&path, &self.authenticated()).await
    }

    /// `GET /balance`
    pub async fn get_balance(&self) -> Result<ApiResponse, QvapayError> {
        self.http.get("/balance", &self.authenticated()).await
    }
}
