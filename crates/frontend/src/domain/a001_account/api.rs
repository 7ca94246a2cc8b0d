use async_trait::async_trait;
use contracts::domain::a001_account::{
    AccountDetails, AccountId, TransactionErrorBody, TransactionRequest, TransactionResponse,
};
use gloo_net::http::Request;

use crate::shared::api_utils::api_url;
use crate::shared::config::ApiConfig;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    /// The request never completed
    #[error("failed to send request: {0}")]
    Network(String),

    /// Server answered with a non-success status
    #[error("server responded with status {status}")]
    Status { status: u16, message: Option<String> },

    #[error("failed to encode request: {0}")]
    Encode(String),

    #[error("failed to parse response: {0}")]
    Decode(String),
}

/// Account endpoints of the external server
#[async_trait(?Send)]
pub trait AccountsApi {
    async fn fetch_details(&self, id: AccountId) -> Result<AccountDetails, ApiError>;

    async fn submit_transaction(
        &self,
        request: &TransactionRequest,
    ) -> Result<TransactionResponse, ApiError>;
}

/// `AccountsApi` over HTTP with `gloo-net`
#[derive(Debug, Clone)]
pub struct HttpAccountsApi {
    config: ApiConfig,
}

impl HttpAccountsApi {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }

    /// Form body for a transaction, with the field names of the configured schema
    pub fn encode_form(&self, request: &TransactionRequest) -> Result<String, ApiError> {
        let fields = self.config.schema.form_fields(request);
        serde_qs::to_string(&fields).map_err(|e| ApiError::Encode(e.to_string()))
    }
}

/// Rejection with the server's own message, when its body carries one
pub fn status_error(status: u16, body: &str) -> ApiError {
    let message = serde_json::from_str::<TransactionErrorBody>(body)
        .ok()
        .and_then(|body| body.message);
    ApiError::Status { status, message }
}

#[async_trait(?Send)]
impl AccountsApi for HttpAccountsApi {
    async fn fetch_details(&self, id: AccountId) -> Result<AccountDetails, ApiError> {
        let url = api_url(&self.config.base_url, &self.config.schema.details_path(id));
        log::debug!("GET {}", url);

        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(ApiError::Status {
                status: response.status(),
                message: None,
            });
        }

        response
            .json::<AccountDetails>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn submit_transaction(
        &self,
        request: &TransactionRequest,
    ) -> Result<TransactionResponse, ApiError> {
        let url = api_url(&self.config.base_url, self.config.schema.transaction_path());
        let body = self.encode_form(request)?;
        log::debug!("POST {} ({} {})", url, request.kind.wire_value(), request.account_id);

        let response = Request::post(&url)
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(body)
            .map_err(|e| ApiError::Encode(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !response.ok() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            return Err(status_error(status, &text));
        }

        response
            .json::<TransactionResponse>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
}
