use contracts::domain::a001_account::{AccountId, TransactionRequest};
use std::cell::Cell;

use super::model::{present_details, DetailsPresentation};
use crate::domain::a001_account::api::{AccountsApi, ApiError};
use crate::shared::config::{DisplayConfig, MessagesConfig};
use crate::shared::number_format::format_currency;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Success,
    Error,
}

impl StatusKind {
    pub fn css_class(&self) -> &'static str {
        match self {
            StatusKind::Success => "success",
            StatusKind::Error => "error",
        }
    }
}

/// Inline message under the transaction form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub kind: StatusKind,
    pub text: String,
}

impl StatusMessage {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Error,
            text: text.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
}

/// How one submission ended. The form returns to `Idle` once no other
/// submission is still in flight.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionOutcome {
    Success { new_balance: String, message: String },
    ServerError { message: String },
    NetworkError { message: String },
}

/// What the controller needs from the modal
pub trait DetailsView {
    fn show_details(&self, details: DetailsPresentation);
    fn set_balance(&self, balance: String);
    fn set_status(&self, status: Option<StatusMessage>);
    fn clear_amount(&self);
    fn set_visible(&self, visible: bool);
    fn set_submission(&self, state: SubmissionState);
    /// Blocking notice
    fn alert(&self, message: &str);

    fn reset_transient(&self) {
        self.set_status(None);
        self.clear_amount();
    }
}

/// Account rows of the main page, outside the modal
pub trait AccountRows {
    fn set_balance(&self, id: AccountId, balance: &str);
}

/// Drives the details modal: loading, dismissing, submitting transactions.
///
/// Network access and element handles are injected, so the flow runs the
/// same against the browser and against in-memory fakes.
pub struct DetailsModalController<A, V, R> {
    api: A,
    view: V,
    rows: R,
    display: DisplayConfig,
    messages: MessagesConfig,
    in_flight: Cell<usize>,
}

impl<A, V, R> DetailsModalController<A, V, R>
where
    A: AccountsApi,
    V: DetailsView,
    R: AccountRows,
{
    pub fn new(api: A, view: V, rows: R, display: DisplayConfig, messages: MessagesConfig) -> Self {
        Self {
            api,
            view,
            rows,
            display,
            messages,
            in_flight: Cell::new(0),
        }
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn rows(&self) -> &R {
        &self.rows
    }

    /// Load the account and show the modal.
    ///
    /// On failure the modal stays closed and the user gets a blocking notice.
    pub async fn open_details(&self, id: AccountId) -> Result<(), ApiError> {
        self.view.reset_transient();

        match self.api.fetch_details(id).await {
            Ok(details) => {
                self.view
                    .show_details(present_details(&details, &self.display, &self.messages));
                self.view.set_visible(true);
                Ok(())
            }
            Err(err) => {
                log::error!("Failed to load account {}: {}", id, err);
                self.view.set_visible(false);
                self.view.alert(&self.messages.load_failed);
                Err(err)
            }
        }
    }

    pub fn close_details(&self) {
        self.view.set_visible(false);
    }

    /// `on_backdrop` is true only when the click target was the overlay itself
    pub fn backdrop_clicked(&self, on_backdrop: bool) {
        if on_backdrop {
            self.close_details();
        }
    }

    /// Post a transaction and reflect the result in the modal and the account row
    pub async fn submit(&self, request: TransactionRequest) -> SubmissionOutcome {
        let account_id = request.account_id;
        self.view.set_status(None);
        self.in_flight.set(self.in_flight.get() + 1);
        self.view.set_submission(SubmissionState::Submitting);

        let outcome = match self.api.submit_transaction(&request).await {
            Ok(response) => SubmissionOutcome::Success {
                new_balance: format_currency(&self.display.currency_prefix, response.new_balance),
                message: response.message,
            },
            Err(ApiError::Network(reason)) => {
                log::error!("Transaction on account {} failed: {}", account_id, reason);
                SubmissionOutcome::NetworkError {
                    message: self.messages.connection_error.clone(),
                }
            }
            Err(ApiError::Status { status, message }) => {
                log::warn!("Transaction on account {} rejected with {}", account_id, status);
                SubmissionOutcome::ServerError {
                    message: message
                        .filter(|m| !m.trim().is_empty())
                        .unwrap_or_else(|| self.messages.transaction_failed.clone()),
                }
            }
            Err(err) => {
                log::error!("Transaction on account {} failed: {}", account_id, err);
                SubmissionOutcome::ServerError {
                    message: self.messages.transaction_failed.clone(),
                }
            }
        };

        let remaining = self.in_flight.get().saturating_sub(1);
        self.in_flight.set(remaining);
        if remaining == 0 {
            self.view.set_submission(SubmissionState::Idle);
        }

        match &outcome {
            SubmissionOutcome::Success {
                new_balance,
                message,
            } => {
                self.rows.set_balance(account_id, new_balance);
                self.view.set_balance(new_balance.clone());
                self.view.set_status(Some(StatusMessage::success(message.clone())));
                self.refresh_history(account_id).await;
            }
            SubmissionOutcome::ServerError { message }
            | SubmissionOutcome::NetworkError { message } => {
                self.view.set_status(Some(StatusMessage::error(message.clone())));
            }
        }

        outcome
    }

    /// Re-fetch after a transaction. Keeps the status message on screen.
    async fn refresh_history(&self, id: AccountId) {
        match self.api.fetch_details(id).await {
            Ok(details) => {
                self.view.clear_amount();
                self.view
                    .show_details(present_details(&details, &self.display, &self.messages));
            }
            Err(err) => {
                log::warn!("Failed to refresh account {} after transaction: {}", id, err);
            }
        }
    }
}
