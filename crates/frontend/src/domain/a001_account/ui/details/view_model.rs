use contracts::domain::a001_account::{TransactionKind, TransactionRequest};
use leptos::prelude::*;

use super::controller::{DetailsView, StatusMessage, SubmissionState};
use super::model::DetailsPresentation;

/// ViewModel for the account details modal
#[derive(Clone, Copy)]
pub struct AccountDetailsViewModel {
    pub visible: RwSignal<bool>,
    pub details: RwSignal<Option<DetailsPresentation>>,
    pub balance: RwSignal<String>,
    pub status: RwSignal<Option<StatusMessage>>,
    pub amount: RwSignal<String>,
    pub kind: RwSignal<TransactionKind>,
    pub submission: RwSignal<SubmissionState>,
}

impl AccountDetailsViewModel {
    pub fn new() -> Self {
        Self {
            visible: RwSignal::new(false),
            details: RwSignal::new(None),
            balance: RwSignal::new(String::new()),
            status: RwSignal::new(None),
            amount: RwSignal::new(String::new()),
            kind: RwSignal::new(TransactionKind::default()),
            submission: RwSignal::new(SubmissionState::Idle),
        }
    }

    /// Current form contents, or `None` while no account is loaded
    pub fn transaction_request(&self) -> Option<TransactionRequest> {
        let account_id = self.details.with_untracked(|d| d.as_ref().map(|d| d.account_id))?;
        Some(TransactionRequest {
            account_id,
            kind: self.kind.get_untracked(),
            amount: self.amount.get_untracked(),
        })
    }

    pub fn is_submitting(&self) -> bool {
        self.submission.get() == SubmissionState::Submitting
    }
}

impl Default for AccountDetailsViewModel {
    fn default() -> Self {
        Self::new()
    }
}

impl DetailsView for AccountDetailsViewModel {
    fn show_details(&self, details: DetailsPresentation) {
        self.balance.set(details.balance.clone());
        self.details.set(Some(details));
    }

    fn set_balance(&self, balance: String) {
        self.balance.set(balance);
    }

    fn set_status(&self, status: Option<StatusMessage>) {
        self.status.set(status);
    }

    fn clear_amount(&self) {
        self.amount.set(String::new());
    }

    fn set_visible(&self, visible: bool) {
        self.visible.set(visible);
    }

    fn set_submission(&self, state: SubmissionState) {
        self.submission.set(state);
    }

    fn alert(&self, message: &str) {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }
}
