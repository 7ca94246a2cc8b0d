//! Element ids shared with the server-rendered page and its stylesheet.

use contracts::domain::a001_account::AccountId;

pub const DETAILS_MODAL: &str = "details-modal";
pub const TRANSACTION_MESSAGE: &str = "transaction-message";
pub const TRANSACTION_AMOUNT: &str = "transaction-valor";
pub const TRANSACTION_KIND: &str = "transaction-tipo";
pub const MODAL_ACCOUNT_ID: &str = "modal-conta-id";
pub const MODAL_HOLDER_NAME: &str = "modal-nome";
pub const MODAL_ACCOUNT_NUMBER: &str = "modal-conta-numero";
pub const MODAL_BALANCE: &str = "modal-saldo";
pub const HISTORY_BODY: &str = "history-body";

/// Attribute carrying the account id on elements that open the modal
pub const DETAILS_TRIGGER_ATTR: &str = "data-account-details";

/// Balance cell of an account row in the main list
pub fn row_balance_id(id: AccountId) -> String {
    format!("saldo-{}", id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_balance_id() {
        assert_eq!(row_balance_id(AccountId(5)), "saldo-5");
    }
}
