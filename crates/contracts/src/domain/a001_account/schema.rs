use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::details::AccountId;
use super::transaction::TransactionRequest;

/// Which generation of the server API to talk to.
///
/// Only paths and form-field names differ; responses of both generations
/// decode into the same types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApiSchema {
    #[default]
    Current,
    Legacy,
}

impl ApiSchema {
    pub fn details_path(&self, id: AccountId) -> String {
        match self {
            ApiSchema::Current => format!("/accounts/details/{}", id),
            ApiSchema::Legacy => format!("/conta/get/{}", id),
        }
    }

    pub fn transaction_path(&self) -> &'static str {
        match self {
            ApiSchema::Current => "/accounts/transaction",
            ApiSchema::Legacy => "/transacao",
        }
    }

    /// Form fields for a transaction submission, keyed by wire name
    pub fn form_fields(&self, request: &TransactionRequest) -> BTreeMap<&'static str, String> {
        let (account_key, kind_key, amount_key) = match self {
            ApiSchema::Current => ("account_id", "transaction_type", "amount"),
            ApiSchema::Legacy => ("conta_id", "tipo_transacao", "valor"),
        };

        let mut fields = BTreeMap::new();
        fields.insert(account_key, request.account_id.to_string());
        fields.insert(kind_key, request.kind.wire_value().to_string());
        fields.insert(amount_key, request.amount.clone());
        fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_account::TransactionKind;

    fn request() -> TransactionRequest {
        TransactionRequest {
            account_id: AccountId(3),
            kind: TransactionKind::Withdrawal,
            amount: "15.00".to_string(),
        }
    }

    #[test]
    fn test_current_schema() {
        let schema = ApiSchema::Current;
        assert_eq!(schema.details_path(AccountId(3)), "/accounts/details/3");
        assert_eq!(schema.transaction_path(), "/accounts/transaction");

        let fields = schema.form_fields(&request());
        assert_eq!(fields.get("account_id").map(String::as_str), Some("3"));
        assert_eq!(fields.get("transaction_type").map(String::as_str), Some("saque"));
        assert_eq!(fields.get("amount").map(String::as_str), Some("15.00"));
        assert_eq!(fields.len(), 3);
    }

    #[test]
    fn test_legacy_schema() {
        let schema = ApiSchema::Legacy;
        assert_eq!(schema.details_path(AccountId(3)), "/conta/get/3");
        assert_eq!(schema.transaction_path(), "/transacao");

        let fields = schema.form_fields(&request());
        assert_eq!(fields.get("conta_id").map(String::as_str), Some("3"));
        assert_eq!(fields.get("tipo_transacao").map(String::as_str), Some("saque"));
        assert_eq!(fields.get("valor").map(String::as_str), Some("15.00"));
    }

    #[test]
    fn test_schema_from_config_value() {
        let schema: ApiSchema = serde_json::from_str(r#""legacy""#).unwrap();
        assert_eq!(schema, ApiSchema::Legacy);
    }
}
