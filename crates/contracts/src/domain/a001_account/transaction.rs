use serde::{Deserialize, Serialize};

use super::details::AccountId;
use crate::shared::amount;

/// Вид операции, выбираемый в форме
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TransactionKind {
    #[default]
    #[serde(rename = "deposito", alias = "deposit")]
    Deposit,
    #[serde(rename = "saque", alias = "withdrawal")]
    Withdrawal,
}

impl TransactionKind {
    pub const ALL: [TransactionKind; 2] = [TransactionKind::Deposit, TransactionKind::Withdrawal];

    /// Value the server expects in the form body
    pub fn wire_value(&self) -> &'static str {
        match self {
            TransactionKind::Deposit => "deposito",
            TransactionKind::Withdrawal => "saque",
        }
    }

    pub fn from_wire(value: &str) -> Option<Self> {
        match value {
            "deposito" | "deposit" => Some(TransactionKind::Deposit),
            "saque" | "withdrawal" => Some(TransactionKind::Withdrawal),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TransactionKind::Deposit => "Depósito",
            TransactionKind::Withdrawal => "Saque",
        }
    }
}

/// Тело запроса на проведение операции.
///
/// `amount` is forwarded exactly as typed; the server owns validation.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionRequest {
    pub account_id: AccountId,
    pub kind: TransactionKind,
    pub amount: String,
}

/// Successful transaction result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionResponse {
    #[serde(alias = "novo_saldo", deserialize_with = "amount::deserialize")]
    pub new_balance: f64,

    #[serde(default)]
    pub message: String,
}

/// Body returned alongside a non-success status
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TransactionErrorBody {
    #[serde(default, alias = "error")]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_accepts_both_generations() {
        let legacy = r#"{"success": true, "novo_saldo": "123.40", "message": "Deposito realizado com sucesso!"}"#;
        let current = r#"{"new_balance": 123.4, "message": "Deposito realizado com sucesso!"}"#;
        let a: TransactionResponse = serde_json::from_str(legacy).unwrap();
        let b: TransactionResponse = serde_json::from_str(current).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.new_balance, 123.4);
    }

    #[test]
    fn test_error_body() {
        let body: TransactionErrorBody =
            serde_json::from_str(r#"{"success": false, "message": "insufficient funds"}"#).unwrap();
        assert_eq!(body.message.as_deref(), Some("insufficient funds"));

        let body: TransactionErrorBody =
            serde_json::from_str(r#"{"error": "Conta não encontrada"}"#).unwrap();
        assert_eq!(body.message.as_deref(), Some("Conta não encontrada"));

        let body: TransactionErrorBody = serde_json::from_str("{}").unwrap();
        assert_eq!(body.message, None);
    }

    #[test]
    fn test_kind_wire_values() {
        assert_eq!(TransactionKind::Deposit.wire_value(), "deposito");
        assert_eq!(TransactionKind::Withdrawal.wire_value(), "saque");
        assert_eq!(TransactionKind::from_wire("withdrawal"), Some(TransactionKind::Withdrawal));
        assert_eq!(TransactionKind::from_wire("transfer"), None);
        let kind: TransactionKind = serde_json::from_str(r#""deposit""#).unwrap();
        assert_eq!(kind, TransactionKind::Deposit);
        assert_eq!(serde_json::to_string(&TransactionKind::Withdrawal).unwrap(), r#""saque""#);
    }
}
