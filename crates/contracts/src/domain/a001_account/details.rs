use serde::{Deserialize, Serialize};
use std::fmt;

use crate::shared::amount;

// ============================================================================
// ID Type
// ============================================================================

/// Идентификатор счёта, как его выдаёт сервер
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AccountId(pub u64);

impl AccountId {
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn from_string(s: &str) -> Result<Self, String> {
        s.trim()
            .parse::<u64>()
            .map(AccountId::new)
            .map_err(|e| format!("Invalid account id {:?}: {}", s, e))
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Read model
// ============================================================================

/// Состояние счёта вместе с историей операций
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountDetails {
    pub id: AccountId,

    #[serde(alias = "nome_titular")]
    pub holder_name: String,

    #[serde(alias = "numero_conta")]
    pub account_number: String,

    #[serde(alias = "saldo", deserialize_with = "amount::deserialize")]
    pub balance: f64,

    #[serde(default, alias = "transacoes")]
    pub transactions: Vec<TransactionEntry>,
}

/// Одна операция по счёту
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionEntry {
    /// Display string produced by the server, e.g. `"15/03/2024 14:02:26"`
    pub timestamp: String,

    #[serde(rename = "type", alias = "tipo")]
    pub kind: String,

    #[serde(alias = "valor", deserialize_with = "amount::deserialize")]
    pub amount: f64,
}
