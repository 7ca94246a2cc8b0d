//! Account read model and transaction wire types.
//!
//! The server has shipped two generations of field names (Portuguese and
//! English). Both are accepted when decoding; everything above this module
//! only sees the canonical names.

pub mod details;
pub mod schema;
pub mod transaction;

pub use details::{AccountDetails, AccountId, TransactionEntry};
pub use schema::ApiSchema;
pub use transaction::{TransactionErrorBody, TransactionKind, TransactionRequest, TransactionResponse};
