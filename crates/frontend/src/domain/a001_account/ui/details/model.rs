//! Presentation of fetched account data.
//!
//! Pure functions: no signals, no DOM. The view binds to the values built
//! here.

use chrono::NaiveDateTime;
use contracts::domain::a001_account::{AccountDetails, AccountId, TransactionEntry};
use std::cmp::Ordering;

use crate::shared::config::{DisplayConfig, MessagesConfig};
use crate::shared::date_utils::parse_timestamp;
use crate::shared::number_format::format_currency;

/// One rendered row of the history table
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryRow {
    pub timestamp: String,
    pub kind: String,
    pub amount: String,
}

/// Body of the history table
#[derive(Debug, Clone, PartialEq)]
pub enum HistoryTable {
    /// A single placeholder row spanning every column
    Empty { message: String },
    Rows(Vec<HistoryRow>),
}

impl HistoryTable {
    pub const COLUMNS: u32 = 3;

    /// Number of `<tr>` elements the table renders
    pub fn row_count(&self) -> usize {
        match self {
            HistoryTable::Empty { .. } => 1,
            HistoryTable::Rows(rows) => rows.len(),
        }
    }
}

/// Everything the modal shows for one account
#[derive(Debug, Clone, PartialEq)]
pub struct DetailsPresentation {
    pub account_id: AccountId,
    pub holder_name: String,
    pub account_number: String,
    pub balance: String,
    pub history: HistoryTable,
}

/// Newest first.
///
/// Sorted by parsed timestamp, descending. Entries sharing a timestamp show
/// the later server position first. Entries whose timestamp cannot be parsed
/// follow the parsed ones in server order.
pub fn order_newest_first(entries: &[TransactionEntry]) -> Vec<TransactionEntry> {
    let mut keyed: Vec<(usize, Option<NaiveDateTime>, &TransactionEntry)> = entries
        .iter()
        .enumerate()
        .map(|(index, entry)| (index, parse_timestamp(&entry.timestamp), entry))
        .collect();

    keyed.sort_by(|(ia, a, _), (ib, b, _)| match (a, b) {
        (Some(a), Some(b)) => b.cmp(a).then_with(|| ib.cmp(ia)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => ia.cmp(ib),
    });

    keyed.into_iter().map(|(_, _, entry)| entry.clone()).collect()
}

pub fn render_history(
    entries: &[TransactionEntry],
    display: &DisplayConfig,
    messages: &MessagesConfig,
) -> HistoryTable {
    if entries.is_empty() {
        return HistoryTable::Empty {
            message: messages.no_transactions.clone(),
        };
    }

    let rows = order_newest_first(entries)
        .into_iter()
        .map(|entry| HistoryRow {
            timestamp: entry.timestamp,
            kind: entry.kind,
            amount: format_currency(&display.currency_prefix, entry.amount),
        })
        .collect();

    HistoryTable::Rows(rows)
}

pub fn present_details(
    details: &AccountDetails,
    display: &DisplayConfig,
    messages: &MessagesConfig,
) -> DetailsPresentation {
    DetailsPresentation {
        account_id: details.id,
        holder_name: details.holder_name.clone(),
        account_number: details.account_number.clone(),
        balance: format_currency(&display.currency_prefix, details.balance),
        history: render_history(&details.transactions, display, messages),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::config::default_config;

    fn entry(timestamp: &str, kind: &str, amount: f64) -> TransactionEntry {
        TransactionEntry {
            timestamp: timestamp.to_string(),
            kind: kind.to_string(),
            amount,
        }
    }

    fn render(entries: &[TransactionEntry]) -> HistoryTable {
        let config = default_config().unwrap();
        render_history(entries, &config.display, &config.messages)
    }

    #[test]
    fn test_empty_history_has_single_placeholder() {
        let table = render(&[]);
        assert_eq!(table.row_count(), 1);
        assert_eq!(
            table,
            HistoryTable::Empty {
                message: "Nenhuma transação registada.".to_string()
            }
        );
        assert_eq!(HistoryTable::COLUMNS, 3);
    }

    #[test]
    fn test_oldest_first_input_is_reversed() {
        let table = render(&[
            entry("01/02/2024 09:00:00", "Depósito Inicial", 100.0),
            entry("02/02/2024 10:30:00", "Saque", 20.0),
            entry("03/02/2024 08:15:00", "Depósito", 5.5),
        ]);
        let HistoryTable::Rows(rows) = table else {
            panic!("expected rows");
        };
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].timestamp, "03/02/2024 08:15:00");
        assert_eq!(rows[0].amount, "R$ 5.50");
        assert_eq!(rows[1].kind, "Saque");
        assert_eq!(rows[2].kind, "Depósito Inicial");
        assert_eq!(rows[2].amount, "R$ 100.00");
    }

    #[test]
    fn test_newest_first_input_is_kept() {
        let entries = [
            entry("03/02/2024 08:15:00", "Depósito", 5.5),
            entry("02/02/2024 10:30:00", "Saque", 20.0),
        ];
        let ordered = order_newest_first(&entries);
        assert_eq!(ordered, entries.to_vec());
    }

    #[test]
    fn test_same_second_entries_show_latest_first() {
        let ordered = order_newest_first(&[
            entry("01/02/2024 10:00:00", "Depósito Inicial", 100.0),
            entry("01/02/2024 10:00:00", "Saque", 20.0),
        ]);
        let kinds: Vec<&str> = ordered.iter().map(|e| e.kind.as_str()).collect();
        assert_eq!(kinds, vec!["Saque", "Depósito Inicial"]);
    }

    #[test]
    fn test_unparsed_timestamps_follow_in_server_order() {
        let ordered = order_newest_first(&[
            entry("ontem", "A", 1.0),
            entry("01/01/2024 00:00:00", "B", 2.0),
            entry("hoje", "C", 3.0),
            entry("02/01/2024 00:00:00", "D", 4.0),
        ]);
        let kinds: Vec<&str> = ordered.iter().map(|e| e.kind.as_str()).collect();
        assert_eq!(kinds, vec!["D", "B", "A", "C"]);
    }

    #[test]
    fn test_present_details_formats_balance() {
        let config = default_config().unwrap();
        let details = AccountDetails {
            id: AccountId(4),
            holder_name: "João Lima".to_string(),
            account_number: "12345-6".to_string(),
            balance: 98.7,
            transactions: vec![],
        };
        let presentation = present_details(&details, &config.display, &config.messages);
        assert_eq!(presentation.balance, "R$ 98.70");
        assert_eq!(presentation.account_id, AccountId(4));
        assert_eq!(presentation.holder_name, "João Lima");
        assert_eq!(presentation.history.row_count(), 1);
    }
}
