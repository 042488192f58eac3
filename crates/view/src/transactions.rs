//! Transaction log projection.

use types::{TradeAction, Transaction, format_money};

/// Shown when a run produced no trades.
pub const EMPTY_TRANSACTIONS_MESSAGE: &str = "No transactions were made in this simulation.";

/// One trade, formatted for display.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionRow {
    /// Row category; equals the trade action.
    pub category: TradeAction,
    /// `"BUY"` or `"SELL"`.
    pub label: &'static str,
    /// `'▲'` for buys, `'▼'` for sells.
    pub indicator: char,
    pub receiver: String,
    pub sender: Option<String>,
    /// `"Cycle 4"`.
    pub cycle: String,
    pub price: String,
}

impl TransactionRow {
    pub fn new(tx: &Transaction) -> Self {
        let (label, indicator) = match tx.action {
            TradeAction::Buy => ("BUY", '▲'),
            TradeAction::Sell => ("SELL", '▼'),
        };
        Self {
            category: tx.action,
            label,
            indicator,
            receiver: tx.receiver.clone(),
            sender: tx.sender.clone(),
            cycle: format!("Cycle {}", tx.cycle),
            price: format_money(tx.price),
        }
    }
}

/// Rendered state of the transaction log.
#[derive(Debug, Clone, PartialEq)]
pub enum TransactionLogView {
    /// The run produced no trades; show [`EMPTY_TRANSACTIONS_MESSAGE`].
    Empty,
    /// Rows in the order the trades occurred.
    Rows(Vec<TransactionRow>),
}

impl TransactionLogView {
    pub fn from_transactions(transactions: &[Transaction]) -> Self {
        if transactions.is_empty() {
            return TransactionLogView::Empty;
        }
        TransactionLogView::Rows(transactions.iter().map(TransactionRow::new).collect())
    }

    pub fn rows(&self) -> &[TransactionRow] {
        match self {
            TransactionLogView::Empty => &[],
            TransactionLogView::Rows(rows) => rows,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tx(action: TradeAction, receiver: &str, price: f64, cycle: u64) -> Transaction {
        Transaction {
            action,
            receiver: receiver.to_string(),
            price,
            cycle,
            sender: None,
        }
    }

    #[test]
    fn test_empty_log_is_placeholder() {
        let view = TransactionLogView::from_transactions(&[]);
        assert_eq!(view, TransactionLogView::Empty);
        assert!(view.rows().is_empty());
    }

    #[test]
    fn test_sell_row() {
        let view =
            TransactionLogView::from_transactions(&[tx(TradeAction::Sell, "agent_1", 99.99, 4)]);
        let rows = view.rows();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].label, "SELL");
        assert_eq!(rows[0].indicator, '▼');
        assert_eq!(rows[0].category.as_str(), "sell");
        assert_eq!(rows[0].receiver, "agent_1");
        assert_eq!(rows[0].cycle, "Cycle 4");
        assert_eq!(rows[0].price, "$99.99");
    }

    #[test]
    fn test_rows_keep_given_order() {
        let view = TransactionLogView::from_transactions(&[
            tx(TradeAction::Buy, "c", 1.0, 5),
            tx(TradeAction::Sell, "a", 2.0, 1),
            tx(TradeAction::Buy, "b", 3.0, 3),
        ]);
        let receivers: Vec<&str> = view.rows().iter().map(|r| r.receiver.as_str()).collect();
        assert_eq!(receivers, vec!["c", "a", "b"]);
        assert_eq!(view.rows()[0].label, "BUY");
        assert_eq!(view.rows()[0].indicator, '▲');
    }
}
