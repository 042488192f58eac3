//! Transaction log renderer - trade rows or the empty-state message.

use types::Transaction;
use view::TransactionLogView;

/// Writes the trade log, or the empty-state message when there were no trades.
#[derive(Debug, Default)]
pub struct TransactionLogRenderer;

impl TransactionLogRenderer {
    pub fn render(&self, target: &mut Option<TransactionLogView>, transactions: &[Transaction]) {
        *target = Some(TransactionLogView::from_transactions(transactions));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use types::TradeAction;

    #[test]
    fn test_render_replaces_rows_with_placeholder() {
        let renderer = TransactionLogRenderer;
        let mut target = None;

        renderer.render(
            &mut target,
            &[Transaction {
                action: TradeAction::Buy,
                receiver: "agent_2".into(),
                price: 101.0,
                cycle: 1,
                sender: None,
            }],
        );
        assert_eq!(target.as_ref().map(|v| v.rows().len()), Some(1));

        renderer.render(&mut target, &[]);
        assert_eq!(target, Some(TransactionLogView::Empty));
    }
}
