//! TUI widgets for displaying simulation results.
//!
//! Each widget draws one render target of the dashboard:
//! - `FormPanel`: the cycles / initial price inputs
//! - `StatsPanel`: summary statistics with sign coloring
//! - `PriceChart`: the active chart on the terminal canvas
//! - `AgentCards`: one row per investor of the latest snapshot
//! - `TransactionLog`: trade rows or the empty-state message

mod agent_cards;
mod form_panel;
mod price_chart;
mod stats_panel;
mod transaction_log;

pub use agent_cards::AgentCards;
pub use form_panel::FormPanel;
pub use price_chart::PriceChart;
pub use stats_panel::StatsPanel;
pub use transaction_log::TransactionLog;

/// Flatten a buffer into newline-separated rows of text.
#[cfg(test)]
pub(crate) fn buffer_text(buf: &ratatui::buffer::Buffer) -> String {
    let width = buf.area.width as usize;
    buf.content()
        .chunks(width.max(1))
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}
