//! Plain-text rendering of a [`Dashboard`], used by headless runs.

use std::fmt::{self, Write};

use tracing::warn;
use types::format_money;
use view::{EMPTY_TRANSACTIONS_MESSAGE, TransactionLogView};

use crate::dashboard::Dashboard;

/// Render the visible parts of `dashboard` as plain text.
///
/// Hidden results render as nothing but the alert, if any.
pub fn render_report(dashboard: &Dashboard) -> String {
    let mut out = String::new();
    if let Err(e) = write_report(&mut out, dashboard) {
        warn!(error = %e, "report truncated");
    }
    out
}

fn write_report(out: &mut impl Write, dashboard: &Dashboard) -> fmt::Result {
    if let Some(alert) = &dashboard.alert {
        writeln!(out, "ALERT: {}", alert)?;
    }
    if !dashboard.results_visible {
        return Ok(());
    }

    // ===================================================================
    // Statistics
    // ===================================================================
    writeln!(out, "== Statistics ==")?;
    if let Some(stats) = &dashboard.statistics {
        for field in stats.fields() {
            writeln!(out, "{:<14} {}", format!("{}:", field.label), field.value)?;
        }
    }

    // ===================================================================
    // Price chart
    // ===================================================================
    writeln!(out, "\n== Price History ==")?;
    match dashboard.canvas.active() {
        Some(spec) if !spec.is_empty() => {
            let lo = spec.points.iter().map(|p| p.1).fold(f64::INFINITY, f64::min);
            let hi = spec
                .points
                .iter()
                .map(|p| p.1)
                .fold(f64::NEG_INFINITY, f64::max);
            let first = spec.labels.first().map(String::as_str).unwrap_or_default();
            let last = spec.labels.last().map(String::as_str).unwrap_or_default();
            writeln!(
                out,
                "{}: {} points ({} to {}), low {}, high {}",
                spec.config.series_label,
                spec.len(),
                first,
                last,
                format_money(lo),
                format_money(hi)
            )?;
        }
        _ => {
            writeln!(out, "No price data")?;
        }
    }

    // ===================================================================
    // Agents
    // ===================================================================
    writeln!(out, "\n== Agents ==")?;
    if let Some(caption) = dashboard.agents.caption() {
        writeln!(out, "{}", caption)?;
    }
    for card in &dashboard.agents.cards {
        writeln!(
            out,
            "{:<16} {:<10} risk {:>4}  fiat {:>12}  crypto {:>12}",
            card.id,
            card.personality.label(),
            card.risk_tolerance,
            card.fiat_balance,
            card.crypto_balance
        )?;
    }

    // ===================================================================
    // Transactions
    // ===================================================================
    writeln!(out, "\n== Transactions ==")?;
    match &dashboard.transactions {
        Some(TransactionLogView::Rows(rows)) => {
            for row in rows {
                write!(
                    out,
                    "{} {:<4} {:<16} {:<10} {}",
                    row.indicator, row.label, row.receiver, row.cycle, row.price
                )?;
                if let Some(sender) = &row.sender {
                    write!(out, "  via {}", sender)?;
                }
                writeln!(out)?;
            }
        }
        Some(TransactionLogView::Empty) | None => {
            writeln!(out, "{}", EMPTY_TRANSACTIONS_MESSAGE)?;
        }
    }

    Ok(())
}
