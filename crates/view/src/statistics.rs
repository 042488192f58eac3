//! Summary statistics projection.

use types::{Statistics, format_money, format_percent};

/// Sign-dependent styling class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Positive,
    Negative,
}

impl Tone {
    /// Zero counts as positive.
    pub fn of(value: f64) -> Self {
        if value >= 0.0 {
            Tone::Positive
        } else {
            Tone::Negative
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            Tone::Positive => "positive",
            Tone::Negative => "negative",
        }
    }
}

/// A single labeled statistic.
#[derive(Debug, Clone, PartialEq)]
pub struct StatField {
    pub label: &'static str,
    pub value: String,
    /// Only sign-sensitive fields carry a tone.
    pub tone: Option<Tone>,
}

/// Formatted summary statistics, ready to display.
#[derive(Debug, Clone, PartialEq)]
pub struct StatisticsView {
    pub initial_price: String,
    pub final_price: String,
    pub price_change: String,
    pub price_change_tone: Tone,
    pub price_change_percent: String,
    pub price_change_percent_tone: Tone,
    pub max_price: String,
    pub min_price: String,
    pub total_transactions: String,
    pub buys_sells: String,
}

impl StatisticsView {
    pub fn from_statistics(stats: &Statistics) -> Self {
        Self {
            initial_price: format_money(stats.initial_price),
            final_price: format_money(stats.final_price),
            price_change: format_money(stats.price_change),
            price_change_tone: Tone::of(stats.price_change),
            price_change_percent: format_percent(stats.price_change_percent),
            price_change_percent_tone: Tone::of(stats.price_change_percent),
            max_price: format_money(stats.max_price),
            min_price: format_money(stats.min_price),
            total_transactions: stats.total_transactions.to_string(),
            buys_sells: format!("{} / {}", stats.buy_transactions, stats.sell_transactions),
        }
    }

    /// Fields in display order.
    pub fn fields(&self) -> Vec<StatField> {
        let plain = |label, value: &String| StatField {
            label,
            value: value.clone(),
            tone: None,
        };
        vec![
            plain("Initial Price", &self.initial_price),
            plain("Final Price", &self.final_price),
            StatField {
                label: "Change",
                value: self.price_change.clone(),
                tone: Some(self.price_change_tone),
            },
            StatField {
                label: "Change %",
                value: self.price_change_percent.clone(),
                tone: Some(self.price_change_percent_tone),
            },
            plain("Max Price", &self.max_price),
            plain("Min Price", &self.min_price),
            plain("Transactions", &self.total_transactions),
            plain("Buys / Sells", &self.buys_sells),
        ]
    }
}
