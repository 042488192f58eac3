//! Agent card projection.
//!
//! Only the final snapshot is shown; agent trajectories over time are not
//! visualized.

use std::fmt;

use types::{AgentSnapshot, InvestorState, format_money, format_whole_percent};

/// Behavioral category derived from risk tolerance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Personality {
    Impulsive,
    Medium,
    Rational,
}

impl Personality {
    /// Bands are half-open: `(0.4, 1]` Impulsive, `(0.2, 0.4]` Medium,
    /// everything else Rational.
    pub fn from_risk_tolerance(risk_tolerance: f64) -> Self {
        if risk_tolerance > 0.4 {
            Personality::Impulsive
        } else if risk_tolerance > 0.2 {
            Personality::Medium
        } else {
            Personality::Rational
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Personality::Impulsive => "Impulsive",
            Personality::Medium => "Medium",
            Personality::Rational => "Rational",
        }
    }
}

impl fmt::Display for Personality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One investor, formatted for display.
#[derive(Debug, Clone, PartialEq)]
pub struct AgentCard {
    pub id: String,
    pub personality: Personality,
    /// Whole percentage, e.g. `"50%"`.
    pub risk_tolerance: String,
    pub fiat_balance: String,
    /// Formatted as currency, same as the fiat balance.
    pub crypto_balance: String,
}

impl AgentCard {
    pub fn new(id: &str, state: &InvestorState) -> Self {
        Self {
            id: id.to_string(),
            personality: Personality::from_risk_tolerance(state.risk_tolerance),
            risk_tolerance: format_whole_percent(state.risk_tolerance),
            fiat_balance: format_money(state.fiat_balance),
            crypto_balance: format_money(state.crypto_balance),
        }
    }
}

/// Contents of the agent panel.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AgentPanelView {
    /// Cycle of the rendered snapshot, when the service reported it.
    pub cycle: Option<u64>,
    /// Market price at that cycle, formatted.
    pub market_price: Option<String>,
    pub cards: Vec<AgentCard>,
}

impl AgentPanelView {
    /// Project the last snapshot into cards. No snapshots, no cards.
    pub fn from_snapshots(snapshots: &[AgentSnapshot]) -> Self {
        let Some(last) = snapshots.last() else {
            return Self::default();
        };

        Self {
            cycle: last.cycle,
            market_price: last.market_price.map(format_money),
            cards: last
                .investors
                .iter()
                .map(|(id, state)| AgentCard::new(id, state))
                .collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// `"Cycle 8 · Market $104.20"`, or whichever part is known.
    pub fn caption(&self) -> Option<String> {
        match (self.cycle, &self.market_price) {
            (Some(c), Some(p)) => Some(format!("Cycle {} · Market {}", c, p)),
            (Some(c), None) => Some(format!("Cycle {}", c)),
            (None, Some(p)) => Some(format!("Market {}", p)),
            (None, None) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use indexmap::IndexMap;

    use super::*;

    fn investor(risk_tolerance: f64, fiat_balance: f64, crypto_balance: f64) -> InvestorState {
        InvestorState {
            risk_tolerance,
            fiat_balance,
            crypto_balance,
        }
    }

    fn snapshot(entries: &[(&str, InvestorState)]) -> AgentSnapshot {
        AgentSnapshot {
            cycle: None,
            market_price: None,
            investors: entries
                .iter()
                .map(|(id, s)| (id.to_string(), s.clone()))
                .collect::<IndexMap<_, _>>(),
        }
    }

    #[test]
    fn test_personality_bands() {
        assert_eq!(Personality::from_risk_tolerance(1.0), Personality::Impulsive);
        assert_eq!(Personality::from_risk_tolerance(0.41), Personality::Impulsive);
        assert_eq!(Personality::from_risk_tolerance(0.4), Personality::Medium);
        assert_eq!(Personality::from_risk_tolerance(0.3), Personality::Medium);
        assert_eq!(Personality::from_risk_tolerance(0.21), Personality::Medium);
        assert_eq!(Personality::from_risk_tolerance(0.2), Personality::Rational);
        assert_eq!(Personality::from_risk_tolerance(0.1), Personality::Rational);
        assert_eq!(Personality::from_risk_tolerance(0.0), Personality::Rational);
    }

    #[test]
    fn test_empty_snapshots_yield_no_cards() {
        let view = AgentPanelView::from_snapshots(&[]);
        assert!(view.is_empty());
        assert!(view.caption().is_none());
    }

    #[test]
    fn test_single_agent_card() {
        let snapshots = vec![snapshot(&[("agent_1", investor(0.5, 1000.0, 2.345))])];
        let view = AgentPanelView::from_snapshots(&snapshots);
        assert_eq!(view.cards.len(), 1);

        let card = &view.cards[0];
        assert_eq!(card.id, "agent_1");
        assert_eq!(card.personality.label(), "Impulsive");
        assert_eq!(card.risk_tolerance, "50%");
        assert_eq!(card.fiat_balance, "$1000.00");
        assert_eq!(card.crypto_balance, "$2.35");
    }

    #[test]
    fn test_only_last_snapshot_is_used() {
        let snapshots = vec![
            snapshot(&[("old", investor(0.1, 1.0, 1.0))]),
            snapshot(&[
                ("b_second", investor(0.3, 2.0, 2.0)),
                ("a_first", investor(0.1, 3.0, 3.0)),
            ]),
        ];
        let view = AgentPanelView::from_snapshots(&snapshots);
        let ids: Vec<&str> = view.cards.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["b_second", "a_first"]);
    }

    #[test]
    fn test_caption() {
        let mut snap = snapshot(&[]);
        snap.cycle = Some(8);
        snap.market_price = Some(104.2);
        let view = AgentPanelView::from_snapshots(&[snap]);
        assert_eq!(view.caption().as_deref(), Some("Cycle 8 · Market $104.20"));
    }
}
