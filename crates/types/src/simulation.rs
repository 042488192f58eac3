//! Request and response types for `POST /api/simulate`.
//!
//! One response carries everything the dashboard shows: summary statistics,
//! the per-cycle price series, per-cycle agent snapshots and the trade log.
//! Field names follow the service's JSON exactly.

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Agent identifier as reported by the service (e.g. `"InversorRacional_A1"`).
pub type AgentId = String;

// =============================================================================
// Request
// =============================================================================

/// Body of a simulation run request.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulationRequest {
    /// Number of market cycles to simulate.
    pub cycles: u32,
    /// Starting price of the asset.
    pub initial_price: f64,
}

impl SimulationRequest {
    pub fn new(cycles: u32, initial_price: f64) -> Self {
        Self {
            cycles,
            initial_price,
        }
    }
}

impl Default for SimulationRequest {
    /// The service's own defaults when a field is omitted.
    fn default() -> Self {
        Self::new(8, 100.0)
    }
}

// =============================================================================
// Response
// =============================================================================

/// Scalar summary of a run.
///
/// `buy_transactions + sell_transactions == total_transactions` is assumed
/// by the service contract and not checked here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Statistics {
    pub initial_price: f64,
    pub final_price: f64,
    pub price_change: f64,
    pub price_change_percent: f64,
    pub max_price: f64,
    pub min_price: f64,
    pub total_transactions: u64,
    pub buy_transactions: u64,
    pub sell_transactions: u64,
}

/// One investor's holdings at a given cycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvestorState {
    /// Propensity to trade, in `[0, 1]`.
    pub risk_tolerance: f64,
    pub fiat_balance: f64,
    pub crypto_balance: f64,
}

/// State of every investor at one simulation cycle.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AgentSnapshot {
    /// Cycle this snapshot was captured at (0 = before the first cycle).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cycle: Option<u64>,
    /// Market price at capture time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub market_price: Option<f64>,
    /// Investors keyed by id, in the order the service listed them.
    pub investors: IndexMap<AgentId, InvestorState>,
}

/// Direction of a trade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TradeAction {
    Buy,
    Sell,
}

impl TradeAction {
    /// Wire name, also used as the row category.
    pub fn as_str(self) -> &'static str {
        match self {
            TradeAction::Buy => "buy",
            TradeAction::Sell => "sell",
        }
    }
}

impl fmt::Display for TradeAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A confirmed trade.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub action: TradeAction,
    /// Investor that placed the order.
    pub receiver: AgentId,
    /// Execution price.
    pub price: f64,
    /// Cycle the trade happened in.
    pub cycle: u64,
    /// Market agent that confirmed the trade.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sender: Option<AgentId>,
}

/// Full result of one simulation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationResponse {
    pub statistics: Statistics,
    /// One price per cycle; index 0 is the initial price.
    pub price_history: Vec<f64>,
    /// One snapshot per cycle, oldest first.
    pub agent_states: Vec<AgentSnapshot>,
    /// Trades in the order they occurred.
    pub transactions: Vec<Transaction>,
}

impl SimulationResponse {
    /// The most recent agent snapshot, if any were captured.
    pub fn latest_snapshot(&self) -> Option<&AgentSnapshot> {
        self.agent_states.last()
    }
}
