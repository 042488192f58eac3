//! Core types for the crypto market simulation viewer.
//!
//! This crate holds the wire contract with the simulation service and the
//! display formatting shared by every view:
//! - [`SimulationRequest`] / [`SimulationResponse`]: the POST body and its reply
//! - [`money`]: currency and percentage formatting with decimal rounding

pub mod money;
mod simulation;

pub use money::{format_fixed, format_money, format_percent, format_whole_percent};
pub use simulation::{
    AgentId, AgentSnapshot, InvestorState, SimulationRequest, SimulationResponse, Statistics,
    TradeAction, Transaction,
};
