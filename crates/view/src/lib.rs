//! View models for simulation results.
//!
//! Every projection here is a pure function from the wire types in `types`
//! to plain display records. Nothing in this crate knows about terminals or
//! widgets, so the projection rules can be tested without a rendering
//! environment.
//!
//! - [`StatisticsView`]: labeled, sign-toned summary fields
//! - [`ChartSpec`]: a line series with index-based labels and fixed config
//! - [`AgentPanelView`]: one card per investor in the latest snapshot
//! - [`TransactionLogView`]: trade rows in given order, or the empty state

mod agents;
mod chart;
mod statistics;
mod transactions;

pub use agents::{AgentCard, AgentPanelView, Personality};
pub use chart::{AxisMode, ChartConfig, ChartSpec, HoverMode, ValueFormat};
pub use statistics::{StatField, StatisticsView, Tone};
pub use transactions::{EMPTY_TRANSACTIONS_MESSAGE, TransactionLogView, TransactionRow};
