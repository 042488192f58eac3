//! The four result renderers.
//!
//! Each renderer projects one slice of a simulation response into its own
//! render target and fully replaces whatever was there. None of them depends
//! on another's output, so the controller may call them in any order.

mod agents;
mod chart;
mod statistics;
mod transactions;

pub use agents::AgentPanelRenderer;
pub use chart::ChartRenderer;
pub use statistics::StatisticsRenderer;
pub use transactions::TransactionLogRenderer;
