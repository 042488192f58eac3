//! TUI crate: terminal dashboard for the crypto market simulator.
//!
//! This crate owns everything between a simulation response and the screen:
//! - [`Dashboard`]: the render targets (form, statistics, chart canvas, agents, transactions)
//! - the four renderers that project a response into those targets
//! - [`SimulationController`]: submission, busy state and failure handling
//! - ratatui widgets and the [`TuiApp`] event loop
//! - [`render_report`] for headless runs
//!
//! # Architecture
//!
//! The request runs on a tokio runtime; the outcome comes back to the UI
//! thread over a channel so drawing never waits on the network:
//!
//! ```text
//! ┌────────────────┐   Enter    ┌────────────────┐   POST /api/simulate
//! │    TuiApp      │ ─────────► │  tokio task    │ ─────────────────────►
//! │  (UI thread)   │ ◄───────── │                │
//! └────────────────┘  outcome   └────────────────┘
//!                    (channel)
//! ```

mod app;
pub mod canvas;
mod controller;
mod dashboard;
pub mod render;
mod report;
mod widgets;

pub use app::{MAX_FRAME_RATE, TuiApp};
pub use canvas::{ChartCanvas, ChartHandle, TerminalCanvas};
pub use controller::{FAILURE_ALERT, SimulationController, SubmitError, ViewState, parse_request};
pub use dashboard::{Dashboard, FormField, SimulationForm};
pub use report::render_report;
pub use widgets::{AgentCards, FormPanel, PriceChart, StatsPanel, TransactionLog};
