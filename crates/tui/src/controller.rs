//! Simulation controller: submission, busy state and result fan-out.
//!
//! ```text
//!          submit               success
//!   Idle ─────────► Running ─────────────► Idle
//!    ▲                 │
//!    │ submit          │ failure
//!    └──── Failed ◄────┘
//! ```
//!
//! `Failed` only records that the last run failed; the next submission goes
//! straight back to `Running`.

use client::{ClientError, SimulationService};
use thiserror::Error;
use tracing::{error, info, warn};
use types::{SimulationRequest, SimulationResponse};

use crate::dashboard::Dashboard;
use crate::render::{
    AgentPanelRenderer, ChartRenderer, StatisticsRenderer, TransactionLogRenderer,
};

/// Alert shown when a run fails for any transport or service reason.
pub const FAILURE_ALERT: &str = "Simulation failed. Please try again.";

/// Controller lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewState {
    #[default]
    Idle,
    Running,
    Failed,
}

/// Why a submission was not sent.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("A simulation is already running.")]
    Busy,

    #[error("Cycles must be a positive whole number (got {0:?}).")]
    InvalidCycles(String),

    #[error("Initial price must be a positive number (got {0:?}).")]
    InvalidInitialPrice(String),
}

/// Parse and validate the two form inputs.
pub fn parse_request(cycles: &str, initial_price: &str) -> Result<SimulationRequest, SubmitError> {
    let cycles_value = cycles
        .trim()
        .parse::<u32>()
        .ok()
        .filter(|&c| c > 0)
        .ok_or_else(|| SubmitError::InvalidCycles(cycles.to_string()))?;

    let price_value = initial_price
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|p| p.is_finite() && *p > 0.0)
        .ok_or_else(|| SubmitError::InvalidInitialPrice(initial_price.to_string()))?;

    Ok(SimulationRequest::new(cycles_value, price_value))
}

/// Drives one dashboard through simulation runs.
#[derive(Debug, Default)]
pub struct SimulationController {
    state: ViewState,
    statistics: StatisticsRenderer,
    chart: ChartRenderer,
    agents: AgentPanelRenderer,
    transactions: TransactionLogRenderer,
}

impl SimulationController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> ViewState {
        self.state
    }

    /// Start a run from the dashboard's form inputs.
    ///
    /// On success the busy indicator is shown, results are hidden and the
    /// request to send is returned. Invalid input raises an alert and leaves
    /// the state untouched; a submission while running is refused.
    pub fn submit(&mut self, view: &mut Dashboard) -> Result<SimulationRequest, SubmitError> {
        if self.state == ViewState::Running {
            warn!("submission ignored: simulation already running");
            return Err(SubmitError::Busy);
        }

        let request = match parse_request(&view.form.cycles, &view.form.initial_price) {
            Ok(request) => request,
            Err(e) => {
                warn!(error = %e, "submission rejected");
                view.alert = Some(e.to_string());
                return Err(e);
            }
        };

        view.alert = None;
        view.loading = true;
        view.results_visible = false;
        self.state = ViewState::Running;
        info!(
            cycles = request.cycles,
            initial_price = request.initial_price,
            "simulation submitted"
        );
        Ok(request)
    }

    /// Apply the outcome of the request issued by [`submit`](Self::submit).
    ///
    /// Outcomes arriving when no run is in flight are dropped.
    pub fn complete(
        &mut self,
        outcome: Result<SimulationResponse, ClientError>,
        view: &mut Dashboard,
    ) {
        if self.state != ViewState::Running {
            warn!(state = ?self.state, "dropping outcome with no run in flight");
            return;
        }

        view.loading = false;
        match outcome {
            Ok(response) => {
                view.results_visible = true;
                self.render(&response, view);
                self.state = ViewState::Idle;
                info!(
                    points = response.price_history.len(),
                    snapshots = response.agent_states.len(),
                    transactions = response.transactions.len(),
                    "simulation rendered"
                );
            }
            Err(e) => {
                error!(error = %e, "simulation failed");
                view.results_visible = false;
                view.alert = Some(FAILURE_ALERT.to_string());
                self.state = ViewState::Failed;
            }
        }
    }

    /// Submit, await the service and apply the outcome.
    pub async fn run<S>(&mut self, service: &S, view: &mut Dashboard) -> Result<(), SubmitError>
    where
        S: SimulationService + ?Sized,
    {
        let request = self.submit(view)?;
        let outcome = service.simulate(request).await;
        self.complete(outcome, view);
        Ok(())
    }

    /// Project every slice of `response` into its render target.
    fn render(&mut self, response: &SimulationResponse, view: &mut Dashboard) {
        self.statistics
            .render(&mut view.statistics, &response.statistics);
        self.chart.render(&mut view.canvas, &response.price_history);
        self.agents.render(&mut view.agents, &response.agent_states);
        self.transactions
            .render(&mut view.transactions, &response.transactions);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_request_valid() {
        let request = parse_request("10", "100.0").unwrap();
        assert_eq!(request, SimulationRequest::new(10, 100.0));
        assert_eq!(
            parse_request(" 3 ", "0.5").unwrap(),
            SimulationRequest::new(3, 0.5)
        );
    }

    #[test]
    fn test_parse_request_rejects_bad_cycles() {
        for bad in ["", "0", "-1", "2.5", "abc"] {
            assert_eq!(
                parse_request(bad, "100"),
                Err(SubmitError::InvalidCycles(bad.to_string()))
            );
        }
    }

    #[test]
    fn test_parse_request_rejects_bad_price() {
        for bad in ["", "0", "-5", "NaN", "inf", "."] {
            assert_eq!(
                parse_request("5", bad),
                Err(SubmitError::InvalidInitialPrice(bad.to_string()))
            );
        }
    }

    #[test]
    fn test_submit_enters_running() {
        let mut controller = SimulationController::new();
        let mut view = Dashboard::default();
        view.results_visible = true;
        view.alert = Some("old".into());

        let request = controller.submit(&mut view).unwrap();
        assert_eq!(request, SimulationRequest::new(8, 100.0));
        assert_eq!(controller.state(), ViewState::Running);
        assert!(view.loading);
        assert!(!view.results_visible);
        assert!(view.alert.is_none());
    }

    #[test]
    fn test_second_submit_while_running_is_busy() {
        let mut controller = SimulationController::new();
        let mut view = Dashboard::default();
        controller.submit(&mut view).unwrap();
        assert_eq!(controller.submit(&mut view), Err(SubmitError::Busy));
        assert_eq!(controller.state(), ViewState::Running);
    }

    #[test]
    fn test_invalid_input_alerts_and_stays_idle() {
        let mut controller = SimulationController::new();
        let mut view = Dashboard::default();
        view.form.cycles = "zero".into();

        let err = controller.submit(&mut view).unwrap_err();
        assert!(matches!(err, SubmitError::InvalidCycles(_)));
        assert_eq!(controller.state(), ViewState::Idle);
        assert!(!view.loading);
        assert_eq!(view.alert.as_deref(), Some(err.to_string().as_str()));
    }

    #[test]
    fn test_failure_hides_results_and_alerts() {
        let mut controller = SimulationController::new();
        let mut view = Dashboard::default();
        controller.submit(&mut view).unwrap();

        let err = ClientError::Status {
            status: 502,
            body: "bad gateway".into(),
        };
        controller.complete(Err(err), &mut view);

        assert_eq!(controller.state(), ViewState::Failed);
        assert!(!view.loading);
        assert!(!view.results_visible);
        assert_eq!(view.alert.as_deref(), Some(FAILURE_ALERT));
        assert!(view.statistics.is_none());
        assert_eq!(view.canvas.live_count(), 0);

        // Failed is not sticky.
        controller.submit(&mut view).unwrap();
        assert_eq!(controller.state(), ViewState::Running);
    }

    #[test]
    fn test_stale_outcome_is_dropped() {
        let mut controller = SimulationController::new();
        let mut view = Dashboard::default();
        controller.complete(
            Err(ClientError::Status {
                status: 500,
                body: String::new(),
            }),
            &mut view,
        );
        assert_eq!(controller.state(), ViewState::Idle);
        assert!(view.alert.is_none());
    }
}
