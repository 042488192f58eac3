//! Viewer configuration.
//!
//! Defaults match the simulation service's own request defaults.

use std::path::PathBuf;
use std::time::Duration;

use tui::{MAX_FRAME_RATE, SimulationForm};
use types::SimulationRequest;

/// Everything the binary needs to start.
#[derive(Debug, Clone)]
pub struct ViewerConfig {
    // ─────────────────────────────────────────────────────────────────────────
    // Service
    // ─────────────────────────────────────────────────────────────────────────
    /// Base URL of the simulation service.
    pub service_url: String,
    /// Request timeout (`None` = transport default).
    pub timeout: Option<Duration>,

    // ─────────────────────────────────────────────────────────────────────────
    // Initial Form Values
    // ─────────────────────────────────────────────────────────────────────────
    pub cycles: u32,
    pub initial_price: f64,

    // ─────────────────────────────────────────────────────────────────────────
    // Presentation
    // ─────────────────────────────────────────────────────────────────────────
    /// Run once and print a report instead of opening the TUI.
    pub headless: bool,
    /// TUI frame rate (frames per second).
    pub frame_rate: u64,
    /// Where logs go while the TUI owns the terminal.
    pub log_file: PathBuf,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        let request = SimulationRequest::default();
        Self {
            service_url: "http://127.0.0.1:5000".to_string(),
            timeout: None,
            cycles: request.cycles,
            initial_price: request.initial_price,
            headless: false,
            frame_rate: 30,
            log_file: PathBuf::from("crypto-sim-viewer.log"),
        }
    }
}

impl ViewerConfig {
    /// Create a new config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn service_url(mut self, url: impl Into<String>) -> Self {
        self.service_url = url.into();
        self
    }

    pub fn timeout_secs(mut self, secs: u64) -> Self {
        self.timeout = Some(Duration::from_secs(secs));
        self
    }

    pub fn cycles(mut self, cycles: u32) -> Self {
        self.cycles = cycles;
        self
    }

    pub fn initial_price(mut self, price: f64) -> Self {
        self.initial_price = price;
        self
    }

    pub fn headless(mut self, headless: bool) -> Self {
        self.headless = headless;
        self
    }

    /// Set the TUI frame rate; clamped to `1..=MAX_FRAME_RATE`.
    pub fn frame_rate(mut self, fps: u64) -> Self {
        self.frame_rate = fps.clamp(1, MAX_FRAME_RATE);
        self
    }

    pub fn log_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.log_file = path.into();
        self
    }

    /// Form pre-filled with the configured inputs.
    pub fn form(&self) -> SimulationForm {
        SimulationForm::new(self.cycles.to_string(), self.initial_price.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_service_defaults() {
        let config = ViewerConfig::default();
        assert_eq!(config.cycles, 8);
        assert_eq!(config.initial_price, 100.0);
        assert!(config.timeout.is_none());
        assert!(!config.headless);
    }

    #[test]
    fn test_builder_setters() {
        let config = ViewerConfig::new()
            .service_url("http://sim:8080")
            .cycles(20)
            .initial_price(42.5)
            .timeout_secs(5)
            .frame_rate(0);
        assert_eq!(config.service_url, "http://sim:8080");
        assert_eq!(config.timeout, Some(Duration::from_secs(5)));
        assert_eq!(config.frame_rate, 1);

        assert_eq!(ViewerConfig::new().frame_rate(5000).frame_rate, MAX_FRAME_RATE);

        let form = config.form();
        assert_eq!(form.cycles, "20");
        assert_eq!(form.initial_price, "42.5");
    }

    #[test]
    fn test_form_round_trips_through_parser() {
        let config = ViewerConfig::default();
        let form = config.form();
        let request = tui::parse_request(&form.cycles, &form.initial_price).unwrap();
        assert_eq!(request, SimulationRequest::default());
    }
}
