//! Client for the remote simulation service.
//!
//! The dashboard only depends on the [`SimulationService`] trait; the
//! reqwest-backed [`RestClient`] is the production implementation and tests
//! substitute their own.

mod error;
mod rest;

pub use error::ClientError;
pub use rest::{RestClient, SIMULATE_PATH};

use async_trait::async_trait;
use types::{SimulationRequest, SimulationResponse};

/// Capability to run one simulation remotely.
#[async_trait]
pub trait SimulationService: Send + Sync {
    /// Run a simulation and return the full result.
    ///
    /// Any transport failure, non-success status or malformed body is an error.
    async fn simulate(
        &self,
        request: SimulationRequest,
    ) -> Result<SimulationResponse, ClientError>;
}
