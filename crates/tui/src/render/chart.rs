//! Chart renderer - owns the one live price chart on the canvas.

use tracing::debug;
use view::ChartSpec;

use crate::canvas::{ChartCanvas, ChartHandle};

/// Owns the single price chart instance.
///
/// Every render disposes the previous chart before building the new one, in
/// the same call, so at most one chart from this renderer is ever alive.
#[derive(Debug, Default)]
pub struct ChartRenderer {
    current: Option<ChartHandle>,
}

impl ChartRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild the chart from `price_history`. An empty series draws an empty chart.
    pub fn render<C: ChartCanvas + ?Sized>(&mut self, canvas: &mut C, price_history: &[f64]) {
        if let Some(previous) = self.current.take() {
            canvas.destroy(previous);
        }
        let handle = canvas.create(ChartSpec::from_history(price_history));
        debug!(points = price_history.len(), ?handle, "price chart rebuilt");
        self.current = Some(handle);
    }

    /// Handle of the chart currently owned, if any.
    pub fn current(&self) -> Option<ChartHandle> {
        self.current
    }
}
