//! Chart drawing surface.
//!
//! [`ChartCanvas`] is the charting primitive seen from the renderers: build a
//! chart from a spec, or dispose one. The terminal implementation keeps the
//! live charts and the price chart widget draws the active one.

use view::ChartSpec;

/// Opaque handle to a chart built on a canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChartHandle(u64);

/// Create/destroy capability for charts.
pub trait ChartCanvas {
    /// Build a chart from `spec` and return its handle.
    fn create(&mut self, spec: ChartSpec) -> ChartHandle;

    /// Dispose the chart behind `handle`. Unknown handles are ignored.
    fn destroy(&mut self, handle: ChartHandle);
}

/// Canvas backing the terminal price chart.
#[derive(Debug, Default)]
pub struct TerminalCanvas {
    next_id: u64,
    charts: Vec<(ChartHandle, ChartSpec)>,
}

impl TerminalCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of charts currently alive on this canvas.
    pub fn live_count(&self) -> usize {
        self.charts.len()
    }

    /// The most recently created live chart.
    pub fn active(&self) -> Option<&ChartSpec> {
        self.charts.last().map(|(_, spec)| spec)
    }
}

impl ChartCanvas for TerminalCanvas {
    fn create(&mut self, spec: ChartSpec) -> ChartHandle {
        self.next_id += 1;
        let handle = ChartHandle(self.next_id);
        self.charts.push((handle, spec));
        handle
    }

    fn destroy(&mut self, handle: ChartHandle) {
        self.charts.retain(|(h, _)| *h != handle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_and_destroy() {
        let mut canvas = TerminalCanvas::new();
        let a = canvas.create(ChartSpec::from_history(&[1.0]));
        let b = canvas.create(ChartSpec::from_history(&[2.0, 3.0]));
        assert_ne!(a, b);
        assert_eq!(canvas.live_count(), 2);
        assert_eq!(canvas.active().map(|s| s.len()), Some(2));

        canvas.destroy(b);
        assert_eq!(canvas.live_count(), 1);
        assert_eq!(canvas.active().map(|s| s.len()), Some(1));

        canvas.destroy(b);
        assert_eq!(canvas.live_count(), 1);
    }
}
