//! Agent panel renderer - investor cards from the latest snapshot.

use types::AgentSnapshot;
use view::AgentPanelView;

/// Writes one card per investor from the latest snapshot.
#[derive(Debug, Default)]
pub struct AgentPanelRenderer;

impl AgentPanelRenderer {
    /// Prior cards are always cleared; no snapshots leaves the panel empty.
    pub fn render(&self, target: &mut AgentPanelView, snapshots: &[AgentSnapshot]) {
        *target = AgentPanelView::from_snapshots(snapshots);
    }
}
