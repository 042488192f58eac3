//! Statistics renderer.

use types::Statistics;
use view::StatisticsView;

/// Writes the summary statistics fields.
#[derive(Debug, Default)]
pub struct StatisticsRenderer;

impl StatisticsRenderer {
    pub fn render(&self, target: &mut Option<StatisticsView>, statistics: &Statistics) {
        *target = Some(StatisticsView::from_statistics(statistics));
    }
}
