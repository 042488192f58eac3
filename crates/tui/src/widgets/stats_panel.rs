//! Stats panel widget - displays the summary statistics of a run.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};
use view::{StatisticsView, Tone};

/// Summary statistics panel widget.
pub struct StatsPanel<'a> {
    view: Option<&'a StatisticsView>,
}

impl<'a> StatsPanel<'a> {
    /// Create a new stats panel widget.
    pub fn new(view: Option<&'a StatisticsView>) -> Self {
        Self { view }
    }
}

fn tone_style(tone: Option<Tone>) -> Style {
    match tone {
        Some(Tone::Positive) => Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD),
        Some(Tone::Negative) => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        None => Style::default().fg(Color::White),
    }
}

impl Widget for StatsPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let lines: Vec<Line> = match self.view {
            Some(view) => view
                .fields()
                .into_iter()
                .map(|field| {
                    Line::from(vec![
                        Span::styled(
                            format!("{:<14}", format!("{}:", field.label)),
                            Style::default().fg(Color::Gray),
                        ),
                        Span::styled(field.value, tone_style(field.tone)),
                    ])
                })
                .collect(),
            None => vec![Line::from(Span::styled(
                "—",
                Style::default().fg(Color::DarkGray),
            ))],
        };

        let para = Paragraph::new(lines).block(
            Block::default()
                .title("Statistics")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::White)),
        );

        para.render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widgets::buffer_text;
    use types::Statistics;

    #[test]
    fn test_stats_panel_empty() {
        let area = Rect::new(0, 0, 30, 10);
        let mut buf = Buffer::empty(area);
        StatsPanel::new(None).render(area, &mut buf);
        assert!(buffer_text(&buf).contains("Statistics"));
    }

    #[test]
    fn test_stats_panel_with_data() {
        let view = StatisticsView::from_statistics(&Statistics {
            initial_price: 100.0,
            final_price: 110.5,
            price_change: 10.5,
            price_change_percent: 10.5,
            max_price: 112.0,
            min_price: 98.0,
            total_transactions: 3,
            buy_transactions: 2,
            sell_transactions: 1,
        });

        let area = Rect::new(0, 0, 40, 12);
        let mut buf = Buffer::empty(area);
        StatsPanel::new(Some(&view)).render(area, &mut buf);

        let text = buffer_text(&buf);
        assert!(text.contains("$110.50"));
        assert!(text.contains("10.50%"));
        assert!(text.contains("2 / 1"));
    }
}
