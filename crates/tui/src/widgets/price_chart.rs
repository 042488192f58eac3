//! Price chart widget - draws a [`ChartSpec`] as a line graph.
//!
//! The x axis shows the first, middle and last cycle labels; the y axis uses
//! the chart's currency tick format at the low, mid and high bounds.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Style},
    symbols::Marker,
    text::Line,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Paragraph, Widget},
};
use view::ChartSpec;

/// Price chart widget.
pub struct PriceChart<'a> {
    spec: Option<&'a ChartSpec>,
    title: &'a str,
}

impl<'a> PriceChart<'a> {
    /// Create a new price chart widget for the active chart, if any.
    pub fn new(spec: Option<&'a ChartSpec>) -> Self {
        Self {
            spec,
            title: "Price History",
        }
    }

    /// Set the chart title.
    pub fn title(mut self, title: &'a str) -> Self {
        self.title = title;
        self
    }

    /// Cells the line is plotted in when drawn into `area`.
    ///
    /// Mirrors the layout of ratatui's `Chart`: inside the block, the y tick
    /// labels and the y axis take columns on the left, the x labels and the x
    /// axis take the two bottom rows. `None` when nothing is plotted.
    pub fn plot_area(&self, area: Rect) -> Option<Rect> {
        let spec = self.spec?;
        let (y_min, y_max) = spec.y_bounds()?;
        let inner = Block::default().borders(Borders::ALL).inner(area);
        if inner.width == 0 || inner.height < 3 {
            return None;
        }

        let y_label_width = y_labels(spec, y_min, y_max)
            .iter()
            .map(|l| l.width() as u16)
            .max()
            .unwrap_or(0);
        // The first x label is left aligned and may hang left of the y axis.
        let x_label_overhang = spec
            .labels
            .first()
            .map(|l| Line::from(l.as_str()).width() as u16)
            .unwrap_or(0)
            .saturating_sub(1);
        let left = y_label_width.max(x_label_overhang).min(inner.width / 3);

        let mut x = inner.x + left;
        if x + 1 < inner.right() {
            x += 1; // y axis
        }
        Some(Rect::new(
            x,
            inner.y,
            inner.right().saturating_sub(x),
            inner.height - 2,
        ))
    }
}

/// First, middle and last cycle labels; only first and last for short series.
fn x_labels(spec: &ChartSpec) -> Vec<Line<'static>> {
    match spec.labels.as_slice() {
        [] => vec![],
        [only] => vec![Line::from(only.clone())],
        [first, last] => vec![Line::from(first.clone()), Line::from(last.clone())],
        [first, .., last] => vec![
            Line::from(first.clone()),
            Line::from(spec.labels[spec.labels.len() / 2].clone()),
            Line::from(last.clone()),
        ],
    }
}

fn y_labels(spec: &ChartSpec, y_min: f64, y_max: f64) -> Vec<Line<'static>> {
    vec![
        Line::from(spec.y_tick(y_min)),
        Line::from(spec.y_tick((y_min + y_max) / 2.0)),
        Line::from(spec.y_tick(y_max)),
    ]
}

impl Widget for PriceChart<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let Some(spec) = self.spec else {
            Block::default()
                .title(self.title)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray))
                .render(area, buf);
            return;
        };

        let Some((y_min, y_max)) = spec.y_bounds() else {
            // Empty series: a valid chart with nothing to plot
            Paragraph::new("No price data")
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::DarkGray))
                .block(
                    Block::default()
                        .title(self.title)
                        .borders(Borders::ALL)
                        .border_style(Style::default().fg(Color::White)),
                )
                .render(area, buf);
            return;
        };

        let x_labels = x_labels(spec);
        let y_labels = y_labels(spec, y_min, y_max);

        let dataset = Dataset::default()
            .name(spec.config.series_label)
            .marker(Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::Cyan))
            .data(&spec.points);

        let chart = Chart::new(vec![dataset])
            .block(
                Block::default()
                    .title(self.title)
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::White)),
            )
            .x_axis(
                Axis::default()
                    .title(spec.config.x_axis_title)
                    .style(Style::default().fg(Color::Gray))
                    .bounds([0.0, spec.x_max()])
                    .labels(x_labels),
            )
            .y_axis(
                Axis::default()
                    .title(spec.config.y_axis_title)
                    .style(Style::default().fg(Color::Gray))
                    .bounds([y_min, y_max])
                    .labels(y_labels),
            );

        chart.render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widgets::buffer_text;

    #[test]
    fn test_price_chart_no_chart() {
        let area = Rect::new(0, 0, 40, 10);
        let mut buf = Buffer::empty(area);
        PriceChart::new(None).render(area, &mut buf);
        assert!(buffer_text(&buf).contains("Price History"));
    }

    #[test]
    fn test_price_chart_empty_series() {
        let spec = ChartSpec::from_history(&[]);
        let area = Rect::new(0, 0, 40, 10);
        let mut buf = Buffer::empty(area);
        PriceChart::new(Some(&spec)).render(area, &mut buf);
        assert!(buffer_text(&buf).contains("No price data"));
    }

    #[test]
    fn test_price_chart_with_data() {
        let spec = ChartSpec::from_history(&[100.0, 101.0, 99.5, 102.0, 100.5]);
        let area = Rect::new(0, 0, 80, 20);
        let mut buf = Buffer::empty(area);
        PriceChart::new(Some(&spec))
            .title("Test Price")
            .render(area, &mut buf);

        let text = buffer_text(&buf);
        assert!(text.contains("Test Price"));
        assert!(text.contains("Cycle"));
    }

    #[test]
    fn test_two_point_series_has_no_repeated_label() {
        let spec = ChartSpec::from_history(&[100.0, 101.0]);
        let labels: Vec<String> = x_labels(&spec).iter().map(|l| l.to_string()).collect();
        assert_eq!(labels, vec!["Cycle 0", "Cycle 1"]);

        let spec = ChartSpec::from_history(&[100.0, 101.0, 102.0, 103.0]);
        let labels: Vec<String> = x_labels(&spec).iter().map(|l| l.to_string()).collect();
        assert_eq!(labels, vec!["Cycle 0", "Cycle 2", "Cycle 3"]);
    }

    #[test]
    fn test_plot_area_excludes_axes_and_labels() {
        let spec = ChartSpec::from_history(&[100.0; 11]);
        let area = Rect::new(0, 0, 80, 20);
        // "$101.00" is the widest y tick: 7 columns, then the axis column.
        let plot = PriceChart::new(Some(&spec)).plot_area(area).unwrap();
        assert_eq!(plot, Rect::new(9, 1, 70, 16));

        assert!(PriceChart::new(None).plot_area(area).is_none());
        let empty = ChartSpec::from_history(&[]);
        assert!(PriceChart::new(Some(&empty)).plot_area(area).is_none());
    }

    #[test]
    fn test_price_chart_single_point() {
        let spec = ChartSpec::from_history(&[100.0]);
        let area = Rect::new(0, 0, 60, 15);
        let mut buf = Buffer::empty(area);
        PriceChart::new(Some(&spec)).render(area, &mut buf);
        // Should render without panic
    }
}
