//! Form panel widget - the two simulation inputs.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::dashboard::{FormField, SimulationForm};

/// Simulation inputs widget.
pub struct FormPanel<'a> {
    form: &'a SimulationForm,
    /// Inputs are locked while a run is in flight.
    editable: bool,
}

impl<'a> FormPanel<'a> {
    /// Create a new form panel; inputs start editable.
    pub fn new(form: &'a SimulationForm) -> Self {
        Self {
            form,
            editable: true,
        }
    }

    /// Lock or unlock the inputs.
    pub fn editable(mut self, editable: bool) -> Self {
        self.editable = editable;
        self
    }

    fn input(&self, field: FormField, value: &str) -> Span<'static> {
        let focused = self.editable && self.form.focus == field;
        let style = if focused {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else if self.editable {
            Style::default().fg(Color::White)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let cursor = if focused { "▏" } else { " " };
        Span::styled(format!("[ {}{}]", value, cursor), style)
    }
}

impl Widget for FormPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let line = Line::from(vec![
            Span::styled("Cycles: ", Style::default().fg(Color::Gray)),
            self.input(FormField::Cycles, &self.form.cycles),
            Span::raw("   "),
            Span::styled("Initial Price: ", Style::default().fg(Color::Gray)),
            self.input(FormField::InitialPrice, &self.form.initial_price),
        ]);

        Paragraph::new(line)
            .block(
                Block::default()
                    .title("Simulation")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::White)),
            )
            .render(area, buf);
    }
}
