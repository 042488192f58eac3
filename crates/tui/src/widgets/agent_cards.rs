//! Agent cards widget - one row per investor of the latest snapshot.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Row, Table, Widget},
};
use view::{AgentPanelView, Personality};

/// Agent balances table widget.
pub struct AgentCards<'a> {
    /// Cards and caption to display.
    panel: &'a AgentPanelView,
}

impl<'a> AgentCards<'a> {
    /// Create a new agent cards widget.
    pub fn new(panel: &'a AgentPanelView) -> Self {
        Self { panel }
    }
}

fn personality_style(personality: Personality) -> Style {
    match personality {
        Personality::Impulsive => Style::default().fg(Color::Red),
        Personality::Medium => Style::default().fg(Color::Yellow),
        Personality::Rational => Style::default().fg(Color::Green),
    }
}

impl Widget for AgentCards<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let header_cells = ["Agent", "Personality", "Risk", "Fiat", "Crypto"]
            .iter()
            .map(|h| Cell::from(*h).style(Style::default().add_modifier(Modifier::BOLD)));
        let header = Row::new(header_cells)
            .style(Style::default().fg(Color::Yellow))
            .height(1);

        let rows = self.panel.cards.iter().map(|card| {
            Row::new(vec![
                Cell::from(card.id.clone()),
                Cell::from(card.personality.label()).style(personality_style(card.personality)),
                Cell::from(format!("{:>5}", card.risk_tolerance)),
                Cell::from(format!("{:>12}", card.fiat_balance)),
                Cell::from(format!("{:>12}", card.crypto_balance)),
            ])
        });

        let title = match self.panel.caption() {
            Some(caption) => format!("Agents ({})", caption),
            None => "Agents".to_string(),
        };

        let table = Table::new(
            rows,
            [
                Constraint::Min(16),    // Agent id
                Constraint::Length(11), // Personality
                Constraint::Length(6),  // Risk
                Constraint::Length(13), // Fiat
                Constraint::Length(13), // Crypto
            ],
        )
        .header(header)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::White)),
        );

        Widget::render(table, area, buf);
    }
}
