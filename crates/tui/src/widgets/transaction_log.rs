//! Transaction log widget - trade rows in the order they occurred.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Widget, Wrap},
};
use types::TradeAction;
use view::{EMPTY_TRANSACTIONS_MESSAGE, TransactionLogView, TransactionRow};

/// Trade log widget.
pub struct TransactionLog<'a> {
    /// `None` until the first successful run.
    view: Option<&'a TransactionLogView>,
    scroll_offset: usize,
}

impl<'a> TransactionLog<'a> {
    /// Create a new transaction log widget.
    pub fn new(view: Option<&'a TransactionLogView>) -> Self {
        Self {
            view,
            scroll_offset: 0,
        }
    }

    /// Skip the first `offset` rows.
    pub fn scroll_offset(mut self, offset: usize) -> Self {
        self.scroll_offset = offset;
        self
    }
}

fn category_color(category: TradeAction) -> Color {
    match category {
        TradeAction::Buy => Color::Green,
        TradeAction::Sell => Color::Red,
    }
}

fn row_item(row: &TransactionRow) -> ListItem<'static> {
    let color = category_color(row.category);
    let mut spans = vec![
        Span::styled(
            format!("{} {:<4}", row.indicator, row.label),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ),
        Span::raw(" by "),
        Span::styled(
            row.receiver.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!("  {}", row.cycle), Style::default().fg(Color::Gray)),
    ];
    if let Some(sender) = &row.sender {
        spans.push(Span::styled(
            format!("  via {}", sender),
            Style::default().fg(Color::DarkGray),
        ));
    }
    spans.push(Span::styled(
        format!("  {}", row.price),
        Style::default().fg(color),
    ));
    ListItem::new(Line::from(spans))
}

impl Widget for TransactionLog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let count = self.view.map(|v| v.rows().len()).unwrap_or(0);
        let title = if count > 0 {
            format!("Transactions ({})", count)
        } else {
            "Transactions".to_string()
        };
        let block = Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White));

        match self.view {
            None => block.render(area, buf),
            Some(TransactionLogView::Empty) => {
                Paragraph::new(EMPTY_TRANSACTIONS_MESSAGE)
                    .alignment(Alignment::Center)
                    .style(Style::default().fg(Color::Gray))
                    .wrap(Wrap { trim: true })
                    .block(block)
                    .render(area, buf);
            }
            Some(TransactionLogView::Rows(rows)) => {
                let items: Vec<ListItem> = rows.iter().skip(self.scroll_offset).map(row_item).collect();
                Widget::render(List::new(items).block(block), area, buf);
            }
        }
    }
}
