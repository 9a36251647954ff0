//! Traversal output pane rendering

use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
    Frame,
};

/// Render the values processed so far, in emission order
pub fn render_output_pane(frame: &mut Frame, area: Rect, output: &[i32], expected_len: usize) {
    let block = Block::default()
        .title(format!(" Output ({}/{}) ", output.len(), expected_len))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border))
        .padding(Padding::new(1, 0, 0, 0));

    if output.is_empty() {
        let paragraph = Paragraph::new("(no output)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let mut spans = Vec::with_capacity(output.len() * 2);
    for (i, value) in output.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" → ", Style::default().fg(DEFAULT_THEME.comment)));
        }
        // the newest value stands out
        let style = if i + 1 == output.len() {
            Style::default()
                .fg(DEFAULT_THEME.node_visited)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(DEFAULT_THEME.number)
        };
        spans.push(Span::styled(value.to_string(), style));
    }

    let paragraph = Paragraph::new(Line::from(spans))
        .block(block)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}
