//! Call stack pane rendering
//!
//! Frames are listed most recent call first, so the frame being executed is
//! always at the top. Each frame shows its call signature and, for recursive
//! calls, the code line it will return to.

use crate::state::StackFrame;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

/// Render the stack pane. `frames` must already be in top-first order.
pub fn render_stack_pane<'a, I>(frame: &mut Frame, area: Rect, frames: I, scroll_offset: &mut usize)
where
    I: ExactSizeIterator<Item = &'a StackFrame>,
{
    let depth = frames.len();
    let block = Block::default()
        .title(format!(" Call Stack ({}) ", depth))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border));

    let mut all_items = Vec::new();
    if depth == 0 {
        all_items.push(ListItem::new("(empty)").style(Style::default().fg(DEFAULT_THEME.comment)));
    }

    for (position, stack_frame) in frames.enumerate() {
        let is_top = position == 0;
        let name_style = if is_top {
            Style::default()
                .fg(DEFAULT_THEME.function)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(DEFAULT_THEME.muted_function)
        };

        let mut spans = vec![
            Span::styled(
                if is_top { "▸ " } else { "  " },
                Style::default().fg(DEFAULT_THEME.secondary),
            ),
            Span::styled(
                format!("#{} ", depth - position - 1),
                Style::default().fg(DEFAULT_THEME.comment),
            ),
            Span::styled("│ ", Style::default().fg(DEFAULT_THEME.comment)),
            Span::styled(stack_frame.signature(), name_style),
        ];

        if let Some(line) = stack_frame.return_address {
            spans.push(Span::styled(
                format!("  ↪ line {}", line),
                Style::default().fg(DEFAULT_THEME.comment),
            ));
        }

        all_items.push(ListItem::new(Line::from(spans)));
    }

    let total_items = all_items.len();
    let visible_height = area.height.saturating_sub(2).max(1) as usize;
    if total_items > visible_height {
        *scroll_offset = (*scroll_offset).min(total_items - visible_height);
    } else {
        *scroll_offset = 0;
    }

    let visible_items: Vec<ListItem> = all_items
        .into_iter()
        .skip(*scroll_offset)
        .take(visible_height)
        .collect();

    frame.render_widget(List::new(visible_items).block(block), area);
}
