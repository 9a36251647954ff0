//! Status bar rendering with keybindings and state indicators

use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Data needed to render the status bar
pub struct StatusRenderData<'a> {
    pub message: &'a str,
    /// Index of the last applied step, `None` before the first one
    pub current_step: Option<usize>,
    pub total_steps: usize,
    pub speed_ms: u64,
    pub is_playing: bool,
    pub is_at_end: bool,
}

/// Render the status bar at the bottom
pub fn render_status_bar(frame: &mut Frame, area: Rect, data: StatusRenderData) {
    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);

    let shown_step = data.current_step.map_or(0, |i| i + 1);
    let left_spans = vec![
        Span::styled(
            format!(" Step {}/{} ", shown_step, data.total_steps),
            Style::default()
                .bg(DEFAULT_THEME.primary)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            " | ",
            Style::default()
                .bg(DEFAULT_THEME.current_line_bg)
                .fg(DEFAULT_THEME.comment),
        ),
        Span::styled(
            format!(" {} ", data.message),
            Style::default()
                .bg(DEFAULT_THEME.current_line_bg)
                .fg(DEFAULT_THEME.fg),
        ),
    ];

    let left_paragraph = Paragraph::new(Line::from(left_spans))
        .style(Style::default().bg(DEFAULT_THEME.current_line_bg))
        .alignment(Alignment::Left);
    frame.render_widget(left_paragraph, layout[0]);

    let key_style = Style::default().bg(DEFAULT_THEME.comment).fg(Color::Black);
    let desc_style = Style::default()
        .bg(DEFAULT_THEME.current_line_bg)
        .fg(DEFAULT_THEME.fg);
    let sep_style = Style::default()
        .bg(DEFAULT_THEME.current_line_bg)
        .fg(DEFAULT_THEME.comment);

    let mut right_spans = vec![
        Span::styled(" ←/→ ", key_style),
        Span::styled(" step ", desc_style),
        Span::styled("│", sep_style),
        Span::styled(" ⎵ ", key_style),
        Span::styled(" play ", desc_style),
        Span::styled("│", sep_style),
        Span::styled(" +/- ", key_style),
        Span::styled(format!(" {}ms ", data.speed_ms), desc_style),
        Span::styled("│", sep_style),
        Span::styled(" 1/2/3 ", key_style),
        Span::styled(" order ", desc_style),
        Span::styled("│", sep_style),
        Span::styled("q", key_style),
        Span::styled(" quit ", desc_style),
    ];

    let badge = if data.is_playing {
        Some((" ▶ PLAYING ", DEFAULT_THEME.secondary))
    } else if data.is_at_end {
        Some((" END ", DEFAULT_THEME.error))
    } else if data.current_step.is_none() {
        Some((" START ", DEFAULT_THEME.success))
    } else {
        None
    };
    if let Some((text, color)) = badge {
        right_spans.push(Span::styled("│", sep_style));
        right_spans.push(Span::styled(
            text,
            Style::default()
                .bg(color)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ));
    }

    let right_paragraph = Paragraph::new(Line::from(right_spans))
        .style(Style::default().bg(DEFAULT_THEME.current_line_bg))
        .alignment(Alignment::Right);
    frame.render_widget(right_paragraph, layout[1]);
}
