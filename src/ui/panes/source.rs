//! Code pane rendering with syntax highlighting
//!
//! Shows the 6-line listing of the active traversal order with the line the
//! current step belongs to highlighted and marked with an arrow.

use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Simple syntax highlighting for the listing
fn highlight_code_line(line: &str) -> Line<'_> {
    let mut spans = Vec::new();
    let mut current_word = String::new();

    for c in line.chars() {
        if c.is_alphanumeric() || c == '_' {
            current_word.push(c);
            continue;
        }

        if !current_word.is_empty() {
            let is_func = c == '(';
            spans.push(Span::styled(
                current_word.clone(),
                get_keyword_style(&current_word, is_func),
            ));
            current_word.clear();
        }

        let style = match c {
            '{' | '}' | '(' | ')' | '<' | '>' => Style::default().fg(DEFAULT_THEME.primary),
            '&' | '=' => Style::default().fg(DEFAULT_THEME.keyword),
            _ => Style::default().fg(DEFAULT_THEME.fg),
        };
        spans.push(Span::styled(c.to_string(), style));
    }

    if !current_word.is_empty() {
        let style = get_keyword_style(&current_word, false);
        spans.push(Span::styled(current_word, style));
    }

    Line::from(spans)
}

fn get_keyword_style(word: &str, is_function: bool) -> Style {
    match word {
        "fn" | "let" | "else" | "return" => Style::default()
            .fg(DEFAULT_THEME.keyword)
            .add_modifier(Modifier::BOLD),
        "Option" | "Node" | "Some" => Style::default().fg(DEFAULT_THEME.type_name),
        _ if is_function => Style::default().fg(DEFAULT_THEME.function),
        _ => Style::default().fg(DEFAULT_THEME.fg),
    }
}

/// Render the code pane. `current_line` is 1-indexed, 0 for none.
pub fn render_source_pane(
    frame: &mut Frame,
    area: Rect,
    listing: &[&str],
    current_line: usize,
    title: &str,
) {
    let block = Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border));

    let lines: Vec<Line> = listing
        .iter()
        .enumerate()
        .map(|(idx, line)| {
            let line_num = idx + 1;
            let is_current = line_num == current_line;

            let (marker, num_style) = if is_current {
                (
                    "▶ ",
                    Style::default()
                        .fg(DEFAULT_THEME.secondary)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                ("  ", Style::default().fg(DEFAULT_THEME.comment))
            };

            let mut content_line = highlight_code_line(line);
            if is_current {
                let bg = Style::default().bg(DEFAULT_THEME.current_line_bg);
                for span in &mut content_line.spans {
                    span.style = span.style.patch(bg);
                }
            }

            let mut final_spans = vec![
                Span::styled(marker, num_style),
                Span::styled(format!("{:2} ", line_num), num_style),
            ];
            final_spans.extend(content_line.spans);
            Line::from(final_spans)
        })
        .collect();

    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, area);
}
