//! Tree pane rendering
//!
//! Nodes are placed with [`compute_node_positions`] on a virtual canvas and
//! coloured by their current [`NodeState`]. The node touched by the current
//! step is drawn reversed.

use crate::state::AppState;
use crate::step::NodeState;
use crate::tree::{all_edges, all_nodes, compute_node_positions, TreeNode, TOP_PADDING};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    symbols::Marker,
    text::Span,
    widgets::{
        canvas::{Canvas, Line as CanvasLine},
        Block, Borders, Paragraph,
    },
    Frame,
};

const CANVAS_WIDTH: f64 = 400.0;
const CANVAS_HEIGHT: f64 = 240.0;
const MARGIN: f64 = 20.0;

struct PlacedNode {
    x: f64,
    y: f64,
    value: i32,
    state: NodeState,
}

/// Render the tree pane
pub fn render_tree_pane(
    frame: &mut Frame,
    area: Rect,
    tree: Option<&TreeNode>,
    state: &AppState,
    current_node: Option<i32>,
) {
    let block = Block::default()
        .title(" Tree ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border));

    let Some(tree) = tree else {
        let paragraph = Paragraph::new("(empty tree)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    };

    // canvas y grows upwards, layout y grows downwards
    let mut laid_out = tree.clone();
    compute_node_positions(Some(&mut laid_out), CANVAS_WIDTH, CANVAS_HEIGHT);
    let flip = |y: f64| CANVAS_HEIGHT - y;

    let nodes: Vec<PlacedNode> = all_nodes(Some(&laid_out))
        .iter()
        .map(|n| PlacedNode {
            x: n.x,
            y: flip(n.y),
            value: n.value,
            state: state.node_state(n.value),
        })
        .collect();
    let edges: Vec<(f64, f64, f64, f64)> = all_edges(Some(&laid_out))
        .iter()
        .map(|e| (e.parent.x, flip(e.parent.y), e.child.x, flip(e.child.y)))
        .collect();

    let cell_width = CANVAS_WIDTH / area.width.saturating_sub(2).max(1) as f64;
    let lowest = nodes.iter().map(|n| n.y).fold(CANVAS_HEIGHT, f64::min);
    let canvas = Canvas::default()
        .block(block)
        .marker(Marker::Braille)
        .x_bounds([0.0, CANVAS_WIDTH])
        .y_bounds([lowest - MARGIN, CANVAS_HEIGHT - TOP_PADDING + MARGIN])
        .paint(move |ctx| {
            for &(x1, y1, x2, y2) in &edges {
                ctx.draw(&CanvasLine {
                    x1,
                    y1,
                    x2,
                    y2,
                    color: DEFAULT_THEME.border,
                });
            }
            ctx.layer();
            for node in &nodes {
                let mut style = Style::default()
                    .fg(DEFAULT_THEME.node_color(node.state))
                    .add_modifier(Modifier::BOLD);
                if current_node == Some(node.value) {
                    style = style.add_modifier(Modifier::REVERSED);
                }
                let label = format!("({})", node.value);
                let offset = label.len() as f64 * cell_width / 2.0;
                ctx.print(node.x - offset, node.y, Span::styled(label, style));
            }
        });

    frame.render_widget(canvas, area);
}
