use crate::step::NodeState;
use ratatui::style::Color;

pub struct Theme {
    pub fg: Color,
    pub primary: Color,   // Blue
    pub secondary: Color, // Orange
    pub comment: Color,   // Grey
    pub success: Color,   // Green
    pub error: Color,     // Red
    pub keyword: Color,
    pub number: Color,
    pub border: Color,
    pub current_line_bg: Color,
    pub function: Color,
    pub muted_function: Color, // Frames below the top of the stack
    pub type_name: Color,
    pub node_unvisited: Color,
    pub node_processing: Color,
    pub node_visited: Color,
    pub node_finished: Color,
}

impl Theme {
    pub fn node_color(&self, state: NodeState) -> Color {
        match state {
            NodeState::Unvisited => self.node_unvisited,
            NodeState::Processing => self.node_processing,
            NodeState::Visited => self.node_visited,
            NodeState::Finished => self.node_finished,
        }
    }
}

pub const DEFAULT_THEME: Theme = Theme {
    fg: Color::Rgb(205, 214, 244),
    primary: Color::Rgb(137, 180, 250),   // Blue
    secondary: Color::Rgb(250, 179, 135), // Orange
    comment: Color::Rgb(108, 112, 134),
    success: Color::Rgb(166, 227, 161),
    error: Color::Rgb(243, 139, 168),
    keyword: Color::Rgb(137, 180, 250),        // Blue for keywords
    number: Color::Rgb(250, 179, 135),         // Orange for numbers
    border: Color::Rgb(108, 112, 134),         // Grey border
    current_line_bg: Color::Rgb(50, 50, 70),   // Slightly lighter BG for current line
    function: Color::Rgb(249, 226, 175),       // Yellow for functions
    muted_function: Color::Rgb(180, 165, 120), // Muted yellow for callers
    type_name: Color::Rgb(148, 226, 213),      // Cyan/teal for type names
    node_unvisited: Color::Rgb(108, 112, 134), // Grey
    node_processing: Color::Rgb(249, 226, 175), // Yellow
    node_visited: Color::Rgb(166, 227, 161),   // Green
    node_finished: Color::Rgb(137, 180, 250),  // Blue
};
