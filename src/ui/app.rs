//! Main TUI application state and logic

use crate::engine::{ExecutionEngine, StepError};
use crate::state::AppState;
use crate::traversal::TraversalOrder;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::cell::RefCell;
use std::io;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// Speed change per +/- key press
const SPEED_STEP_MS: u64 = 100;

/// Longest the event loop waits for input before redrawing
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// The main application state
pub struct App {
    /// The engine being visualized
    pub engine: ExecutionEngine,

    /// Latest state delivered by the engine's subscription
    view: Rc<RefCell<AppState>>,

    pub stack_scroll: usize,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    /// Last time space was pressed (for debouncing)
    pub last_space_press: Instant,
}

impl App {
    /// Create a new app around an initialized engine
    pub fn new(mut engine: ExecutionEngine) -> Self {
        let view = Rc::new(RefCell::new(engine.get_state()));
        let sink = Rc::clone(&view);
        engine.subscribe(Box::new(move |state: &AppState| {
            *sink.borrow_mut() = state.clone();
        }));

        App {
            engine,
            view,
            stack_scroll: 0,
            should_quit: false,
            status_message: String::from("Ready!"),
            last_space_press: Instant::now()
                .checked_sub(Duration::from_secs(1))
                .unwrap_or(Instant::now()),
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            let now = Instant::now();
            let was_playing = self.engine.is_playing();
            if self.engine.tick(now) {
                self.status_message = "Playing...".to_string();
            } else if was_playing && !self.engine.is_playing() {
                self.status_message = "Playback complete".to_string();
            }

            let timeout = self
                .engine
                .time_until_tick(now)
                .map_or(POLL_INTERVAL, |left| left.min(POLL_INTERVAL));
            if event::poll(timeout)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let view = self.view.borrow();
        let size = frame.area();

        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(main_chunks[0]);

        // Left column: Tree (top) | Output (bottom)
        let left_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(4)])
            .split(columns[0]);

        // Right column: Code (top) | Stack (bottom)
        let right_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(8), Constraint::Min(0)])
            .split(columns[1]);

        let current_step = view.current_step.and_then(|i| self.engine.steps().get(i));

        super::panes::render_tree_pane(
            frame,
            left_rows[0],
            self.engine.tree(),
            &view,
            current_step.and_then(|s| s.node),
        );

        super::panes::render_output_pane(
            frame,
            left_rows[1],
            &view.traversal_output,
            crate::tree::count_nodes(self.engine.tree()),
        );

        super::panes::render_source_pane(
            frame,
            right_rows[0],
            self.engine.code_listing(),
            view.highlighted_line,
            &format!("{} traversal", view.traversal_type),
        );

        super::panes::render_stack_pane(
            frame,
            right_rows[1],
            view.frames_top_first(),
            &mut self.stack_scroll,
        );

        let message = match current_step {
            Some(step) => format!("{} · {}", step.description, self.status_message),
            None => self.status_message.clone(),
        };
        super::panes::render_status_bar(
            frame,
            main_chunks[1],
            super::panes::StatusRenderData {
                message: &message,
                current_step: view.current_step,
                total_steps: self.engine.total_steps(),
                speed_ms: view.animation_speed,
                is_playing: view.is_playing,
                is_at_end: self.engine.is_at_end(),
            },
        );
    }

    /// Handle keyboard events
    fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            KeyCode::Char('1') => self.switch_order(TraversalOrder::Inorder),
            KeyCode::Char('2') => self.switch_order(TraversalOrder::Preorder),
            KeyCode::Char('3') => self.switch_order(TraversalOrder::Postorder),
            KeyCode::Char('r') => {
                self.engine.reset();
                self.status_message = "Reset".to_string();
            }
            KeyCode::Char('+') | KeyCode::Char('=') => {
                let speed = self.engine.state().animation_speed.saturating_sub(SPEED_STEP_MS);
                let applied = self.engine.set_speed(speed);
                self.status_message = format!("Speed: {}ms per step", applied);
            }
            KeyCode::Char('-') => {
                let speed = self.engine.state().animation_speed + SPEED_STEP_MS;
                let applied = self.engine.set_speed(speed);
                self.status_message = format!("Speed: {}ms per step", applied);
            }
            KeyCode::Left => {
                self.engine.pause();
                let result = self.engine.previous_step();
                self.report_step(result, "Stepped backward");
            }
            KeyCode::Right => {
                self.engine.pause();
                let result = self.engine.next_step();
                self.report_step(result, "Stepped forward");
            }
            KeyCode::Up => {
                self.stack_scroll = self.stack_scroll.saturating_sub(1);
            }
            KeyCode::Down => {
                self.stack_scroll = self.stack_scroll.saturating_add(1);
            }
            KeyCode::Char(' ') => {
                // Toggle auto-play (with 200ms debounce to prevent key repeat spam)
                if self.last_space_press.elapsed() >= Duration::from_millis(200) {
                    self.last_space_press = Instant::now();
                    self.engine.toggle_play();
                    self.status_message = if self.engine.is_playing() {
                        "Playing...".to_string()
                    } else {
                        "Paused".to_string()
                    };
                }
            }
            KeyCode::Enter => {
                self.engine.pause();
                let moved = self.engine.run_to_end();
                self.status_message = format!("Jumped to end ({} steps)", moved);
            }
            KeyCode::Backspace => {
                self.engine.pause();
                self.engine.rewind();
                self.status_message = "Jumped to start".to_string();
            }
            _ => {}
        }
    }

    fn switch_order(&mut self, order: TraversalOrder) {
        self.engine.initialize(order);
        self.stack_scroll = 0;
        self.status_message = format!("Switched to {} traversal", order);
    }

    fn report_step(&mut self, result: Result<(), StepError>, ok_message: &str) {
        self.status_message = match result {
            Ok(()) => ok_message.to_string(),
            Err(e) => format!("Cannot step: {}", e),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn test_number_keys_choose_order() {
        let mut app = App::new(ExecutionEngine::with_default_tree());
        assert_eq!(app.engine.traversal_type(), TraversalOrder::Inorder);

        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Char('2'));
        assert_eq!(app.engine.traversal_type(), TraversalOrder::Preorder);
        assert!(app.engine.is_at_start());
        assert_eq!(app.view.borrow().traversal_type, TraversalOrder::Preorder);

        press(&mut app, KeyCode::Char('3'));
        assert_eq!(app.engine.traversal_type(), TraversalOrder::Postorder);
        press(&mut app, KeyCode::Char('1'));
        assert_eq!(app.engine.traversal_type(), TraversalOrder::Inorder);
    }

    #[test]
    fn test_arrow_keys_step_and_view_follows() {
        let mut app = App::new(ExecutionEngine::with_default_tree());
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Right);
        assert_eq!(app.view.borrow().current_step, Some(1));

        press(&mut app, KeyCode::Left);
        assert_eq!(app.view.borrow().current_step, Some(0));
        assert_eq!(app.status_message, "Stepped backward");

        press(&mut app, KeyCode::Left);
        press(&mut app, KeyCode::Left);
        assert!(app.status_message.starts_with("Cannot step"));
    }
}
