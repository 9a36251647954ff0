// treewalk: step-through visualizer for binary tree traversals

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::info;
use tracing_subscriber::EnvFilter;

use treewalk::engine::ExecutionEngine;
use treewalk::state::DEFAULT_SPEED_MS;
use treewalk::traversal::TraversalOrder;
use treewalk::ui::App;

#[derive(Parser, Debug)]
#[command(name = "treewalk", about = "Step through recursive binary tree traversals")]
struct Cli {
    /// Traversal order: inorder, preorder or postorder (anything else runs inorder)
    #[arg(long, default_value = "inorder")]
    order: String,

    /// Milliseconds per step while auto-playing
    #[arg(long, default_value_t = DEFAULT_SPEED_MS)]
    speed: u64,

    /// Print every step and the final output instead of starting the TUI
    #[arg(long)]
    print: bool,

    /// Write logs to this file (filtered by RUST_LOG)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_logging(cli.log_file.as_deref(), cli.print)?;

    let order = TraversalOrder::from_tag(&cli.order);
    if order.tag() != cli.order {
        eprintln!("Unknown order '{}', using {}", cli.order, order);
    }

    let mut engine = ExecutionEngine::with_default_tree();
    engine.initialize(order);
    let speed = engine.set_speed(cli.speed);
    info!(order = %order, speed_ms = speed, steps = engine.total_steps(), "engine ready");

    if cli.print {
        print_trace(&mut engine);
        return Ok(());
    }

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let mut app = App::new(engine);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}

/// Logs go to a file when requested, to stderr in print mode, and nowhere
/// while the TUI owns the terminal.
fn init_logging(log_file: Option<&Path>, to_stderr: bool) -> io::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    if let Some(path) = log_file {
        let file = File::create(path)?;
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .init();
    } else if to_stderr {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .init();
    }
    Ok(())
}

fn print_trace(engine: &mut ExecutionEngine) {
    let listing = engine.code_listing();
    println!("{} traversal, {} steps", engine.traversal_type(), engine.total_steps());

    while engine.next_step().is_ok() {
        let state = engine.state();
        let Some(step) = engine.current_step() else {
            break;
        };
        let index = state.current_step.map_or(0, |i| i + 1);
        let code = listing
            .get(step.code_line.saturating_sub(1))
            .map_or("", |line| line.trim());
        println!(
            "{:>4}  depth {:<2} L{}  {:<40} {}",
            index,
            state.call_stack.len(),
            step.code_line,
            code,
            step.description
        );
    }

    let output: Vec<String> = engine
        .state()
        .traversal_output
        .iter()
        .map(|v| v.to_string())
        .collect();
    println!("output: [{}]", output.join(", "));
}
