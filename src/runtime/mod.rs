use std::env;
use std::path::PathBuf;
use std::sync::mpsc;

use crossterm::execute;
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::{info, warn};

use crate::error::Result;
use crate::logging;
use crate::mpris::ControlCmd;

mod event_loop;
mod settings;
mod startup;


/// Usage: `jukebar [MUSIC_DIR]` or `jukebar --write-config`.
pub fn run() -> Result<()> {
    let arg = env::args().nth(1);
    if arg.as_deref() == Some("--write-config") {
        return startup::write_config();
    }

    let settings = settings::load_settings();
    match logging::init(&settings.logging) {
        Ok(true) => info!("jukebar starting"),
        Ok(false) => {}
        Err(e) => eprintln!("jukebar: logging disabled: {e}"),
    }

    let mut controller = startup::build_controller(&settings, arg.map(PathBuf::from))?;

    let (control_tx, control_rx) = mpsc::channel::<ControlCmd>();
    let mpris = crate::mpris::spawn_mpris(control_tx);
    controller.subscribe(Box::new(mpris));

    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut state = event_loop::EventLoopState::new();
    let run_result = event_loop::run(&mut terminal, &settings, &mut controller, &control_rx, &mut state);
    if let Err(e) = &run_result {
        warn!(error = %e, "event loop stopped");
    }

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    run_result
}
