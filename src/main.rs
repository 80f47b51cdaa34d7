mod app;
mod infra;
mod state;
mod ui;

use std::io;
use std::sync::Arc;

use crossterm::{
    ExecutableCommand,
    event::{DisableBracketedPaste, EnableBracketedPaste},
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::prelude::*;
use tracing::{error, info};

use app::App;
use infra::diagnosis::HttpDiagnosisClient;

fn main() -> io::Result<()> {
    let _log_guard = infra::logging::init()?;

    let client = HttpDiagnosisClient::new().map_err(|e| {
        error!(error = %e, "failed to build diagnosis client");
        io::Error::other(e)
    })?;
    info!(endpoint = client.endpoint(), "starting");

    // Panic hook: restore terminal state before the message is printed.
    // Without this, a panic leaves the terminal in raw mode + alternate screen.
    // A request worker panicking is resolved as a failed request, so the
    // terminal stays up and the panic only goes to the log.
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        error!(panic = %info, "panic");
        if std::thread::current().name() != Some("main") {
            return;
        }
        let _ = disable_raw_mode();
        let _ = io::stdout().execute(DisableBracketedPaste);
        let _ = io::stdout().execute(LeaveAlternateScreen);
        default_hook(info);
    }));

    enable_raw_mode()?;
    io::stdout().execute(EnterAlternateScreen)?;
    io::stdout().execute(EnableBracketedPaste)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

    let mut app = App::new(Arc::new(client));
    let result = app.run(&mut terminal);

    // Cleanup
    disable_raw_mode()?;
    io::stdout().execute(DisableBracketedPaste)?;
    io::stdout().execute(LeaveAlternateScreen)?;

    info!("exiting");
    result
}
