// rostty: Interactive Student Roster

use std::io::{self, IsTerminal};

use clap::Parser as _;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::info;

use rostty::config::{Cli, FrontEnd, Settings};
use rostty::logging;
use rostty::prompt::{write_lines, LinePrompt};
use rostty::roster::Roster;
use rostty::session::Session;
use rostty::ui::App;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let settings = Settings::from_cli(Cli::parse(), io::stdin().is_terminal());

    // Held until exit so the file sink is flushed
    let _log_guard = logging::init(&settings.log)?;
    info!(front_end = ?settings.front_end, policy = ?settings.policy, "starting");

    let session = Session::new(Roster::with_config(settings.roster), settings.policy);

    match settings.front_end {
        FrontEnd::Line => run_line(session, settings.color),
        FrontEnd::Tui => run_tui(session, settings.color),
    }
}

fn run_line(mut session: Session, color: bool) -> Result<(), Box<dyn std::error::Error>> {
    let stdin = io::stdin();
    let mut prompt = LinePrompt::new(stdin.lock(), io::stdout().lock()).with_color(color);
    prompt.run(&mut session)?;
    Ok(())
}

fn run_tui(session: Session, color: bool) -> Result<(), Box<dyn std::error::Error>> {
    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let mut app = App::new(session);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // main reports the error once the terminal is restored
    res?;

    // Leave the farewell on the primary screen, like the line prompt does
    if app.session.has_exited() {
        let lines = app.session.transcript().lines();
        write_lines(&mut io::stdout(), &lines[lines.len().saturating_sub(1)..], color)?;
    }
    info!(students = app.session.roster().len(), "session closed");

    Ok(())
}
