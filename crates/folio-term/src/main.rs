use std::io;
use std::panic;
use std::path::Path;

use anyhow::Result;
use crossterm::cursor;
use crossterm::event::DisableBracketedPaste;
use crossterm::event::DisableMouseCapture;
use crossterm::event::EnableBracketedPaste;
use crossterm::event::EnableMouseCapture;
use crossterm::terminal::disable_raw_mode;
use crossterm::terminal::enable_raw_mode;
use crossterm::terminal::EnterAlternateScreen;
use crossterm::terminal::LeaveAlternateScreen;
use folio_term::application::cli;
use folio_term::application::ui::destruct_terminal_for_panic;
use folio_term::application::ui::start_loop;
use folio_term::configuration::Config;
use folio_term::configuration::ConfigKey;
use folio_term::domain::models::Event;
use folio_term::domain::services::AppStateProps;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tokio::sync::mpsc;
use tracing_appender::non_blocking::WorkerGuard;

/// Logs go to a file so they never bleed into the alternate screen. The
/// guard must stay alive for the process lifetime or buffered lines are lost.
fn init_tracing() -> Option<WorkerGuard> {
    let log_file = Config::get(ConfigKey::LogFile);
    if log_file.is_empty() {
        return None;
    }

    let path = Path::new(&log_file);
    let directory = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let file_name = path
        .file_name()
        .map(|name| return name.to_os_string())
        .unwrap_or_else(|| return "folio.log".into());

    let appender = tracing_appender::rolling::never(directory, file_name);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let level = Config::get(ConfigKey::LogLevel)
        .parse::<tracing::Level>()
        .unwrap_or(tracing::Level::INFO);

    tracing_subscriber::fmt()
        .json()
        .with_max_level(level)
        .with_writer(writer)
        .init();

    return Some(guard);
}

#[tokio::main]
async fn main() -> Result<()> {
    if !cli::parse().await? {
        return Ok(());
    }

    let _guard = init_tracing();

    panic::set_hook(Box::new(|panic_info| {
        destruct_terminal_for_panic();
        better_panic::Settings::auto().create_panic_handler()(panic_info);
    }));

    let stdout = io::stdout();
    let mut stdout = stdout.lock();

    enable_raw_mode()?;
    crossterm::execute!(
        stdout,
        EnterAlternateScreen,
        EnableMouseCapture,
        EnableBracketedPaste
    )?;

    let term_backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(term_backend)?;

    let (event_tx, event_rx) = mpsc::unbounded_channel::<Event>();
    let props = AppStateProps {
        theme_name: Config::get(ConfigKey::Theme),
        content_file: Config::get(ConfigKey::ContentFile),
    };

    let result = start_loop(&mut terminal, props, event_tx, event_rx).await;

    disable_raw_mode()?;
    crossterm::execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        DisableBracketedPaste
    )?;
    let _ = crossterm::execute!(io::stdout(), cursor::Show);

    return result;
}
