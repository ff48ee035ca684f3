use std::io;
use std::time::Duration;

use anyhow::Result;
use crossterm::cursor;
use crossterm::event::DisableBracketedPaste;
use crossterm::event::DisableMouseCapture;
use crossterm::terminal::disable_raw_mode;
use crossterm::terminal::LeaveAlternateScreen;
use ratatui::backend::Backend;
use ratatui::layout::Constraint;
use ratatui::layout::Direction;
use ratatui::layout::Layout;
use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::text::Span;
use ratatui::text::Text;
use ratatui::widgets::Block;
use ratatui::widgets::Borders;
use ratatui::widgets::Paragraph;
use ratatui::widgets::Scrollbar;
use ratatui::widgets::ScrollbarOrientation;
use ratatui::widgets::Tabs;
use ratatui::Frame;
use ratatui::Terminal;
use strum::IntoEnumIterator;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time;

use crate::domain::models::Event;
use crate::domain::models::Section;
use crate::domain::services::section_view;
use crate::domain::services::AppState;
use crate::domain::services::AppStateProps;
use crate::domain::services::EventsService;

pub const CURSOR_BLINK_DELAY: Duration = Duration::from_millis(530);

/// Restore the terminal to a sane state. Used by the panic hook, where the
/// normal teardown path never runs.
pub fn destruct_terminal_for_panic() {
    let _ = disable_raw_mode();
    let _ = crossterm::execute!(
        io::stdout(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        DisableBracketedPaste
    );
    let _ = crossterm::execute!(io::stdout(), cursor::Show);
}

/// One-shot typewriter timer. The delay varies with the animation phase, so
/// the task is recreated after every tick and the previous handle aborted.
fn schedule_typewriter_tick(
    event_tx: mpsc::UnboundedSender<Event>,
    delay: Duration,
) -> JoinHandle<()> {
    return tokio::spawn(async move {
        time::sleep(delay).await;
        let _ = event_tx.send(Event::TypewriterTick);
    });
}

/// Fixed-interval cursor blink, independent of everything else.
fn spawn_cursor_blink(event_tx: mpsc::UnboundedSender<Event>) -> JoinHandle<()> {
    return tokio::spawn(async move {
        let mut interval = time::interval(CURSOR_BLINK_DELAY);
        interval.tick().await;
        loop {
            interval.tick().await;
            if event_tx.send(Event::CursorBlink).is_err() {
                break;
            }
        }
    });
}

pub async fn start_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    props: AppStateProps,
    event_tx: mpsc::UnboundedSender<Event>,
    event_rx: mpsc::UnboundedReceiver<Event>,
) -> Result<()> {
    let mut app_state = AppState::new(props).await?;
    let mut events = EventsService::new(event_rx);

    let blink_timer = spawn_cursor_blink(event_tx.clone());
    let mut typewriter_timer = schedule_typewriter_tick(event_tx.clone(), Duration::ZERO);

    loop {
        terminal.draw(|frame| render_frame(frame, &mut app_state))?;

        match events.next().await? {
            Event::KeyboardCharInput(input) => {
                app_state.handle_input(input);
            }
            Event::KeyboardPaste(text) => {
                app_state.handle_paste(&text);
            }
            Event::KeyboardEnter => {
                app_state.submit_input();
            }
            Event::KeyboardCTRLC => {
                break;
            }
            Event::NavigateNext => {
                let section = app_state.section.next();
                app_state.navigate(section);
            }
            Event::NavigatePrevious => {
                let section = app_state.section.previous();
                app_state.navigate(section);
            }
            Event::TypewriterTick => {
                let delay = app_state.typewriter.advance();
                typewriter_timer.abort();
                typewriter_timer = schedule_typewriter_tick(event_tx.clone(), delay);
            }
            Event::CursorBlink => {
                app_state.handle_cursor_blink();
            }
            Event::UIScrollUp => {
                app_state.scroll.up();
            }
            Event::UIScrollDown => {
                app_state.scroll.down();
            }
            Event::UIScrollPageUp => {
                app_state.scroll.up_page();
            }
            Event::UIScrollPageDown => {
                app_state.scroll.down_page();
            }
        }
    }

    // Both timers must die with the loop; a tick after teardown would land in
    // a closed channel at best.
    blink_timer.abort();
    typewriter_timer.abort();

    return Ok(());
}

fn render_frame(frame: &mut Frame, app_state: &mut AppState) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(1),
            Constraint::Length(2),
        ])
        .split(frame.area());

    render_tabs(frame, app_state, layout[0]);
    render_body(frame, app_state, layout[1]);
    render_prompt(frame, app_state, layout[2]);
}

fn render_tabs(frame: &mut Frame, app_state: &AppState, area: Rect) {
    let theme = app_state.theme;
    let titles = Section::iter()
        .map(|section| return Line::from(section.title()))
        .collect::<Vec<Line>>();

    let tabs = Tabs::new(titles)
        .select(app_state.section.index())
        .style(Style::default().fg(theme.dim))
        .highlight_style(
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        )
        .divider("|")
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(theme.dim)),
        );

    frame.render_widget(tabs, area);
}

fn render_body(frame: &mut Frame, app_state: &mut AppState, area: Rect) {
    let lines = section_view::lines(app_state);
    app_state.scroll.set_state(lines.len(), area.height.into());

    let paragraph = Paragraph::new(Text::from(lines)).scroll((app_state.scroll.position, 0));
    frame.render_widget(paragraph, area);

    frame.render_stateful_widget(
        Scrollbar::new(ScrollbarOrientation::VerticalRight),
        area,
        &mut app_state.scroll.scrollbar_state,
    );
}

fn render_prompt(frame: &mut Frame, app_state: &AppState, area: Rect) {
    let theme = app_state.theme;

    let mut spans = vec![
        Span::styled("visitor", Style::default().fg(theme.accent)),
        Span::styled("@folio", Style::default().fg(theme.dim)),
        Span::styled(":~$ ", Style::default().fg(theme.dim)),
        Span::styled(app_state.input.clone(), Style::default().fg(theme.text)),
    ];
    if app_state.cursor_visible {
        spans.push(Span::styled(
            "\u{2588}",
            Style::default().fg(theme.text),
        ));
    }

    let prompt = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::TOP)
            .border_style(Style::default().fg(theme.dim)),
    );

    frame.render_widget(prompt, area);
}
