pub mod app;
pub mod event;
pub mod theme;
pub mod ui;

pub use app::{App, InputMode, Screen};
pub use theme::{resolve_theme, Theme, ThemeColors};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use event::{Event, EventHandler};

pub async fn run_tui(mut app: App, tick_rate_ms: u64) -> anyhow::Result<()> {
    // Buffer log output while the TUI is active to prevent it corrupting the display
    crate::stderr_buffer::activate();

    // Init terminal (sets up panic hooks automatically)
    let mut terminal = ratatui::init();
    let mut events = EventHandler::new(tick_rate_ms);

    let result = loop {
        if let Err(e) = terminal.draw(|frame| ui::draw(frame, &mut app)) {
            break Err(e.into());
        }

        match events.next().await {
            Event::Key(key) => handle_key_event(&mut app, key),
            Event::Tick => app.update_flash(),
        }

        if app.should_quit {
            break Ok(());
        }
    };

    // Restore terminal
    ratatui::restore();

    // Flush buffered log lines now that the terminal is restored
    for msg in crate::stderr_buffer::drain() {
        eprintln!("{}", msg);
    }

    result
}

pub fn handle_key_event(app: &mut App, key: KeyEvent) {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.should_quit = true;
        return;
    }

    if app.input_mode == InputMode::Help {
        // Any key exits help
        app.dismiss_help();
        return;
    }

    if key.code == KeyCode::Char('?') {
        app.show_help();
        return;
    }

    match app.screen {
        Screen::Home => match key.code {
            KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
            KeyCode::Enter | KeyCode::Char('s') => app.start(),
            KeyCode::Char('l') => app.open_learn_more(),
            _ => {}
        },
        Screen::Assessment => match key.code {
            KeyCode::Char('q') => app.should_quit = true,

            // Move the highlight between options
            KeyCode::Char('j') | KeyCode::Down => app.next_option(),
            KeyCode::Char('k') | KeyCode::Up => app.previous_option(),

            // Answer
            KeyCode::Enter => app.confirm(),
            KeyCode::Char(' ') => app.select_highlighted(),
            KeyCode::Char(c @ '1'..='9') => {
                let index = c as usize - '1' as usize;
                app.select_index(index);
            }

            // Navigate questions
            KeyCode::Char('n') | KeyCode::Right | KeyCode::Tab => app.go_next(),
            KeyCode::Char('p') | KeyCode::Left | KeyCode::BackTab => app.go_previous(),
            _ => {}
        },
        Screen::Complete => match key.code {
            KeyCode::Char('q') => app.should_quit = true,
            KeyCode::Enter | KeyCode::Char('n') | KeyCode::Right => app.view_results(),
            _ => {}
        },
        Screen::Results => match key.code {
            KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
            KeyCode::Char('j') | KeyCode::Down => app.scroll_down(),
            KeyCode::Char('k') | KeyCode::Up => app.scroll_up(),
            KeyCode::Char('r') => app.retake(),
            _ => {}
        },
    }
}
