use std::io;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use line_fit::FitReport;
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::{state::session::SessionState, ui::draw};

struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> Result<Self> {
        enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen)?;
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    None,
    Quit,
    TogglePause,
    ToggleLogs,
}

fn handle_key(key: KeyCode) -> Action {
    match key {
        KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
        KeyCode::Char(' ') | KeyCode::Char('p') => Action::TogglePause,
        KeyCode::Char('l') => Action::ToggleLogs,
        _ => Action::None,
    }
}

/// Runs the animated display, one optimization step per frame, until the user quits.
///
/// # Arguments
/// * `session` - The run to animate.
/// * `tick` - How long to wait for input between frames.
///
/// # Returns
/// The run's report, handed out after the terminal is restored.
///
/// # Errors
/// Returns an error if terminal setup or rendering fails.
pub fn run(mut session: SessionState, tick: Duration) -> Result<Option<FitReport>> {
    {
        let _guard = TerminalGuard::enter()?;

        let backend = CrosstermBackend::new(io::stdout());
        let mut terminal = Terminal::new(backend)?;
        terminal.clear()?;

        let mut show_logs = false;

        loop {
            terminal.draw(|f| draw::draw(f, &session.view(), show_logs))?;

            if event::poll(tick)? {
                if let Event::Key(k) = event::read()? {
                    if k.kind != KeyEventKind::Press {
                        continue;
                    }
                    match handle_key(k.code) {
                        Action::Quit => break,
                        Action::TogglePause => session.toggle_pause(),
                        Action::ToggleLogs => show_logs = !show_logs,
                        Action::None => {}
                    }
                }
            }

            session.tick();
        }

        terminal.show_cursor()?;
    }

    Ok(session.close())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_bindings() {
        assert_eq!(handle_key(KeyCode::Char('q')), Action::Quit);
        assert_eq!(handle_key(KeyCode::Esc), Action::Quit);
        assert_eq!(handle_key(KeyCode::Char(' ')), Action::TogglePause);
        assert_eq!(handle_key(KeyCode::Char('l')), Action::ToggleLogs);
        assert_eq!(handle_key(KeyCode::Enter), Action::None);
    }
}
