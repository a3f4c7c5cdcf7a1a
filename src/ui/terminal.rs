use {
    crate::state::DashboardState,
    ratatui::{backend::CrosstermBackend, Terminal},
    std::{sync::Arc, time::Duration},
};

/// Run the TUI event loop
///
/// Pulls a state snapshot on a fixed cadence and redraws the dashboard.
/// The snapshot is a copy, so the core is never blocked by a slow redraw.
/// 'q' or Esc quits.
pub async fn run_ui(
    state: Arc<DashboardState>,
    refresh_interval: Duration,
) -> Result<(), Box<dyn std::error::Error>> {
    // Setup terminal
    let stdout = std::io::stdout();
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    crossterm::terminal::enable_raw_mode()?;

    // Alternate screen isolates the dashboard from stderr logs
    crossterm::execute!(
        std::io::stdout(),
        crossterm::terminal::EnterAlternateScreen,
        crossterm::cursor::Hide
    )?;

    terminal.clear()?;

    loop {
        // Non-blocking input check doubles as the render cadence
        if crossterm::event::poll(refresh_interval)? {
            if let crossterm::event::Event::Key(key) = crossterm::event::read()? {
                match key.code {
                    crossterm::event::KeyCode::Char('q') | crossterm::event::KeyCode::Esc => {
                        break;
                    }
                    _ => {}
                }
            }
        }

        let snapshot = state.snapshot();
        let area = terminal.size()?;
        terminal.draw(|f| {
            crate::ui::layout::render_layout(f, area, &snapshot);
        })?;
    }

    // Cleanup - restore terminal state
    crossterm::execute!(
        std::io::stdout(),
        crossterm::terminal::LeaveAlternateScreen,
        crossterm::cursor::Show
    )?;
    crossterm::terminal::disable_raw_mode()?;
    Ok(())
}
