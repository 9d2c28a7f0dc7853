//! Terminal lifecycle and the event loop.
//!
//! The loop runs on the main thread: draw, drain any fetch completions,
//! then poll for a key event. Fetches themselves run on the tokio runtime
//! and only re-enter the browser through the outcome channel.

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::execute;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tokio::sync::mpsc;

use crate::keymap::action_for_key;
use crate::model::{Browser, FetchOutcome};
use crate::views;

/// Run the browser until the user quits.
pub fn run(
    mut browser: Browser,
    mut outcomes: mpsc::UnboundedReceiver<FetchOutcome>,
    tick: Duration,
) -> io::Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = event_loop(&mut browser, &mut outcomes, &mut terminal, tick);

    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    result
}

fn event_loop(
    browser: &mut Browser,
    outcomes: &mut mpsc::UnboundedReceiver<FetchOutcome>,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    tick: Duration,
) -> io::Result<()> {
    loop {
        while let Ok(outcome) = outcomes.try_recv() {
            browser.apply(outcome);
        }

        terminal.draw(|frame| views::render(frame, browser.state()))?;

        if !event::poll(tick)? {
            continue;
        }
        match event::read()? {
            Event::Key(key) => {
                let focus = browser.state().focus;
                if let Some(action) = action_for_key(key, focus) {
                    if browser.dispatch(action) {
                        return Ok(());
                    }
                }
            }
            Event::Resize(_, _) => {}
            _ => {}
        }
    }
}
