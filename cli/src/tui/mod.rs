//! Interactive terminal UI.

mod app;
mod ui;

use std::io;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use wififilter_core::FaultNotices;

use crate::commands::Settings;
use app::App;

/// How long to wait for a key press before redrawing.
const TICK: Duration = Duration::from_millis(150);

pub async fn run(settings: &Settings, notices: FaultNotices) -> Result<()> {
    let workflow = Arc::new(settings.workflow());

    // Raw mode owns the terminal; faults are shown in the footer instead
    notices.capture();

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let mut app = App::new(workflow, notices.clone());
    app.start();
    let result = event_loop(&mut terminal, &mut app).await;

    // Restore the terminal even if the loop failed
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    for notice in notices.release() {
        eprintln!("{}", notice);
    }
    result
}

async fn event_loop<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        app.sync();
        terminal.draw(|f| ui::draw(f, app))?;

        // Waiting on the blocking pool keeps spawned workflow actions running
        // on this runtime while no key is pressed.
        let event = tokio::task::spawn_blocking(|| -> io::Result<Option<Event>> {
            if event::poll(TICK)? {
                Ok(Some(event::read()?))
            } else {
                Ok(None)
            }
        })
        .await??;

        if let Some(Event::Key(key)) = event {
            if key.kind == KeyEventKind::Press {
                app.handle_key(key);
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
