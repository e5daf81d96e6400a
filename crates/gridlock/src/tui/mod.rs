//! Terminal UI: the presentation layer over a [`GameController`].

mod app;
mod input;
mod ui;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use gridlock_core::GameController;
use ratatui::DefaultTerminal;
use tracing::{error, info, instrument};

use app::App;

/// Runs the interactive game until the user quits.
#[instrument(skip_all)]
pub fn run(controller: GameController) -> Result<()> {
    info!("Starting terminal UI");

    let mut app = App::new(controller);
    app.start();

    let mut terminal = ratatui::init();
    let res = run_loop(&mut terminal, &mut app);
    ratatui::restore();

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    res
}

fn run_loop(terminal: &mut DefaultTerminal, app: &mut App) -> Result<()> {
    while !app.should_quit() {
        terminal.draw(|frame| ui::draw(frame, app))?;

        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            app.handle_key(key.code);
        }
    }
    Ok(())
}
