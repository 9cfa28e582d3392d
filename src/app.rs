use crate::config::Theme;
use crate::game::{BoostMode, Game};
use ratatui::{backend::Backend, Terminal};
use std::io;

/// The running game session: draws the current state, then handles one input
/// event or tick, until the user quits
#[derive(Clone, Debug)]
pub(crate) struct App {
    game: Game,
}

impl App {
    pub(crate) fn new(theme: Theme, boost_mode: BoostMode) -> App {
        App {
            game: Game::new(theme, boost_mode),
        }
    }

    pub(crate) fn run<B: Backend>(mut self, mut terminal: Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|frame| self.game.draw(frame))?;
            if let Some(AppEvent::Quit) = self.game.process_input()? {
                return Ok(());
            }
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum AppEvent {
    Quit,
}
