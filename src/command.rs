use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// The key used for the speed boost
const BOOST_KEY: KeyCode = KeyCode::Char(' ');

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Command {
    Quit,
    Up,
    Down,
    Left,
    Right,
    BoostPress,
    BoostRelease,
}

impl Command {
    /// Translate a key event into a `Command`.
    ///
    /// Release events are only reported when the kitty keyboard protocol is
    /// active; the boost key is the only key whose release we care about.
    pub(crate) fn from_key_event(ev: KeyEvent) -> Option<Command> {
        if ev.kind == KeyEventKind::Release {
            return (ev.code == BOOST_KEY).then_some(Command::BoostRelease);
        }
        match (ev.modifiers, ev.code) {
            (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(Command::Quit),
            (KeyModifiers::NONE, KeyCode::Char('w' | 'k') | KeyCode::Up) => Some(Command::Up),
            (KeyModifiers::NONE, KeyCode::Char('s' | 'j') | KeyCode::Down) => Some(Command::Down),
            (KeyModifiers::NONE, KeyCode::Char('a' | 'h') | KeyCode::Left) => Some(Command::Left),
            (KeyModifiers::NONE, KeyCode::Char('d' | 'l') | KeyCode::Right) => Some(Command::Right),
            (KeyModifiers::NONE, BOOST_KEY) => Some(Command::BoostPress),
            (KeyModifiers::NONE, KeyCode::Char('q')) | (_, KeyCode::Esc) => Some(Command::Quit),
            _ => None,
        }
    }
}
