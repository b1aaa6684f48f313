//! Keybindings
//!
//! Pure mapping from terminal events to actions. Nothing here touches the
//! picker; the event loop forwards `Action::Picker` to it.
//!
//! | key                      | action                      |
//! |--------------------------|-----------------------------|
//! | printable, Backspace     | edit the query              |
//! | arrows, Tab, BackTab     | move the cursor             |
//! | Enter                    | pick and close              |
//! | Shift/Alt+Enter, Ctrl+C  | pick and keep open          |
//! | Esc                      | clear the query, then quit  |
//! | F1                       | browse all / next page      |
//! | F2                       | switch input method         |
//! | F3                       | help                        |
//! | mouse wheel              | scroll one row              |

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent, MouseEventKind};
use libemojipick::{Direction, InputEvent};

use super::actions::Action;
use super::event::TuiEvent;
use super::state::{AppState, InputMethod};

/// Map any terminal event; ticks and resizes map to nothing
pub fn map_event(event: &TuiEvent, state: &AppState) -> Option<Action> {
    match event {
        TuiEvent::Key(key) => map_key(*key, state),
        TuiEvent::Mouse(mouse) => map_mouse(*mouse, state),
        TuiEvent::Resize(_, _) | TuiEvent::Tick => None,
    }
}

pub fn map_key(key: KeyEvent, state: &AppState) -> Option<Action> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    if state.help_visible {
        return match key.code {
            KeyCode::Esc | KeyCode::F(3) => Some(Action::HideHelp),
            _ => None,
        };
    }

    match key.code {
        KeyCode::F(2) => return Some(Action::Picker(InputEvent::InputMethodToggle)),
        KeyCode::F(3) => return Some(Action::ShowHelp),
        _ => {}
    }

    match state.input_method {
        InputMethod::Search => map_search_key(key, state),
        InputMethod::Text => map_text_key(key, state),
    }
}

fn map_search_key(key: KeyEvent, state: &AppState) -> Option<Action> {
    let picker = |event| Some(Action::Picker(event));
    let keep_open = key.modifiers.intersects(KeyModifiers::SHIFT | KeyModifiers::ALT);

    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            picker(InputEvent::Commit { keep_open: true })
        }
        KeyCode::Char(c) if is_plain(key.modifiers) => {
            let mut query = state.query.clone();
            query.push(c);
            picker(InputEvent::TextChanged(query))
        }
        KeyCode::Backspace if !state.query.is_empty() => {
            let mut query = state.query.clone();
            query.pop();
            picker(InputEvent::TextChanged(query))
        }
        KeyCode::Enter => picker(InputEvent::Commit { keep_open }),
        KeyCode::Esc => picker(InputEvent::Cancel),
        KeyCode::Left | KeyCode::BackTab => picker(InputEvent::Arrow(Direction::Left)),
        KeyCode::Right | KeyCode::Tab => picker(InputEvent::Arrow(Direction::Right)),
        KeyCode::Up => picker(InputEvent::Arrow(Direction::Up)),
        KeyCode::Down => picker(InputEvent::Arrow(Direction::Down)),
        KeyCode::F(1) => picker(InputEvent::BrowseAllToggle),
        _ => None,
    }
}

fn map_text_key(key: KeyEvent, state: &AppState) -> Option<Action> {
    match key.code {
        KeyCode::Char(c) if is_plain(key.modifiers) => {
            let mut literal = state.literal.clone();
            literal.push(c);
            Some(Action::LiteralChanged(literal))
        }
        KeyCode::Backspace if !state.literal.is_empty() => {
            let mut literal = state.literal.clone();
            literal.pop();
            Some(Action::LiteralChanged(literal))
        }
        KeyCode::Enter if !state.literal.is_empty() => Some(Action::Selected {
            glyph: state.literal.clone(),
            close_after: !key.modifiers.intersects(KeyModifiers::SHIFT | KeyModifiers::ALT),
        }),
        KeyCode::Esc => Some(Action::Picker(InputEvent::InputMethodToggle)),
        _ => None,
    }
}

pub fn map_mouse(mouse: MouseEvent, state: &AppState) -> Option<Action> {
    if state.help_visible || state.input_method != InputMethod::Search {
        return None;
    }
    match mouse.kind {
        MouseEventKind::ScrollDown => Some(Action::Picker(InputEvent::ScrollDelta(1))),
        MouseEventKind::ScrollUp => Some(Action::Picker(InputEvent::ScrollDelta(-1))),
        _ => None,
    }
}

fn is_plain(modifiers: KeyModifiers) -> bool {
    modifiers.difference(KeyModifiers::SHIFT).is_empty()
}
