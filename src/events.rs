//! Keyboard input mapping.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::AppEvent;
use crate::models::{Field, MAX_PERCENT};

/// Slider step for PageUp/PageDown
const PAGE_STEP: i16 = 5;

/// Map a key event to a controller event
///
/// The focused field decides how arrows and printable characters are
/// interpreted. Returns None if the key is not handled.
pub fn map_key(key: KeyEvent, focus: Field) -> Option<AppEvent> {
    // Ignore release/repeat reports from terminals that send them
    if key.kind != KeyEventKind::Press {
        return None;
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let alt = key.modifiers.contains(KeyModifiers::ALT);

    match key.code {
        KeyCode::Esc => Some(AppEvent::Quit),
        KeyCode::Char('c') | KeyCode::Char('q') if ctrl => Some(AppEvent::Quit),
        KeyCode::Char('u') if ctrl => Some(AppEvent::ClearField),
        KeyCode::F(1) => Some(AppEvent::ShowAbout),

        // Alt+letter jumps straight to a field
        KeyCode::Char('b') if alt => Some(AppEvent::Focus(Field::Bill)),
        KeyCode::Char('s') if alt => Some(AppEvent::Focus(Field::Split)),
        KeyCode::Char('p') if alt => Some(AppEvent::Focus(Field::Percent)),

        KeyCode::Enter => Some(AppEvent::Calculate),
        KeyCode::Tab => Some(AppEvent::FocusNext),
        KeyCode::BackTab => Some(AppEvent::FocusPrev),
        KeyCode::Up => Some(AppEvent::FocusPrev),
        KeyCode::Down => Some(AppEvent::FocusNext),

        // Slider keys
        KeyCode::Left if focus == Field::Percent => Some(AppEvent::AdjustPercent(-1)),
        KeyCode::Right if focus == Field::Percent => Some(AppEvent::AdjustPercent(1)),
        KeyCode::PageDown if focus == Field::Percent => Some(AppEvent::AdjustPercent(-PAGE_STEP)),
        KeyCode::PageUp if focus == Field::Percent => Some(AppEvent::AdjustPercent(PAGE_STEP)),
        KeyCode::Home if focus == Field::Percent => Some(AppEvent::SetPercent(0)),
        KeyCode::End if focus == Field::Percent => Some(AppEvent::SetPercent(MAX_PERCENT)),

        // Text field keys
        KeyCode::Backspace if focus.is_text() => Some(AppEvent::Backspace),
        KeyCode::Char(c) if focus.is_text() && !ctrl && !alt => Some(AppEvent::Input(c)),

        _ => None,
    }
}
