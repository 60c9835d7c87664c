use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use folio_core::content::SectionId;

use crate::app::{App, Mode};
use crate::keymap::{KeyBinding, Keymap};

/// Input action that can be performed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Quit,
    ScrollDown,
    ScrollUp,
    ScrollHalfPageDown,
    ScrollHalfPageUp,
    ScrollPageDown,
    ScrollPageUp,
    JumpToTop,
    JumpToBottom,
    PendingG, // First 'g' press, waiting for second 'g'
    NextSection,
    PrevSection,
    JumpToSection(SectionId),
    NextLink,
    PrevLink,
    FollowLink,
    NextCategory,
    PrevCategory,
    EditForm,
    ShowHelp,
    ExitMode,
    // Contact form editing
    InputChar(char),
    Backspace,
    NextField,
    PrevField,
    Submit,
    None,
}

/// Handle a key event and return the corresponding action
pub fn handle_key_event(key: KeyEvent, app: &App, keymap: &Keymap) -> Action {
    match &app.mode {
        Mode::Help => Action::ExitMode, // any key closes help
        Mode::Editing(field) => handle_editing_mode(key, field.is_multiline()),
        Mode::Browse => handle_browse_mode(key, app, keymap),
    }
}

fn handle_browse_mode(key: KeyEvent, app: &App, keymap: &Keymap) -> Action {
    let binding = KeyBinding::from_event(&key);

    if keymap.is_g_prefix(&binding) {
        return if app.pending_key == Some('g') {
            keymap.double_g_action().cloned().unwrap_or(Action::None)
        } else {
            Action::PendingG
        };
    }

    keymap.get(&binding).cloned().unwrap_or(Action::None)
}

/// Keys while a form field has focus
fn handle_editing_mode(key: KeyEvent, multiline: bool) -> Action {
    match (key.code, key.modifiers) {
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => Action::Quit,
        (KeyCode::Char('s'), KeyModifiers::CONTROL) => Action::Submit,
        (KeyCode::Esc, _) => Action::ExitMode,
        (KeyCode::Tab, _) => Action::NextField,
        (KeyCode::BackTab, _) => Action::PrevField,
        (KeyCode::Enter, _) if multiline => Action::InputChar('\n'),
        (KeyCode::Enter, _) => Action::NextField,
        (KeyCode::Backspace, _) => Action::Backspace,
        (KeyCode::Char(c), m) if !m.contains(KeyModifiers::CONTROL) && !m.contains(KeyModifiers::ALT) => {
            Action::InputChar(c)
        }
        _ => Action::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_editing_keys() {
        let press = |code, modifiers| handle_editing_mode(KeyEvent::new(code, modifiers), false);

        assert_eq!(press(KeyCode::Char('a'), KeyModifiers::NONE), Action::InputChar('a'));
        assert_eq!(press(KeyCode::Char('A'), KeyModifiers::SHIFT), Action::InputChar('A'));
        assert_eq!(press(KeyCode::Char('s'), KeyModifiers::CONTROL), Action::Submit);
        assert_eq!(press(KeyCode::Enter, KeyModifiers::NONE), Action::NextField);
        assert_eq!(press(KeyCode::Esc, KeyModifiers::NONE), Action::ExitMode);
        assert_eq!(press(KeyCode::Char('x'), KeyModifiers::ALT), Action::None);
    }

    #[test]
    fn test_enter_in_message_inserts_newline() {
        let action = handle_editing_mode(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE), true);
        assert_eq!(action, Action::InputChar('\n'));
    }
}
