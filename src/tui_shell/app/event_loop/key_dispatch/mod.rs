use super::super::*;

#[derive(Debug, PartialEq, Eq)]
pub(in crate::tui_shell) enum KeyAction {
    Edit(EditEvent),
    Quit,
    Ignore,
}

fn has_command_modifier(mods: KeyModifiers) -> bool {
    mods.intersects(KeyModifiers::CONTROL | KeyModifiers::SUPER | KeyModifiers::META)
}

/// Maps a terminal key press onto an editor event. Ctrl+C and Esc are the
/// host's way out. Without the kitty keyboard protocol a terminal sends
/// Shift+Enter as a bare Enter and Ctrl+Backspace as ^H, so Alt+Enter and
/// Ctrl+J insert a newline and Ctrl+H and Ctrl+W delete a word. Every other
/// ctrl/meta chord is swallowed.
pub(in crate::tui_shell) fn map_key(key: KeyEvent) -> KeyAction {
    let command = has_command_modifier(key.modifiers);

    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => KeyAction::Quit,
        KeyCode::Esc => KeyAction::Quit,
        KeyCode::Char('z' | 'Z') if command => KeyAction::Edit(EditEvent::Undo),
        KeyCode::Char('y' | 'Y') if command => KeyAction::Edit(EditEvent::Redo),
        KeyCode::Backspace if command || key.modifiers.contains(KeyModifiers::ALT) => {
            KeyAction::Edit(EditEvent::WordBackspace)
        }
        KeyCode::Backspace => KeyAction::Edit(EditEvent::Backspace),
        KeyCode::Enter if key.modifiers.intersects(KeyModifiers::SHIFT | KeyModifiers::ALT) => {
            KeyAction::Edit(EditEvent::ShiftEnter)
        }
        KeyCode::Char('j') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            KeyAction::Edit(EditEvent::ShiftEnter)
        }
        KeyCode::Char('h' | 'w') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            KeyAction::Edit(EditEvent::WordBackspace)
        }
        KeyCode::Enter => KeyAction::Edit(EditEvent::Enter),
        KeyCode::Char(_) if command => KeyAction::Ignore,
        KeyCode::Char(c) => KeyAction::Edit(EditEvent::KeyPress(c)),
        _ => KeyAction::Ignore,
    }
}

#[cfg(test)]
#[path = "../../../../tests/tui_shell/key_dispatch_tests.rs"]
mod tests;
