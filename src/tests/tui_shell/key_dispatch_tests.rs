use super::*;

fn key(code: KeyCode, mods: KeyModifiers) -> KeyEvent {
    KeyEvent::new(code, mods)
}

#[test]
fn ctrl_and_meta_z_undo() {
    assert_eq!(
        map_key(key(KeyCode::Char('z'), KeyModifiers::CONTROL)),
        KeyAction::Edit(EditEvent::Undo)
    );
    assert_eq!(
        map_key(key(KeyCode::Char('z'), KeyModifiers::SUPER)),
        KeyAction::Edit(EditEvent::Undo)
    );
    assert_eq!(
        map_key(key(KeyCode::Char('y'), KeyModifiers::CONTROL)),
        KeyAction::Edit(EditEvent::Redo)
    );
}

#[test]
fn other_command_chords_are_not_inserted() {
    assert_eq!(
        map_key(key(KeyCode::Char('l'), KeyModifiers::CONTROL)),
        KeyAction::Ignore
    );
    assert_eq!(
        map_key(key(KeyCode::Char('t'), KeyModifiers::SUPER)),
        KeyAction::Ignore
    );
}

#[test]
fn printable_keys_insert_including_shifted() {
    assert_eq!(
        map_key(key(KeyCode::Char('a'), KeyModifiers::NONE)),
        KeyAction::Edit(EditEvent::KeyPress('a'))
    );
    assert_eq!(
        map_key(key(KeyCode::Char('A'), KeyModifiers::SHIFT)),
        KeyAction::Edit(EditEvent::KeyPress('A'))
    );
}

#[test]
fn backspace_variants() {
    assert_eq!(
        map_key(key(KeyCode::Backspace, KeyModifiers::NONE)),
        KeyAction::Edit(EditEvent::Backspace)
    );
    assert_eq!(
        map_key(key(KeyCode::Backspace, KeyModifiers::CONTROL)),
        KeyAction::Edit(EditEvent::WordBackspace)
    );
    assert_eq!(
        map_key(key(KeyCode::Backspace, KeyModifiers::ALT)),
        KeyAction::Edit(EditEvent::WordBackspace)
    );
}

#[test]
fn enter_and_shift_enter() {
    assert_eq!(
        map_key(key(KeyCode::Enter, KeyModifiers::NONE)),
        KeyAction::Edit(EditEvent::Enter)
    );
    assert_eq!(
        map_key(key(KeyCode::Enter, KeyModifiers::SHIFT)),
        KeyAction::Edit(EditEvent::ShiftEnter)
    );
}

#[test]
fn host_exits() {
    assert_eq!(
        map_key(key(KeyCode::Char('c'), KeyModifiers::CONTROL)),
        KeyAction::Quit
    );
    assert_eq!(map_key(key(KeyCode::Esc, KeyModifiers::NONE)), KeyAction::Quit);
    assert_eq!(map_key(key(KeyCode::Tab, KeyModifiers::NONE)), KeyAction::Ignore);
}

// Without keyboard enhancement, crossterm decodes 0x08 as Ctrl+H, 0x0A (raw
// mode) as Ctrl+J, and ESC CR as Alt+Enter.
#[test]
fn legacy_terminal_sequences_still_edit() {
    assert_eq!(
        map_key(key(KeyCode::Char('h'), KeyModifiers::CONTROL)),
        KeyAction::Edit(EditEvent::WordBackspace)
    );
    assert_eq!(
        map_key(key(KeyCode::Char('w'), KeyModifiers::CONTROL)),
        KeyAction::Edit(EditEvent::WordBackspace)
    );
    assert_eq!(
        map_key(key(KeyCode::Char('j'), KeyModifiers::CONTROL)),
        KeyAction::Edit(EditEvent::ShiftEnter)
    );
    assert_eq!(
        map_key(key(KeyCode::Enter, KeyModifiers::ALT)),
        KeyAction::Edit(EditEvent::ShiftEnter)
    );
}

#[test]
fn plain_h_w_j_are_still_typed() {
    for c in ['h', 'w', 'j'] {
        assert_eq!(
            map_key(key(KeyCode::Char(c), KeyModifiers::NONE)),
            KeyAction::Edit(EditEvent::KeyPress(c))
        );
    }
}
