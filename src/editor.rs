//! The typed line plus bounded undo/redo snapshot stacks.
//!
//! All editing goes through [`apply`], which consumes the state and an event
//! and hands back the next state, so the host only has to map its raw input
//! onto [`EditEvent`].

use std::collections::VecDeque;

pub const UNDO_LIMIT: usize = 200;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EditEvent {
    KeyPress(char),
    Backspace,
    /// Backspace with ctrl/meta held: deletes the trailing word.
    WordBackspace,
    Enter,
    ShiftEnter,
    Undo,
    Redo,
    Paste(String),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EditorState {
    buffer: String,
    undo: VecDeque<String>,
    redo: Vec<String>,
}

#[derive(Debug)]
pub struct Transition {
    pub state: EditorState,
    /// Trimmed, non-empty line produced by Enter.
    pub submitted: Option<String>,
}

impl EditorState {
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    pub fn undo_depth(&self) -> usize {
        self.undo.len()
    }

    pub fn redo_depth(&self) -> usize {
        self.redo.len()
    }

    fn push_undo(&mut self, snapshot: String) {
        self.undo.push_back(snapshot);
        while self.undo.len() > UNDO_LIMIT {
            self.undo.pop_front();
        }
    }

    /// Snapshot before a buffer mutation.
    fn checkpoint(&mut self) {
        self.push_undo(self.buffer.clone());
        self.redo.clear();
    }
}

pub fn apply(mut state: EditorState, event: EditEvent) -> Transition {
    let mut submitted = None;

    match event {
        EditEvent::Undo => {
            if let Some(prev) = state.undo.pop_back() {
                let cur = std::mem::replace(&mut state.buffer, prev);
                state.redo.push(cur);
            }
        }
        EditEvent::Redo => {
            if let Some(next) = state.redo.pop() {
                let cur = std::mem::replace(&mut state.buffer, next);
                state.push_undo(cur);
            }
        }
        EditEvent::Backspace => {
            if !state.buffer.is_empty() {
                state.checkpoint();
                state.buffer.pop();
            }
        }
        EditEvent::WordBackspace => {
            if !state.buffer.is_empty() {
                state.checkpoint();
                let keep = delete_word_len(&state.buffer);
                state.buffer.truncate(keep);
            }
        }
        EditEvent::ShiftEnter => {
            state.checkpoint();
            state.buffer.push('\n');
        }
        EditEvent::Enter => {
            let line = state.buffer.trim();
            if !line.is_empty() {
                submitted = Some(line.to_string());
            }
            state = EditorState::default();
        }
        EditEvent::KeyPress(c) => {
            state.checkpoint();
            state.buffer.push(c);
        }
        EditEvent::Paste(text) => {
            state.checkpoint();
            state.buffer.push_str(&text);
        }
    }

    Transition { state, submitted }
}

/// Byte length of `s` after dropping trailing whitespace and then the
/// trailing run of non-whitespace.
fn delete_word_len(s: &str) -> usize {
    let trimmed = s.trim_end();
    trimmed.trim_end_matches(|c: char| !c.is_whitespace()).len()
}

#[cfg(test)]
#[path = "tests/editor_tests.rs"]
mod tests;
