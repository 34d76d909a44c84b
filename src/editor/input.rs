//! Input trigger mapping for the edit session.
//!
//! The presentation layer forwards raw user input; this is the one place
//! that decides what it means for an open session. An explicit confirm
//! commits, an explicit abort cancels, anything else replaces the draft.

/// A user input directed at the open edit session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditInput {
    /// Confirm control (Enter): submit the draft.
    Confirm,
    /// Abort control (Escape): discard the session.
    Abort,
    /// Replacement draft text from the input element.
    Draft(String),
}

impl EditInput {
    /// Map a keyboard key name (DOM `KeyboardEvent.key`) to a session
    /// input. Keys other than the confirm/abort controls are not handled
    /// here; their effect arrives later as a [`EditInput::Draft`] with the
    /// input element's new value.
    pub fn from_key(key: &str) -> Option<EditInput> {
        match key {
            "Enter" => Some(EditInput::Confirm),
            "Escape" | "Esc" => Some(EditInput::Abort),
            _ => None,
        }
    }
}
