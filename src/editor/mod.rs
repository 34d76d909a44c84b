//! Inline edit session control.
//!
//! At most one edit session exists system-wide. The controller is the state
//! machine that owns it:
//!
//! ```text
//! Idle --begin_edit--> Editing --commit/blur--> Committing --resolve(ok)--> Idle
//!                        |  ^                        |
//!                        |  +-----resolve(err)-------+   (draft retained)
//!                        +--cancel--> Idle
//! ```
//!
//! The commit is split-phase: `commit()` freezes the draft and hands out a
//! [`CommitRequest`] for the persistence collaborator; the host feeds the
//! outcome back through `resolve_commit()`. Between the two, input is
//! suspended and the draft is frozen. That is how a single-threaded
//! cooperative host drives an arbitrarily slow collaborator; the wasm
//! surface performs the actual `await` at one suspension point.

mod input;

pub use input::EditInput;

use serde::Serialize;

use crate::error::GridError;
use crate::store::RowStore;
use crate::types::{Field, RowId};

/// A single cell edit in progress.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EditSession {
    pub row_id: RowId,
    /// Always an editable field; non-editable targets never open a session.
    pub field: Field,
    /// Current draft text. Replaced on every keystroke, frozen while a
    /// commit is in flight.
    pub draft: String,
}

/// Externally visible lifecycle phase of the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EditPhase {
    Idle,
    Editing,
    Committing,
}

/// Payload handed to the persistence collaborator when a commit starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitRequest {
    pub row_id: RowId,
    pub field: Field,
    pub value: String,
}

/// What the persistence collaborator reported back.
pub type CommitOutcome = Result<(), GridError>;

#[derive(Debug, Default)]
enum State {
    #[default]
    Idle,
    Editing(EditSession),
    Committing(EditSession),
}

/// State machine owning the (at most one) in-flight edit.
#[derive(Debug, Default)]
pub struct EditController {
    state: State,
    /// Edit target requested while another session was open; opened once
    /// that session's commit succeeds, dropped if it fails.
    deferred: Option<(RowId, Field)>,
}

impl EditController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> EditPhase {
        match self.state {
            State::Idle => EditPhase::Idle,
            State::Editing(_) => EditPhase::Editing,
            State::Committing(_) => EditPhase::Committing,
        }
    }

    /// The open session, if any.
    pub fn session(&self) -> Option<&EditSession> {
        match &self.state {
            State::Idle => None,
            State::Editing(s) | State::Committing(s) => Some(s),
        }
    }

    /// True while a commit is in flight; the host shows its pending
    /// indicator and suspends editor input.
    pub fn is_saving(&self) -> bool {
        matches!(self.state, State::Committing(_))
    }

    /// Start editing a cell.
    ///
    /// A non-editable field or an unknown row id is a silent no-op, never
    /// an error: such requests can only come from stale presentation state.
    /// While a session is open on another cell this behaves like a blur:
    /// the open session commits first (the returned request must be
    /// dispatched) and the new target is deferred until that commit
    /// succeeds. Refused outright while a commit is in flight.
    pub fn begin_edit(
        &mut self,
        store: &RowStore,
        row_id: RowId,
        field: Field,
    ) -> Option<CommitRequest> {
        if !field.is_editable() {
            return None;
        }
        match &self.state {
            State::Idle => {
                let Some(row) = store.get(row_id) else {
                    return None;
                };
                self.state = State::Editing(EditSession {
                    row_id,
                    field,
                    draft: row.field_text(field),
                });
                None
            }
            State::Editing(open) if open.row_id == row_id && open.field == field => None,
            State::Editing(_) => {
                if store.get(row_id).is_some() {
                    self.deferred = Some((row_id, field));
                }
                self.commit()
            }
            State::Committing(_) => None,
        }
    }

    /// Replace the draft text. Only meaningful while Editing; keystrokes
    /// arriving while a commit is in flight are dropped, the submitted
    /// draft must not change under the collaborator.
    pub fn update_draft(&mut self, text: &str) {
        if let State::Editing(session) = &mut self.state {
            session.draft = text.to_string();
        }
    }

    /// Submit the draft: Editing moves to Committing and the request for
    /// the persistence collaborator is returned. The store stays untouched
    /// until `resolve_commit`. Anywhere else this is a no-op.
    pub fn commit(&mut self) -> Option<CommitRequest> {
        match std::mem::take(&mut self.state) {
            State::Editing(session) => {
                let request = CommitRequest {
                    row_id: session.row_id,
                    field: session.field,
                    value: session.draft.clone(),
                };
                self.state = State::Committing(session);
                Some(request)
            }
            other => {
                self.state = other;
                None
            }
        }
    }

    /// Abandon the open session without touching the store. Inert unless
    /// Editing; an in-flight commit cannot be aborted.
    pub fn cancel(&mut self) {
        if matches!(self.state, State::Editing(_)) {
            self.state = State::Idle;
        }
    }

    /// Loss-of-focus signal from the presentation layer: commit-on-blur.
    pub fn blur(&mut self) -> Option<CommitRequest> {
        self.commit()
    }

    /// Map a raw editor input to the corresponding transition.
    pub fn handle_input(&mut self, input: EditInput) -> Option<CommitRequest> {
        match input {
            EditInput::Confirm => self.commit(),
            EditInput::Abort => {
                self.cancel();
                None
            }
            EditInput::Draft(text) => {
                self.update_draft(&text);
                None
            }
        }
    }

    /// Feed the persistence outcome back into the machine.
    ///
    /// Success applies the frozen draft to the store (a stale row id makes
    /// that a no-op), destroys the session and opens any deferred edit
    /// target. Failure resumes Editing with the draft intact so the user
    /// can retry or cancel; the deferred target is dropped. Returns whether
    /// the store changed.
    pub fn resolve_commit(&mut self, store: &mut RowStore, outcome: CommitOutcome) -> bool {
        match std::mem::take(&mut self.state) {
            State::Committing(session) => match outcome {
                Ok(()) => {
                    let changed = store.replace_field(session.row_id, session.field, &session.draft);
                    self.state = State::Idle;
                    if let Some((row_id, field)) = self.deferred.take() {
                        let _ = self.begin_edit(store, row_id, field);
                    }
                    changed
                }
                Err(_) => {
                    self.deferred = None;
                    self.state = State::Editing(session);
                    false
                }
            },
            other => {
                self.state = other;
                false
            }
        }
    }
}
