//! Confirmation flow protecting unsaved edits.
//!
//! Any action that would throw the current document away (new, open, quit,
//! window close) asks `guard_discard` first and must not proceed on `Abort`.

use crate::app::ports::SaveChoice;

pub const UNSAVED_CHANGES_PROMPT: &str =
    "The document has been modified.\nDo you want to save your changes?";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardOutcome {
    Proceed,
    Abort,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    Saved,
    /// The user dismissed the save-as dialog.
    Cancelled,
    Failed,
}

/// What the guard needs from its caller.
pub trait DiscardHost {
    fn is_dirty(&self) -> bool;
    fn ask_save(&mut self, message: &str) -> SaveChoice;
    fn save(&mut self) -> SaveOutcome;
}

/// Decide whether a discarding action may go ahead.
///
/// A save that fails or is cancelled aborts the action, so edits are never
/// lost behind a save the user believes succeeded.
pub fn guard_discard<H: DiscardHost + ?Sized>(host: &mut H) -> GuardOutcome {
    if !host.is_dirty() {
        return GuardOutcome::Proceed;
    }

    let choice = host.ask_save(UNSAVED_CHANGES_PROMPT);
    log::debug!("Unsaved changes prompt answered with {:?}", choice);

    match choice {
        SaveChoice::Save => match host.save() {
            SaveOutcome::Saved => GuardOutcome::Proceed,
            outcome => {
                log::info!("Discard aborted: save ended with {:?}", outcome);
                GuardOutcome::Abort
            }
        },
        SaveChoice::Discard => GuardOutcome::Proceed,
        SaveChoice::Cancel => GuardOutcome::Abort,
    }
}
