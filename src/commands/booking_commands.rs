use crate::dialog_state::Submission;

/// Commands sent from the dialog UI to its submission coroutine
#[derive(Debug, Clone)]
pub enum BookingCommand {
    /// Send a validated booking request to the backend, once
    Submit {
        submission: Submission,
    },
}
