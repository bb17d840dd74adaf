use log::{error, info, warn};

use crate::booking::{BookingDraft, BookingRequest, DraftEdit, RequiredField};
use crate::error::BookingError;
use crate::notifications::{Notice, ToastQueue};

/// Identifies one press of confirm within a dialog instance.
pub type AttemptId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogStatus {
    Closed,
    Idle,
    Submitting { attempt: AttemptId },
}

/// A validated request tagged with the attempt it belongs to.
#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    pub attempt: AttemptId,
    pub request: BookingRequest,
}

/// Result of pressing confirm.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitAttempt {
    /// Validation passed; the request must be sent exactly once.
    Send(Submission),
    /// Nothing is sent; the user gets the missing-fields notice.
    Invalid(Vec<RequiredField>),
    /// Closed or already submitting; no observable effect.
    Ignored,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Booked,
    Failed,
}

impl SubmitOutcome {
    pub fn notice(&self) -> Notice {
        match self {
            SubmitOutcome::Booked => Notice::BOOKED,
            SubmitOutcome::Failed => Notice::FAILED,
        }
    }

    pub fn closes_dialog(&self) -> bool {
        matches!(self, SubmitOutcome::Booked)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConfirmButtonState {
    pub enabled: bool,
    pub busy: bool,
    pub label: &'static str,
}

/// Owns the draft and the open/submitting status of one dialog instance.
#[derive(Debug, Clone, PartialEq)]
pub struct DialogController {
    draft: BookingDraft,
    status: DialogStatus,
    next_attempt: AttemptId,
}

impl DialogController {
    pub fn new(is_open: bool) -> Self {
        Self {
            draft: BookingDraft::default(),
            status: if is_open {
                DialogStatus::Idle
            } else {
                DialogStatus::Closed
            },
            next_attempt: 0,
        }
    }

    pub fn draft(&self) -> &BookingDraft {
        &self.draft
    }

    #[cfg(test)]
    pub fn status(&self) -> DialogStatus {
        self.status
    }

    /// What an open dialog shows. A closed controller shows a fresh draft so a
    /// reopened dialog never renders the previous draft before it is synced.
    pub fn as_shown(&self) -> DialogController {
        match self.status {
            DialogStatus::Closed => DialogController {
                next_attempt: self.next_attempt,
                ..DialogController::new(true)
            },
            _ => self.clone(),
        }
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self.status, DialogStatus::Submitting { .. })
    }

    /// Follows the externally controlled `is_open` flag. Opening starts a fresh draft.
    pub fn sync_visibility(&mut self, is_open: bool) {
        match (self.status, is_open) {
            (DialogStatus::Closed, true) => {
                info!("Booking dialog opened");
                self.draft = BookingDraft::default();
                self.status = DialogStatus::Idle;
            }
            (DialogStatus::Idle | DialogStatus::Submitting { .. }, false) => {
                info!("Booking dialog closed");
                self.status = DialogStatus::Closed;
            }
            _ => {}
        }
    }

    pub fn update(&mut self, edit: DraftEdit) {
        if self.status == DialogStatus::Closed {
            return;
        }
        self.draft = std::mem::take(&mut self.draft).apply(edit);
    }

    pub fn confirm_button(&self, slot_id: Option<&str>) -> ConfirmButtonState {
        let busy = self.is_submitting();
        ConfirmButtonState {
            enabled: self.draft.is_submittable(slot_id),
            busy,
            label: if busy { "Booking..." } else { "Confirm" },
        }
    }

    pub fn begin_submit(&mut self, slot_id: Option<&str>) -> SubmitAttempt {
        if self.status != DialogStatus::Idle {
            return SubmitAttempt::Ignored;
        }

        match self.draft.to_request(slot_id) {
            Ok(request) => {
                let attempt = self.next_attempt;
                self.next_attempt += 1;
                self.status = DialogStatus::Submitting { attempt };
                SubmitAttempt::Send(Submission { attempt, request })
            }
            Err(missing) => {
                warn!("{}", BookingError::Validation(missing.clone()));
                SubmitAttempt::Invalid(missing)
            }
        }
    }

    /// Leaves the submitting state for `attempt`. Returns `None` when that
    /// attempt is no longer the one in flight (the dialog was closed, and
    /// possibly reopened, while it was outstanding).
    pub fn complete_submit(
        &mut self,
        attempt: AttemptId,
        result: Result<(), BookingError>,
    ) -> Option<SubmitOutcome> {
        if self.status != (DialogStatus::Submitting { attempt }) {
            info!("Ignoring stale booking result for attempt {}: {:?}", attempt, result);
            return None;
        }
        self.status = DialogStatus::Idle;

        match result {
            Ok(()) => Some(SubmitOutcome::Booked),
            Err(e) => {
                error!("Error booking appointment: {}", e);
                Some(SubmitOutcome::Failed)
            }
        }
    }
}

/// Confirm handler: starts an attempt or queues the missing-fields notice.
pub fn start_submission(
    controller: &mut DialogController,
    toasts: &mut ToastQueue,
    slot_id: Option<&str>,
) -> Option<Submission> {
    match controller.begin_submit(slot_id) {
        SubmitAttempt::Send(submission) => {
            info!(
                "Submitting booking for slot {} (attempt {})",
                submission.request.time_slot_id, submission.attempt
            );
            Some(submission)
        }
        SubmitAttempt::Invalid(_) => {
            toasts.push(Notice::MISSING_FIELDS);
            None
        }
        SubmitAttempt::Ignored => None,
    }
}

/// Applies a finished request to the dialog. Returns true when the dialog
/// should ask its host to close it.
pub fn finish_submission(
    controller: &mut DialogController,
    toasts: &mut ToastQueue,
    attempt: AttemptId,
    result: Result<(), BookingError>,
) -> bool {
    match controller.complete_submit(attempt, result) {
        Some(outcome) => {
            toasts.push(outcome.notice());
            outcome.closes_dialog()
        }
        None => false,
    }
}
