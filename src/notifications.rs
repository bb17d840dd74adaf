use std::time::Duration;
use uuid::Uuid;

pub const NOTICE_DURATION: Duration = Duration::from_millis(3000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
}

impl Severity {
    /// (accent, background) colors
    pub fn colors(&self) -> (&'static str, &'static str) {
        match self {
            Severity::Success => ("#059669", "#F0FDF4"),
            Severity::Error => ("#DC2626", "#FEF2F2"),
        }
    }
}

/// A message for the user, shown as a transient toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Notice {
    pub title: &'static str,
    pub description: Option<&'static str>,
    pub severity: Severity,
    pub duration: Duration,
}

impl Notice {
    pub const MISSING_FIELDS: Notice = Notice {
        title: "All fields are required!",
        description: None,
        severity: Severity::Error,
        duration: NOTICE_DURATION,
    };

    pub const BOOKED: Notice = Notice {
        title: "Booking Confirmed!",
        description: Some("Your slot has been booked successfully."),
        severity: Severity::Success,
        duration: NOTICE_DURATION,
    };

    pub const FAILED: Notice = Notice {
        title: "Something went wrong!",
        description: Some("Please try again later."),
        severity: Severity::Error,
        duration: NOTICE_DURATION,
    };
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: Uuid,
    pub notice: Notice,
}

/// Toasts currently on screen, oldest first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToastQueue {
    toasts: Vec<Toast>,
}

impl ToastQueue {
    pub fn push(&mut self, notice: Notice) -> Uuid {
        let id = Uuid::new_v4();
        self.toasts.push(Toast { id, notice });
        id
    }

    /// Removes a toast. Dismissing an unknown id is a no-op.
    pub fn dismiss(&mut self, id: Uuid) {
        self.toasts.retain(|t| t.id != id);
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}
