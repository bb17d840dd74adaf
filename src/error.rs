use crate::booking::RequiredField;

/// Errors that can occur while booking an appointment
#[derive(Debug, thiserror::Error)]
pub enum BookingError {
    #[error("missing required fields: {}", join_fields(.0))]
    Validation(Vec<RequiredField>),

    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("booking endpoint returned {status}: {body}")]
    Rejected { status: u16, body: String },

    #[error("booking request interrupted: {0}")]
    Interrupted(String),
}

fn join_fields(fields: &[RequiredField]) -> String {
    fields
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
