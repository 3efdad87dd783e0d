use reqwest::StatusCode;
use thiserror::Error;

use crate::{session::StorageError, validation::FieldErrors};

/// Everything that can go wrong between a screen and the remote API.
///
/// `Display` is the message shown to the user in place of the screen's
/// content.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The request never produced a response.
    #[error("An error occurred while contacting the server")]
    Network(#[from] reqwest::Error),

    /// The server answered with a non-2xx status.
    #[error("{message}")]
    Server { status: u16, message: String },

    /// A 2xx response whose body did not match the expected shape.
    #[error("Unexpected response from the server")]
    Decode(#[from] serde_json::Error),

    /// The form failed client-side validation; nothing was sent.
    #[error("{0}")]
    Validation(#[from] FieldErrors),

    /// The log-workout screen was opened without a routine hand-off.
    #[error("No routine selected")]
    NoRoutineSelected,

    /// The start-workout screen was submitted without choosing a routine.
    #[error("Please select a routine")]
    RoutineNotChosen,

    #[error("Please log in to continue")]
    NotAuthenticated,

    /// One or both dashboard aggregates failed.
    #[error("Failed to fetch dashboard data")]
    DashboardUnavailable,

    #[error("Failed to save the session: {0}")]
    Storage(#[from] StorageError),
}

impl ClientError {
    /// HTTP status of a server rejection.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Server { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// True when the server rejected the bearer token.
    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(StatusCode::UNAUTHORIZED.as_u16())
    }
}
