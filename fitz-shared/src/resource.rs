//! Request state shared by every list and detail screen.

use crate::api::ClientError;

/// Lifecycle of one remote fetch as seen by a screen.
///
/// `Failed` is terminal for the screen instance; there is no retry state.
#[derive(Debug, Clone, PartialEq)]
pub enum RemoteResource<T> {
    Loading,
    Ready(T),
    Failed(String),
}

impl<T> Default for RemoteResource<T> {
    fn default() -> Self {
        Self::Loading
    }
}

impl<T> From<Result<T, ClientError>> for RemoteResource<T> {
    fn from(result: Result<T, ClientError>) -> Self {
        match result {
            Ok(data) => Self::Ready(data),
            Err(error) => Self::Failed(error.to_string()),
        }
    }
}

impl<T> RemoteResource<T> {
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    #[must_use]
    pub const fn data(&self) -> Option<&T> {
        match self {
            Self::Ready(data) => Some(data),
            _ => None,
        }
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Transform the loaded value, keeping loading and failure as they are.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> RemoteResource<U> {
        match self {
            Self::Loading => RemoteResource::Loading,
            Self::Ready(data) => RemoteResource::Ready(f(data)),
            Self::Failed(message) => RemoteResource::Failed(message),
        }
    }
}
