//! Outcome of a single network action.

use std::fmt;

/// Lifecycle of one request, as shown to the user.
///
/// There is no retry: a failed request is terminal and the user starts a
/// new one.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestState<T> {
    Pending,
    Succeeded(T),
    Failed(String),
}

impl<T> RequestState<T> {
    pub fn from_result<E: fmt::Display>(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => RequestState::Succeeded(value),
            Err(e) => RequestState::Failed(e.to_string()),
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, RequestState::Pending)
    }

    pub fn is_succeeded(&self) -> bool {
        matches!(self, RequestState::Succeeded(_))
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, RequestState::Failed(_))
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            RequestState::Succeeded(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            RequestState::Failed(reason) => Some(reason),
            _ => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> RequestState<U> {
        match self {
            RequestState::Pending => RequestState::Pending,
            RequestState::Succeeded(value) => RequestState::Succeeded(f(value)),
            RequestState::Failed(reason) => RequestState::Failed(reason),
        }
    }
}
