//! Outcome of a call whose transport and decoding both succeeded.

/// Either the decoded body of a 2xx response, or the status of a response
/// that was not read because it was not a success.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply<T> {
    Success(T),
    NonSuccess { status: u16 },
}

impl<T> Reply<T> {
    pub fn is_success(&self) -> bool {
        matches!(self, Reply::Success(_))
    }

    /// The status of a non-success reply. `None` for `Success`.
    pub fn status(&self) -> Option<u16> {
        match self {
            Reply::Success(_) => None,
            Reply::NonSuccess { status } => Some(*status),
        }
    }

    pub fn ok(self) -> Option<T> {
        match self {
            Reply::Success(value) => Some(value),
            Reply::NonSuccess { .. } => None,
        }
    }
}

impl<T: Default> Reply<T> {
    /// Collapse a non-success reply into `T::default()`.
    ///
    /// This loses the distinction between 404, 204 and 500; use the
    /// `Reply` itself where that matters.
    pub fn into_value_or_default(self) -> T {
        self.ok().unwrap_or_default()
    }
}
