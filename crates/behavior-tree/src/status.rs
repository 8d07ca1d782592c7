//! Status returned by behavior nodes.

/// The result of executing a behavior node.
///
/// Every execution runs to completion within a single call, so there is no
/// `Running` state: a node either succeeded or failed. `Status` converts
/// losslessly to and from `bool` (`Success` is `true`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    /// The node completed successfully.
    ///
    /// For conditions: The condition was met.
    /// For actions: The action was carried out.
    Success,

    /// The node failed.
    ///
    /// For conditions: The condition was not met.
    /// For actions: The action could not be completed.
    Failure,
}

impl Status {
    /// Returns `true` if this status is `Success`.
    #[inline]
    pub fn is_success(self) -> bool {
        matches!(self, Status::Success)
    }

    /// Returns `true` if this status is `Failure`.
    #[inline]
    pub fn is_failure(self) -> bool {
        matches!(self, Status::Failure)
    }
}

impl From<bool> for Status {
    #[inline]
    fn from(value: bool) -> Self {
        if value {
            Status::Success
        } else {
            Status::Failure
        }
    }
}

impl From<Status> for bool {
    #[inline]
    fn from(status: Status) -> Self {
        status.is_success()
    }
}
