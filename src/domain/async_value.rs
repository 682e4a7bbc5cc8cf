//! Values that are fetched asynchronously.

// ============================================================================
// AsyncValue
// ============================================================================

/// A value whose availability passes through load states before settling.
///
/// `Reloading` keeps the previously loaded value (if any) so views that want
/// to can keep showing it while a refresh is in flight.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AsyncValue<T> {
    /// Nothing has been requested yet.
    #[default]
    Pending,
    /// First load in flight.
    Loading,
    /// Refresh in flight, with the previous value if one was loaded.
    Reloading(Option<T>),
    /// Settled with a value.
    Successful(T),
    /// Settled with an error description.
    Failed(String),
}

impl<T> AsyncValue<T> {
    /// Returns the loaded value, including the cached value while reloading.
    #[must_use]
    pub fn data(&self) -> Option<&T> {
        match self {
            Self::Successful(value) | Self::Reloading(Some(value)) => Some(value),
            _ => None,
        }
    }

    /// Returns `true` once the value has settled (successfully or not).
    #[must_use]
    pub const fn is_settled(&self) -> bool {
        matches!(self, Self::Successful(_) | Self::Failed(_))
    }

    /// Returns `true` for the successful state only.
    #[must_use]
    pub const fn is_successful(&self) -> bool {
        matches!(self, Self::Successful(_))
    }

    /// Moves into the next in-flight state: `Reloading` when a value was
    /// already loaded, `Loading` otherwise.
    #[must_use]
    pub fn into_refreshing(self) -> Self {
        match self {
            Self::Successful(value) | Self::Reloading(Some(value)) => Self::Reloading(Some(value)),
            Self::Reloading(None) => Self::Reloading(None),
            Self::Pending | Self::Loading | Self::Failed(_) => Self::Loading,
        }
    }

    /// Returns a short label for the state, used in logs.
    #[must_use]
    pub const fn status(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Loading => "loading",
            Self::Reloading(_) => "reloading",
            Self::Successful(_) => "successful",
            Self::Failed(_) => "failed",
        }
    }
}

impl<T, E: std::fmt::Display> From<Result<T, E>> for AsyncValue<T> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Successful(value),
            Err(e) => Self::Failed(e.to_string()),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
