//! Uniform state for data fetched over the network.

/// Lifecycle of a remotely fetched document.
///
/// Every fetch-backed widget consumes this one shape instead of juggling
/// ad-hoc loading flags and error strings.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Remote<T> {
    /// Fetch not yet settled.
    #[default]
    Loading,
    /// Fetch succeeded.
    Ready(T),
    /// Fetch failed terminally (no retries anywhere in the app).
    Failed(String),
}

impl<T> Remote<T> {
    /// The payload, if the fetch has succeeded.
    pub fn ready(&self) -> Option<&T> {
        match self {
            Self::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ready_payload_is_accessible() {
        let state = Remote::Ready(vec![1, 2]);
        assert_eq!(state.ready(), Some(&vec![1, 2]));
        assert!(!state.is_loading());
    }

    #[test]
    fn default_is_loading() {
        let state: Remote<()> = Remote::default();
        assert!(state.is_loading());
        assert_eq!(state.ready(), None);
    }
}
