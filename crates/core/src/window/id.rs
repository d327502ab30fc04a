use std::fmt;
use std::sync::atomic::{self, AtomicU64};

/// The id of a window (or embedded view) that can show a context menu.
///
/// The embedding application owns the mapping between its native windows and
/// these ids; either let this crate allocate them with [`Id::unique`] or wrap
/// the native handle with [`Id::from_raw`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Id(u64);

static NEXT: AtomicU64 = AtomicU64::new(1);

impl Id {
    /// The id of the first window of the application.
    pub const MAIN: Self = Self(0);

    /// Allocates a new unique [`Id`].
    ///
    /// Allocated ids never collide with [`Id::MAIN`].
    #[must_use]
    pub fn unique() -> Self {
        Self(NEXT.fetch_add(1, atomic::Ordering::Relaxed))
    }

    /// Wraps a raw value handed out by the host.
    #[must_use]
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw value of the [`Id`].
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
