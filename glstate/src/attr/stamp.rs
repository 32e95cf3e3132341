use std::sync::atomic::{AtomicU64, Ordering};

/// Shared by every cell in the process. Starts at zero so the first stamp
/// handed out is 1 and zero stays free for [`VersionStamp::NEVER`].
static CHANGE_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Version stamp of a single write to a versioned attribute.
///
/// Stamps are strictly increasing for the lifetime of the process: if write A
/// happens before write B (on any cell), `A.stamp() < B.stamp()`. A stamp is
/// never handed out twice, so equal stamps imply identical content.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VersionStamp(u64);

impl VersionStamp {
    /// Stamp of a cell that has never been set
    pub const NEVER: Self = Self(0);

    /// Take the next stamp from the process-wide counter
    #[inline]
    pub fn next() -> Self {
        Self(CHANGE_COUNTER.fetch_add(1, Ordering::Relaxed) + 1)
    }

    #[inline]
    pub fn is_never(self) -> bool {
        self == Self::NEVER
    }

    /// Raw counter value
    #[inline]
    pub fn get(self) -> u64 {
        self.0
    }
}
