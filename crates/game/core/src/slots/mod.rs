//! Per-caster concurrency limit on channeled effects.
//!
//! Each caster owns a [`SlotQueue`] ordered by start time. When a new effect
//! would exceed the configured capacity, the oldest entries are evicted until
//! it fits. The [`SlotManager`] owns every queue; callers end evicted effects
//! through the host.
mod manager;
mod queue;

use std::num::NonZeroU32;

pub use manager::{Admission, SlotManager};
pub use queue::SlotQueue;

/// Maximum number of concurrently sustained effects per caster.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum SlotCapacity {
    /// No cap. Effects are still recorded.
    #[default]
    Unlimited,
    Bounded(NonZeroU32),
}

impl SlotCapacity {
    /// Maps a configured limit to a capacity; zero means unlimited.
    pub fn from_limit(limit: u32) -> Self {
        match NonZeroU32::new(limit) {
            Some(limit) => Self::Bounded(limit),
            None => Self::Unlimited,
        }
    }

    /// Returns true if a queue holding `len` effects is within capacity.
    #[inline]
    pub fn allows(self, len: usize) -> bool {
        match self {
            Self::Unlimited => true,
            Self::Bounded(limit) => len <= limit.get() as usize,
        }
    }

    pub fn limit(self) -> Option<u32> {
        match self {
            Self::Unlimited => None,
            Self::Bounded(limit) => Some(limit.get()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_limit_is_unlimited() {
        assert_eq!(SlotCapacity::from_limit(0), SlotCapacity::Unlimited);
        assert!(SlotCapacity::Unlimited.allows(usize::MAX));
    }

    #[test]
    fn bounded_capacity_is_inclusive() {
        let capacity = SlotCapacity::from_limit(2);
        assert_eq!(capacity.limit(), Some(2));
        assert!(capacity.allows(2));
        assert!(!capacity.allows(3));
    }
}
