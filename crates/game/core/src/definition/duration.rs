/// Level-scaled maximum duration of a channeled effect.
///
/// A caster below `min_level` gets `base_ms`, above `max_level` gets
/// `max_ms`, and in between the duration grows by `per_level_ms` per level
/// past `min_level`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DurationScaling {
    pub base_ms: u32,
    /// Zero means the effect keeps the host's own duration.
    pub max_ms: u32,
    pub per_level_ms: u32,
    pub min_level: u8,
    pub max_level: u8,
}

impl DurationScaling {
    /// Fixed duration regardless of level.
    pub const fn fixed(duration_ms: u32) -> Self {
        Self {
            base_ms: duration_ms,
            max_ms: duration_ms,
            per_level_ms: 0,
            min_level: 0,
            max_level: u8::MAX,
        }
    }

    /// Returns the maximum duration for a caster of `level`, or `None` when
    /// the host's own duration applies.
    pub fn max_duration_ms(&self, level: u8) -> Option<u32> {
        if self.max_ms == 0 {
            return None;
        }
        if self.base_ms == self.max_ms {
            return Some(self.max_ms);
        }
        if level < self.min_level {
            return Some(self.base_ms);
        }
        if level > self.max_level || self.per_level_ms == 0 {
            return Some(self.max_ms);
        }

        let levels = u32::from(level - self.min_level);
        Some(
            self.per_level_ms
                .saturating_mul(levels)
                .saturating_add(self.base_ms),
        )
    }
}
