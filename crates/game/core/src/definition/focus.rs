//! Instrument focus boosts.
//!
//! A caster may hold focus auras that amplify effects of a matching family.
//! Boosts add up and are applied multiplicatively, rounding up.

/// Instrument family an effect draws its boost from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[derive(strum::Display, strum::IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FocusFamily {
    Brass,
    Stringed,
    Wind,
    Percussion,
    Singing,
}

/// Kind of focus aura held by a caster.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[derive(strum::Display, strum::IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FocusAuraKind {
    Brass,
    Stringed,
    Wind,
    Percussion,
    /// Boosts every family, and is the only boost for singing.
    All,
}

/// One focus aura on a caster.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FocusAura {
    pub kind: FocusAuraKind,
    pub percent: u32,
}

impl FocusAura {
    pub const fn new(kind: FocusAuraKind, percent: u32) -> Self {
        Self { kind, percent }
    }
}

impl FocusFamily {
    /// Returns true if an aura of `kind` boosts this family.
    pub fn is_boosted_by(self, kind: FocusAuraKind) -> bool {
        match (self, kind) {
            (_, FocusAuraKind::All) => true,
            (FocusFamily::Brass, FocusAuraKind::Brass)
            | (FocusFamily::Stringed, FocusAuraKind::Stringed)
            | (FocusFamily::Wind, FocusAuraKind::Wind)
            | (FocusFamily::Percussion, FocusAuraKind::Percussion) => true,
            _ => false,
        }
    }
}

/// Sums the percents of every aura that boosts `family`.
pub fn focus_boost_percent(family: FocusFamily, auras: &[FocusAura]) -> u32 {
    auras
        .iter()
        .filter(|aura| family.is_boosted_by(aura.kind))
        .fold(0u32, |total, aura| total.saturating_add(aura.percent))
}

/// Scales `amount` by `1 + percent / 100`, rounding up (toward positive infinity).
pub fn apply_focus_boost(amount: i32, percent: u32) -> i32 {
    if percent == 0 {
        return amount;
    }
    let scaled = i64::from(amount).saturating_mul(100 + i64::from(percent));
    // Integer division truncates toward zero, which is already the ceiling
    // for negative values.
    let boosted = if scaled >= 0 {
        scaled.saturating_add(99) / 100
    } else {
        scaled / 100
    };
    boosted.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}
