use super::{EntityId, EntityKind, FactionId, Position};

/// Any host entity considered during target resolution.
///
/// Candidates are produced fresh by every resolution call and never cached
/// across ticks.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Candidate {
    pub id: EntityId,
    pub position: Position,
    pub alive: bool,
    /// Faction template of the entity.
    pub faction: FactionId,
    pub kind: EntityKind,
}

impl Candidate {
    pub fn new(id: EntityId, position: Position, kind: EntityKind) -> Self {
        Self {
            id,
            position,
            alive: true,
            faction: FactionId::default(),
            kind,
        }
    }

    pub fn with_faction(mut self, faction: FactionId) -> Self {
        self.faction = faction;
        self
    }

    pub fn dead(mut self) -> Self {
        self.alive = false;
        self
    }

    #[inline]
    pub fn is_player(&self) -> bool {
        self.kind == EntityKind::Player
    }
}

/// Read-only view of a caster at the moment of a cycle.
///
/// Group membership is not part of the view; it is queried through
/// [`GroupOracle`](crate::env::GroupOracle) because the host owns parties.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CasterView {
    pub id: EntityId,
    pub position: Position,
    pub alive: bool,
    pub faction: FactionId,
    pub kind: EntityKind,
    /// Character level, used for duration scaling.
    pub level: u8,
    /// Currently selected target, if any.
    pub selected: Option<EntityId>,
}

impl CasterView {
    /// Creates a living, player-controlled caster with nothing selected.
    pub fn player(id: EntityId, position: Position) -> Self {
        Self {
            id,
            position,
            alive: true,
            faction: FactionId::default(),
            kind: EntityKind::Player,
            level: 1,
            selected: None,
        }
    }

    pub fn with_level(mut self, level: u8) -> Self {
        self.level = level;
        self
    }

    pub fn with_faction(mut self, faction: FactionId) -> Self {
        self.faction = faction;
        self
    }

    pub fn with_kind(mut self, kind: EntityKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn selecting(mut self, target: EntityId) -> Self {
        self.selected = Some(target);
        self
    }

    #[inline]
    pub fn is_player(&self) -> bool {
        self.kind == EntityKind::Player
    }

    /// The caster seen as a target candidate (for SELF and party results).
    pub fn as_candidate(&self) -> Candidate {
        Candidate {
            id: self.id,
            position: self.position,
            alive: self.alive,
            faction: self.faction,
            kind: self.kind,
        }
    }
}
