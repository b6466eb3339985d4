use std::fmt;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CombatantId(pub u32);

impl fmt::Display for CombatantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Role of a combatant. The declaration order is the roster sort order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CombatantKind {
    Player,
    Pet,
    CharmedMob,
    Fellow,
    EnemyMob,
}

impl CombatantKind {
    /// Enemy mobs never get a report block of their own.
    pub fn is_reportable(self) -> bool {
        !matches!(self, CombatantKind::EnemyMob)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Combatant {
    pub id: CombatantId,
    pub name: String,
    pub kind: CombatantKind,
    #[serde(default)]
    pub notes: Option<String>,
}

impl Combatant {
    pub fn new(id: u32, name: impl Into<String>, kind: CombatantKind) -> Self {
        Self {
            id: CombatantId(id),
            name: name.into(),
            kind,
            notes: None,
        }
    }
}
