use std::fmt;
use serde::{Deserialize, Serialize};
use crate::models::CombatantId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BattleId(pub u32);

impl fmt::Display for BattleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Battle {
    pub id: BattleId,
    /// The enemy this battle was fought against, if one was recorded
    #[serde(default)]
    pub enemy: Option<CombatantId>,
    /// Experience points awarded for the kill
    #[serde(default)]
    pub experience: u32,
    /// Placeholder battle that collects interactions happening between encounters
    #[serde(default)]
    pub is_default: bool,
}

impl Battle {
    pub fn new(id: u32, enemy: Option<u32>, experience: u32) -> Self {
        Self {
            id: BattleId(id),
            enemy: enemy.map(CombatantId),
            experience,
            is_default: false,
        }
    }

    pub fn placeholder(id: u32) -> Self {
        Self {
            id: BattleId(id),
            enemy: None,
            experience: 0,
            is_default: true,
        }
    }
}
