use std::collections::HashMap;
use crate::models::{Battle, BattleId};

/// Supplies the base XP a battle counts for when grouping mobs by XP tier.
pub trait XpLookup {
    fn base_xp(&self, battle: &Battle) -> Option<u32>;
}

/// Uses the experience recorded on the battle itself.
#[derive(Debug, Default, Clone, Copy)]
pub struct RecordedXp;

impl XpLookup for RecordedXp {
    fn base_xp(&self, battle: &Battle) -> Option<u32> {
        Some(battle.experience)
    }
}

/// Precomputed base XP per battle; battles missing from the map have no tier.
impl XpLookup for HashMap<BattleId, u32> {
    fn base_xp(&self, battle: &Battle) -> Option<u32> {
        self.get(&battle.id).copied()
    }
}
