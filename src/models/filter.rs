use std::collections::BTreeSet;
use serde::{Deserialize, Serialize};
use crate::models::BattleId;

/// XP tier of a mob group. `Any` and `Exact` are separate selections: a mob
/// picked with `Any` merges every XP value it was ever killed for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum XpTier {
    Any,
    Exact(u32),
}

/// Which encounters are in scope for a report. Exactly one mode is active.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum MobFilter {
    AllMobs { exclude_zero_xp: bool },
    GroupedByNameAndXp { mob_name: String, xp_tier: XpTier },
    SingleBattle { battle_id: BattleId },
    CustomSet { battle_ids: BTreeSet<BattleId> },
}

impl Default for MobFilter {
    fn default() -> Self {
        MobFilter::AllMobs { exclude_zero_xp: false }
    }
}

impl MobFilter {
    pub fn mob(name: impl Into<String>, xp_tier: XpTier) -> Self {
        MobFilter::GroupedByNameAndXp { mob_name: name.into(), xp_tier }
    }

    pub fn battles(ids: impl IntoIterator<Item = u32>) -> Self {
        MobFilter::CustomSet {
            battle_ids: ids.into_iter().map(BattleId).collect(),
        }
    }

    /// A selection that can never match anything.
    pub fn is_empty_selection(&self) -> bool {
        match self {
            MobFilter::GroupedByNameAndXp { mob_name, .. } => mob_name.is_empty(),
            MobFilter::CustomSet { battle_ids } => battle_ids.is_empty(),
            MobFilter::AllMobs { .. } | MobFilter::SingleBattle { .. } => false,
        }
    }
}
