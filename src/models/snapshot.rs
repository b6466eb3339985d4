use std::collections::HashMap;
use serde::{Deserialize, Serialize};
use crate::error::Result;
use crate::models::{Battle, BattleId, Combatant, CombatantId, Interaction};

/// On-disk shape of a snapshot.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct SnapshotData {
    #[serde(default)]
    pub combatants: Vec<Combatant>,
    #[serde(default)]
    pub battles: Vec<Battle>,
    #[serde(default)]
    pub interactions: Vec<Interaction>,
}

/// Read-only view of combatants, battles and interactions with id indexes.
///
/// Interactions are kept ordered by timestamp. References to ids that are not
/// in the snapshot are kept as-is and simply fail to resolve.
#[derive(Debug, Default, Clone)]
pub struct LogSnapshot {
    combatants: Vec<Combatant>,
    battles: Vec<Battle>,
    interactions: Vec<Interaction>,
    combatant_index: HashMap<CombatantId, usize>,
    battle_index: HashMap<BattleId, usize>,
}

impl LogSnapshot {
    pub fn new(combatants: Vec<Combatant>, battles: Vec<Battle>, mut interactions: Vec<Interaction>) -> Self {
        interactions.sort_by_key(|interaction| interaction.timestamp);

        let combatant_index = combatants
            .iter()
            .enumerate()
            .map(|(idx, combatant)| (combatant.id, idx))
            .collect();
        let battle_index = battles
            .iter()
            .enumerate()
            .map(|(idx, battle)| (battle.id, idx))
            .collect();

        Self {
            combatants,
            battles,
            interactions,
            combatant_index,
            battle_index,
        }
    }

    pub fn from_json(content: &str) -> Result<Self> {
        let data: SnapshotData = serde_json::from_str(content)?;
        Ok(data.into())
    }

    pub fn combatant(&self, id: CombatantId) -> Option<&Combatant> {
        self.combatant_index.get(&id).map(|&idx| &self.combatants[idx])
    }

    pub fn combatant_name(&self, id: CombatantId) -> Option<&str> {
        self.combatant(id).map(|combatant| combatant.name.as_str())
    }

    pub fn battle(&self, id: BattleId) -> Option<&Battle> {
        self.battle_index.get(&id).map(|&idx| &self.battles[idx])
    }

    pub fn combatants(&self) -> &[Combatant] {
        &self.combatants
    }

    pub fn battles(&self) -> &[Battle] {
        &self.battles
    }

    pub fn interactions(&self) -> &[Interaction] {
        &self.interactions
    }

    /// Combatants that get report blocks, ordered by kind then name.
    pub fn roster(&self) -> Vec<&Combatant> {
        let mut roster: Vec<&Combatant> = self
            .combatants
            .iter()
            .filter(|combatant| combatant.kind.is_reportable())
            .collect();
        roster.sort_by(|a, b| a.kind.cmp(&b.kind).then_with(|| a.name.cmp(&b.name)));
        roster
    }

    /// Keeps only the most recent `max` interactions.
    pub fn retain_recent(&mut self, max: usize) {
        if self.interactions.len() > max {
            let excess = self.interactions.len() - max;
            self.interactions.drain(..excess);
        }
    }
}

impl From<SnapshotData> for LogSnapshot {
    fn from(data: SnapshotData) -> Self {
        Self::new(data.combatants, data.battles, data.interactions)
    }
}
