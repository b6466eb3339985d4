use std::collections::BTreeMap;
use serde::Serialize;
use crate::filter::XpLookup;
use crate::models::{LogSnapshot, MobFilter, XpTier};

/// One entry of the mob selection list: a mob name and the base XP it was killed for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MobGroup {
    pub name: String,
    pub base_xp: Option<u32>,
    pub battles: usize,
}

impl MobGroup {
    /// Label in the `Name (xp)` form that the selection parser reads back.
    pub fn label(&self) -> String {
        match self.base_xp {
            Some(xp) => format!("{} ({})", self.name, xp),
            None => self.name.clone(),
        }
    }

    pub fn filter(&self) -> MobFilter {
        let tier = match self.base_xp {
            Some(xp) => XpTier::Exact(xp),
            None => XpTier::Any,
        };
        MobFilter::mob(self.name.clone(), tier)
    }
}

/// Distinct (mob name, base XP) pairs over every real battle, sorted by name then XP.
pub fn mob_groups(snapshot: &LogSnapshot, xp: &dyn XpLookup) -> Vec<MobGroup> {
    let mut counts: BTreeMap<(String, Option<u32>), usize> = BTreeMap::new();

    for battle in snapshot.battles().iter().filter(|battle| !battle.is_default) {
        let Some(enemy) = battle.enemy.and_then(|id| snapshot.combatant(id)) else {
            continue;
        };
        *counts.entry((enemy.name.clone(), xp.base_xp(battle))).or_default() += 1;
    }

    counts
        .into_iter()
        .map(|((name, base_xp), battles)| MobGroup { name, base_xp, battles })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::RecordedXp;
    use crate::models::{Battle, Combatant, CombatantKind};

    #[test]
    fn groups_battles_by_name_and_xp() {
        let snapshot = LogSnapshot::new(
            vec![
                Combatant::new(10, "Goblin Smithy", CombatantKind::EnemyMob),
                Combatant::new(11, "Goblin Smithy", CombatantKind::EnemyMob),
                Combatant::new(12, "Crawler", CombatantKind::EnemyMob),
            ],
            vec![
                Battle::new(1, Some(10), 120),
                Battle::new(2, Some(11), 120),
                Battle::new(3, Some(12), 0),
                Battle::new(4, None, 50),
                Battle::placeholder(5),
            ],
            Vec::new(),
        );

        let groups = mob_groups(&snapshot, &RecordedXp);
        let labels: Vec<String> = groups.iter().map(MobGroup::label).collect();

        assert_eq!(labels, vec!["Crawler (0)", "Goblin Smithy (120)"]);
        assert_eq!(groups[1].battles, 2);
        assert_eq!(groups[1].filter(), MobFilter::mob("Goblin Smithy", XpTier::Exact(120)));
    }
}
