use crate::filter::XpLookup;
use crate::models::{Battle, BattleId, Combatant, Interaction, LogSnapshot, MobFilter, XpTier};

/// Which participant of an interaction is taken to be the mob.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MobSide {
    Actor,
    Target,
    /// Neither side is guaranteed to be the mob; use the battle's enemy.
    Battle,
}

#[derive(Debug, Clone, Copy)]
pub enum FilterRecord<'a> {
    Interaction(&'a Interaction, MobSide),
    Battle(&'a Battle),
}

/// Everything the evaluator may consult besides the record itself.
#[derive(Clone, Copy)]
pub struct FilterContext<'a> {
    snapshot: &'a LogSnapshot,
    xp: &'a dyn XpLookup,
}

enum Linkage<'a> {
    /// Between encounters: no battle, or the placeholder battle.
    Unlinked,
    Linked(&'a Battle),
    /// Battle id that is not in the snapshot.
    Dangling,
}

impl<'a> FilterContext<'a> {
    pub fn new(snapshot: &'a LogSnapshot, xp: &'a dyn XpLookup) -> Self {
        Self { snapshot, xp }
    }

    pub fn snapshot(&self) -> &'a LogSnapshot {
        self.snapshot
    }

    fn linkage<'r>(&self, record: FilterRecord<'r>) -> Linkage<'r>
    where
        'a: 'r,
    {
        let battle = match record {
            FilterRecord::Battle(battle) => Some(battle),
            FilterRecord::Interaction(interaction, _) => match interaction.battle {
                None => return Linkage::Unlinked,
                Some(id) => self.snapshot.battle(id),
            },
        };

        match battle {
            None => Linkage::Dangling,
            Some(battle) if battle.is_default => Linkage::Unlinked,
            Some(battle) => Linkage::Linked(battle),
        }
    }

    /// The combatant playing the mob for this record.
    fn resolve_mob(&self, record: FilterRecord<'_>, battle: &Battle) -> Option<&'a Combatant> {
        let id = match record {
            FilterRecord::Interaction(interaction, MobSide::Actor) => Some(interaction.actor),
            FilterRecord::Interaction(interaction, MobSide::Target) => interaction.target,
            FilterRecord::Interaction(_, MobSide::Battle) | FilterRecord::Battle(_) => battle.enemy,
        }?;
        self.snapshot.combatant(id)
    }
}

/// For the actor/target variants the chosen side must be the battle's enemy.
fn side_is_enemy(record: FilterRecord<'_>, battle: &Battle) -> bool {
    match record {
        FilterRecord::Interaction(interaction, MobSide::Actor) => {
            battle.enemy.is_some_and(|enemy| enemy == interaction.actor)
        }
        FilterRecord::Interaction(interaction, MobSide::Target) => {
            battle.enemy.is_some() && battle.enemy == interaction.target
        }
        FilterRecord::Interaction(_, MobSide::Battle) | FilterRecord::Battle(_) => true,
    }
}

impl MobFilter {
    /// Total predicate: every record yields a decision, unresolvable links yield `false`.
    pub fn matches(&self, ctx: &FilterContext<'_>, record: FilterRecord<'_>) -> bool {
        let linkage = ctx.linkage(record);

        match self {
            MobFilter::AllMobs { exclude_zero_xp } => match linkage {
                Linkage::Unlinked => true,
                Linkage::Dangling => false,
                Linkage::Linked(battle) => !(*exclude_zero_xp && battle.experience == 0),
            },
            MobFilter::CustomSet { battle_ids } => match linkage {
                Linkage::Linked(battle) => battle_ids.contains(&battle.id) && side_is_enemy(record, battle),
                Linkage::Unlinked | Linkage::Dangling => false,
            },
            MobFilter::SingleBattle { battle_id } => {
                matches!(linkage, Linkage::Linked(battle) if battle.id == *battle_id)
            }
            MobFilter::GroupedByNameAndXp { mob_name, xp_tier } => {
                if mob_name.is_empty() {
                    return false;
                }
                let Linkage::Linked(battle) = linkage else {
                    return false;
                };
                let Some(mob) = ctx.resolve_mob(record, battle) else {
                    return false;
                };

                mob.name == *mob_name
                    && match xp_tier {
                        XpTier::Any => true,
                        XpTier::Exact(xp) => ctx.xp.base_xp(battle) == Some(*xp),
                    }
            }
        }
    }

    pub fn matches_interaction(&self, ctx: &FilterContext<'_>, interaction: &Interaction, side: MobSide) -> bool {
        self.matches(ctx, FilterRecord::Interaction(interaction, side))
    }

    pub fn matches_battle(&self, ctx: &FilterContext<'_>, battle: &Battle) -> bool {
        self.matches(ctx, FilterRecord::Battle(battle))
    }

    /// Battle ids selected by this filter, in id order.
    pub fn selected_battles(&self, ctx: &FilterContext<'_>) -> Vec<BattleId> {
        let mut ids: Vec<BattleId> = ctx
            .snapshot()
            .battles()
            .iter()
            .filter(|battle| !battle.is_default && self.matches_battle(ctx, battle))
            .map(|battle| battle.id)
            .collect();
        ids.sort();
        ids
    }
}
