//! Grouping keys used by the reports.

use serde::Serialize;
use crate::models::{CombatantId, Interaction, LogSnapshot};
use crate::stats::SpellFamilyTable;

pub const SELF_LABEL: &str = "Self";
pub const OTHERS_LABEL: &str = "Others";

/// The other side of an interaction, as seen from the combatant being reported on.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Party {
    SelfTarget,
    /// Every other combatant merged into one bucket
    Others,
    Named(String),
}

impl Party {
    pub fn label(&self) -> &str {
        match self {
            Party::SelfTarget => SELF_LABEL,
            Party::Others => OTHERS_LABEL,
            Party::Named(name) => name,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ActionKey {
    pub action: String,
    pub party: Party,
}

/// Buffs cast by the actor: self-targeted casts vs casts on anyone else.
///
/// All other targets share one bucket so an area buff landing on the whole
/// party is one timestamp, not one per target.
pub fn cast_by_key(interaction: &Interaction) -> Option<ActionKey> {
    let action = interaction.resolved_action()?;
    let party = if interaction.is_self_targeted() {
        Party::SelfTarget
    } else {
        Party::Others
    };
    Some(ActionKey { action: action.to_string(), party })
}

/// Effects received by `receiver`, split by who cast them.
///
/// Interactions with an actor that is not in the snapshot yield no key.
pub fn received_from_key<'s>(
    snapshot: &'s LogSnapshot,
    receiver: CombatantId,
) -> impl Fn(&Interaction) -> Option<ActionKey> + 's {
    move |interaction| {
        let action = interaction.resolved_action()?;
        let party = if interaction.actor == receiver {
            Party::SelfTarget
        } else {
            Party::Named(snapshot.combatant_name(interaction.actor)?.to_string())
        };
        Some(ActionKey { action: action.to_string(), party })
    }
}

/// Action and the name of its target, or `Self` for self-targeted actions.
pub fn target_key(snapshot: &LogSnapshot) -> impl Fn(&Interaction) -> Option<ActionKey> + '_ {
    move |interaction| {
        let action = interaction.resolved_action()?;
        let party = match interaction.target {
            Some(target) if target != interaction.actor => {
                Party::Named(snapshot.combatant_name(target)?.to_string())
            }
            _ => Party::SelfTarget,
        };
        Some(ActionKey { action: action.to_string(), party })
    }
}

/// Action name alone.
pub fn action_key(interaction: &Interaction) -> Option<String> {
    interaction.resolved_action().map(str::to_string)
}

/// Position of the action's spell family in `table`; actions outside every family yield no key.
pub fn family_key(table: &SpellFamilyTable) -> impl Fn(&Interaction) -> Option<usize> + '_ {
    move |interaction| table.position_of(interaction.resolved_action()?)
}
