use crate::error::Result;
use crate::models::{AidType, Combatant, FailedAction, Interaction};
use crate::report::aggregate::AggregateRow;
use crate::report::segment::{Column, Table};
use crate::report::ReportContext;
use crate::stats::{aggregate, action_key, dedup_by_timestamp};

/// Status removal spells cast by the combatant.
///
/// Each row counts casts and "No Effect" casts, and tallies the named effects
/// removed. Removals whose effect is unknown count toward the casts only.
pub fn status_curing(ctx: &ReportContext<'_>, combatant: &Combatant) -> Result<Vec<AggregateRow>> {
    let removals = ctx.select(|interaction| {
        interaction.actor == combatant.id && interaction.aid_type == AidType::RemoveStatus
    });

    aggregate(removals, action_key)
        .iter()
        .map(|(action, group)| {
            let mut row = AggregateRow::from_group(action, None, group)?;

            let no_effect: Vec<&Interaction> = group
                .records()
                .iter()
                .copied()
                .filter(|interaction| interaction.failed == FailedAction::NoEffect)
                .collect();
            row.no_effect = dedup_by_timestamp(&no_effect).len();

            for interaction in group.records() {
                if interaction.failed != FailedAction::None {
                    continue;
                }
                if let Some(effect) = interaction.secondary_action.as_deref().filter(|effect| !effect.is_empty()) {
                    *row.effects.entry(effect.to_string()).or_default() += 1;
                }
            }
            Ok(row)
        })
        .collect()
}

pub fn table(name_width: usize) -> Table {
    Table::new(vec![
        Column::left("Spell", name_width),
        Column::right("Casts", 6),
        Column::right("No Effect", 10),
    ])
}

pub fn cells(row: &AggregateRow) -> Vec<String> {
    vec![row.action.clone(), row.count.to_string(), row.no_effect.to_string()]
}

/// Nested rows listing each named effect removed.
pub fn effect_cells(row: &AggregateRow) -> Vec<Vec<String>> {
    row.effects
        .iter()
        .map(|(effect, count)| vec![format!("  {}", effect), count.to_string()])
        .collect()
}
