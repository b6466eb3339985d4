use crate::error::Result;
use crate::models::{AidType, Combatant};
use crate::report::aggregate::{AggregateRow, rows_by_party};
use crate::report::segment::{Column, Table};
use crate::report::ReportContext;
use crate::stats::{Party, aggregate, cast_by_key, received_from_key, target_key};
use crate::utils::time::format_interval;

/// Buffs cast by the combatant: a `Self` row, an `Others` row counting each
/// cast once however many targets it hit, then one row per named target.
pub fn buffs_used(ctx: &ReportContext<'_>, combatant: &Combatant) -> Result<Vec<AggregateRow>> {
    let casts = ctx.select(|interaction| {
        interaction.actor == combatant.id && interaction.aid_type == AidType::Enhance
    });

    let mut groups = aggregate(casts.iter().copied(), cast_by_key);
    let per_target = aggregate(casts, target_key(ctx.snapshot()));
    groups.extend(
        per_target
            .into_iter()
            .filter(|(key, _)| matches!(key.party, Party::Named(_))),
    );
    rows_by_party(&groups)
}

/// Buffs landing on the combatant, split by caster.
pub fn buffs_received(ctx: &ReportContext<'_>, combatant: &Combatant) -> Result<Vec<AggregateRow>> {
    let received = ctx.select(|interaction| {
        interaction.aid_type == AidType::Enhance && interaction.recipient() == combatant.id
    });
    rows_by_party(&aggregate(received, received_from_key(ctx.snapshot(), combatant.id)))
}

pub fn used_table(name_width: usize) -> Table {
    Table::new(vec![
        Column::left("Buff", name_width),
        Column::left("Target", 16),
        Column::right("Casts", 6),
        Column::right("Min", 9),
        Column::right("Max", 9),
        Column::right("Average", 9),
    ])
}

pub fn received_table(name_width: usize) -> Table {
    Table::new(vec![
        Column::left("Buff", name_width),
        Column::left("From", 16),
        Column::right("Count", 6),
        Column::right("Min", 9),
        Column::right("Max", 9),
        Column::right("Average", 9),
    ])
}

pub fn cells(row: &AggregateRow) -> Vec<String> {
    vec![
        row.action.clone(),
        row.party.clone().unwrap_or_default(),
        row.count.to_string(),
        format_interval(row.min_interval_secs),
        format_interval(row.max_interval_secs),
        format_interval(row.avg_interval_secs),
    ]
}
