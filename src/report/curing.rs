use crate::error::Result;
use crate::models::{AidType, Combatant};
use crate::report::aggregate::AggregateRow;
use crate::report::segment::{Column, Table};
use crate::report::ReportContext;
use crate::stats::{SpellFamilyTable, aggregate, family_key};
use crate::utils::time::format_interval;

/// Recovery actions cast by the combatant, bucketed by spell family in table order.
///
/// Actions outside every family are not counted.
pub fn curing(ctx: &ReportContext<'_>, combatant: &Combatant) -> Result<Vec<AggregateRow>> {
    let families = ctx.families();
    let cures = ctx.select(|interaction| {
        interaction.actor == combatant.id && interaction.aid_type == AidType::Recovery
    });

    aggregate(cures, family_key(families))
        .iter()
        .filter_map(|(&position, group)| {
            let family = families.family(position)?;
            Some(AggregateRow::from_group(&family.key, None, group))
        })
        .collect()
}

pub fn table(name_width: usize) -> Table {
    Table::new(vec![
        Column::left("Spell", name_width),
        Column::right("Casts", 6),
        Column::right("Cured", 8),
        Column::right("Min", 9),
        Column::right("Max", 9),
        Column::right("Average", 9),
    ])
}

pub fn cells(row: &AggregateRow) -> Vec<String> {
    vec![
        row.action.clone(),
        row.count.to_string(),
        row.total_amount.to_string(),
        format_interval(row.min_interval_secs),
        format_interval(row.max_interval_secs),
        format_interval(row.avg_interval_secs),
    ]
}

pub fn average_table(name_width: usize) -> Table {
    Table::new(vec![
        Column::left("Spell", name_width),
        Column::right("Casts", 6),
        Column::right("Hits", 6),
        Column::right("Avg Heal", 9),
        Column::right("Min Heal", 9),
        Column::right("Max Heal", 9),
    ])
}

pub fn average_cells(row: &AggregateRow) -> Vec<String> {
    let amount = |value: Option<i32>| value.map(|v| v.to_string()).unwrap_or_else(|| "-".to_string());
    vec![
        row.action.clone(),
        row.count.to_string(),
        row.hits.to_string(),
        row.average_amount().map(|avg| format!("{:.1}", avg)).unwrap_or_else(|| "-".to_string()),
        amount(row.min_amount),
        amount(row.max_amount),
    ]
}

/// Per-family sums over every combatant, in family table order.
pub fn totals(rows: &[&AggregateRow], families: &SpellFamilyTable) -> Vec<AggregateRow> {
    families
        .families()
        .iter()
        .filter_map(|family| {
            let mut total = AggregateRow {
                action: family.key.clone(),
                ..AggregateRow::default()
            };
            let mut contributed = false;
            for row in rows.iter().filter(|row| row.action == family.key) {
                total.accumulate(row);
                contributed = true;
            }
            contributed.then_some(total)
        })
        .collect()
}
