use crate::error::Result;
use crate::models::{AidType, Combatant};
use crate::report::aggregate::{AggregateRow, rows_by_party};
use crate::report::segment::{Column, Table};
use crate::report::ReportContext;
use crate::stats::{aggregate, received_from_key};
use crate::utils::time::format_interval;

/// Healing received by the combatant, split by action and healer.
pub fn recovery(ctx: &ReportContext<'_>, combatant: &Combatant) -> Result<Vec<AggregateRow>> {
    let heals = ctx.select(|interaction| {
        interaction.aid_type == AidType::Recovery && interaction.recipient() == combatant.id
    });
    rows_by_party(&aggregate(heals, received_from_key(ctx.snapshot(), combatant.id)))
}

pub fn table(name_width: usize) -> Table {
    Table::new(vec![
        Column::left("Action", name_width),
        Column::left("From", 16),
        Column::right("Count", 6),
        Column::right("Total", 8),
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
        row.total_amount.to_string(),
        format_interval(row.min_interval_secs),
        format_interval(row.max_interval_secs),
        format_interval(row.avg_interval_secs),
    ]
}

/// One roster-wide row: the sum of every combatant's rows.
pub fn totals(rows: &[&AggregateRow]) -> Vec<AggregateRow> {
    let mut total = AggregateRow {
        action: "All".to_string(),
        party: Some("All".to_string()),
        ..AggregateRow::default()
    };
    for row in rows {
        total.accumulate(row);
    }
    vec![total]
}
