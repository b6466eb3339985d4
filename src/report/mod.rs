//! Report assembly: runs the filter and the interval statistics for every
//! combatant on the roster and lays the results out as styled text.

pub mod aggregate;
pub mod buffs;
pub mod curing;
pub mod recovery;
pub mod render;
pub mod segment;
pub mod status;

use std::fmt;
use std::str::FromStr;
use serde::Serialize;
use tracing::debug;
use crate::error::{AidError, Result};
use crate::filter::{FilterContext, MobSide, XpLookup};
use crate::models::{Combatant, Interaction, LogSnapshot, MobFilter, ReportSettings};
use crate::stats::SpellFamilyTable;

pub use aggregate::{AggregateRow, CombatantAggregate};
pub use render::{render_ansi, render_plain};
pub use segment::{Segment, SegmentWriter, Table, TextColor, TextStyle};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReportMode {
    BuffsUsed,
    BuffsReceived,
    Recovery,
    Curing,
    AverageCuring,
    StatusCuring,
}

impl ReportMode {
    pub const ALL: [ReportMode; 6] = [
        ReportMode::BuffsUsed,
        ReportMode::BuffsReceived,
        ReportMode::Recovery,
        ReportMode::Curing,
        ReportMode::AverageCuring,
        ReportMode::StatusCuring,
    ];

    pub fn slug(self) -> &'static str {
        match self {
            ReportMode::BuffsUsed => "buffs-used",
            ReportMode::BuffsReceived => "buffs-received",
            ReportMode::Recovery => "recovery",
            ReportMode::Curing => "curing",
            ReportMode::AverageCuring => "average-curing",
            ReportMode::StatusCuring => "status-curing",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            ReportMode::BuffsUsed => "Buffs Used",
            ReportMode::BuffsReceived => "Buffs Received",
            ReportMode::Recovery => "Recovery",
            ReportMode::Curing => "Curing",
            ReportMode::AverageCuring => "Average Curing",
            ReportMode::StatusCuring => "Status Curing",
        }
    }

    fn has_totals(self) -> bool {
        matches!(self, ReportMode::Recovery | ReportMode::Curing | ReportMode::AverageCuring)
    }

    fn table(self, name_width: usize) -> Table {
        match self {
            ReportMode::BuffsUsed => buffs::used_table(name_width),
            ReportMode::BuffsReceived => buffs::received_table(name_width),
            ReportMode::Recovery => recovery::table(name_width),
            ReportMode::Curing => curing::table(name_width),
            ReportMode::AverageCuring => curing::average_table(name_width),
            ReportMode::StatusCuring => status::table(name_width),
        }
    }

    fn rows(self, ctx: &ReportContext<'_>, combatant: &Combatant) -> Result<Vec<AggregateRow>> {
        match self {
            ReportMode::BuffsUsed => buffs::buffs_used(ctx, combatant),
            ReportMode::BuffsReceived => buffs::buffs_received(ctx, combatant),
            ReportMode::Recovery => recovery::recovery(ctx, combatant),
            ReportMode::Curing | ReportMode::AverageCuring => curing::curing(ctx, combatant),
            ReportMode::StatusCuring => status::status_curing(ctx, combatant),
        }
    }

    fn cells(self, row: &AggregateRow) -> Vec<String> {
        match self {
            ReportMode::BuffsUsed | ReportMode::BuffsReceived => buffs::cells(row),
            ReportMode::Recovery => recovery::cells(row),
            ReportMode::Curing => curing::cells(row),
            ReportMode::AverageCuring => curing::average_cells(row),
            ReportMode::StatusCuring => status::cells(row),
        }
    }
}

impl fmt::Display for ReportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for ReportMode {
    type Err = AidError;

    fn from_str(s: &str) -> Result<Self> {
        ReportMode::ALL
            .into_iter()
            .find(|mode| mode.slug().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| AidError::UnknownMode(s.to_string()))
    }
}

/// Inputs shared by every section of one report pass.
pub struct ReportContext<'a> {
    snapshot: &'a LogSnapshot,
    filter: &'a MobFilter,
    filter_ctx: FilterContext<'a>,
    families: &'a SpellFamilyTable,
}

impl<'a> ReportContext<'a> {
    pub fn new(
        snapshot: &'a LogSnapshot,
        filter: &'a MobFilter,
        xp: &'a dyn XpLookup,
        families: &'a SpellFamilyTable,
    ) -> Self {
        Self {
            snapshot,
            filter,
            filter_ctx: FilterContext::new(snapshot, xp),
            families,
        }
    }

    pub fn snapshot(&self) -> &'a LogSnapshot {
        self.snapshot
    }

    pub fn families(&self) -> &'a SpellFamilyTable {
        self.families
    }

    /// In-scope interactions satisfying `pred`, in time order.
    ///
    /// Aid interactions happen between allies, so the battle's enemy decides scope.
    pub fn select(&self, pred: impl Fn(&Interaction) -> bool) -> Vec<&'a Interaction> {
        self.snapshot
            .interactions()
            .iter()
            .filter(|interaction| {
                pred(interaction)
                    && self
                        .filter
                        .matches_interaction(&self.filter_ctx, interaction, MobSide::Battle)
            })
            .collect()
    }
}

/// A rendered report plus the numbers behind it.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub mode: ReportMode,
    #[serde(skip)]
    pub segments: Vec<Segment>,
    pub aggregates: Vec<CombatantAggregate>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub totals: Vec<AggregateRow>,
}

impl Report {
    pub fn is_empty(&self) -> bool {
        self.aggregates.is_empty()
    }

    pub fn plain_text(&self) -> String {
        render_plain(&self.segments)
    }
}

/// Runs one full aggregation pass over `snapshot`.
///
/// Nothing is cached between calls; every pass starts from the snapshot.
pub fn build_report(
    snapshot: &LogSnapshot,
    filter: &MobFilter,
    mode: ReportMode,
    settings: &ReportSettings,
    xp: &dyn XpLookup,
) -> Result<Report> {
    let families = settings.family_table();
    let ctx = ReportContext::new(snapshot, filter, xp, &families);
    let table = mode.table(settings.name_width);
    let mut writer = SegmentWriter::new();
    let mut aggregates = Vec::new();

    if filter.is_empty_selection() {
        debug!(mode = %mode, "empty mob selection, nothing to report");
    } else {
        for combatant in snapshot.roster() {
            let rows = mode.rows(&ctx, combatant)?;
            if rows.is_empty() {
                continue;
            }

            writer.name_header(&combatant.name);
            writer.column_header(&table);
            for row in &rows {
                write_row(&mut writer, &table, mode, row, TextStyle::PLAIN);
            }
            writer.blank_line();

            aggregates.push(CombatantAggregate {
                name: combatant.name.clone(),
                kind: combatant.kind,
                rows,
            });
        }
    }

    let totals = if mode.has_totals() {
        totals(mode, &aggregates, &families)
    } else {
        Vec::new()
    };
    if !totals.is_empty() {
        writer.line("Total", TextStyle::TOTAL_HEADER);
        writer.column_header(&table);
        for row in &totals {
            write_row(&mut writer, &table, mode, row, TextStyle::TOTAL_ROW);
        }
        writer.blank_line();
    }

    if writer.is_empty() {
        writer.line(format!("No {} data for this selection.", mode.title().to_lowercase()), TextStyle::NOTICE);
    }

    debug!(mode = %mode, combatants = aggregates.len(), "report assembled");
    Ok(Report {
        mode,
        segments: writer.into_segments(),
        aggregates,
        totals,
    })
}

fn write_row(writer: &mut SegmentWriter, table: &Table, mode: ReportMode, row: &AggregateRow, style: TextStyle) {
    writer.row(table, &mode.cells(row), style);
    if mode == ReportMode::StatusCuring {
        for cells in status::effect_cells(row) {
            writer.row(table, &cells, style);
        }
    }
}

/// Roster-wide totals, summed from the per-combatant rows already computed.
///
/// Empty unless at least one combatant contributed a non-zero row.
fn totals(mode: ReportMode, aggregates: &[CombatantAggregate], families: &SpellFamilyTable) -> Vec<AggregateRow> {
    let rows: Vec<&AggregateRow> = aggregates
        .iter()
        .flat_map(|aggregate| aggregate.rows.iter())
        .filter(|row| !row.is_zero())
        .collect();
    if rows.is_empty() {
        return Vec::new();
    }

    match mode {
        ReportMode::Recovery => recovery::totals(&rows),
        ReportMode::Curing | ReportMode::AverageCuring => curing::totals(&rows, families),
        _ => Vec::new(),
    }
}
