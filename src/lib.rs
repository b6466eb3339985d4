//! Aid-action reports over a snapshot of a combat log: buffs, healing and
//! status removal, with cast intervals, scoped by a mob filter.

pub mod error;
pub mod filter;
pub mod models;
pub mod parsing;
pub mod report;
pub mod stats;
pub mod utils;

pub use error::{AidError, Result};
pub use filter::{FilterContext, FilterRecord, MobGroup, MobSide, RecordedXp, XpLookup, mob_groups};
pub use models::{
    ActionType, AidType, Battle, BattleId, Combatant, CombatantId, CombatantKind, FailedAction, HarmType,
    Interaction, LogSnapshot, MobFilter, ReportSettings, SnapshotData, XpTier,
};
pub use parsing::parse_selection;
pub use report::{Report, ReportMode, build_report, render_ansi, render_plain};
pub use utils::{load_report_settings, load_snapshot, save_report_settings};
