pub mod combatant;
pub mod battle;
pub mod interaction;
pub mod snapshot;
pub mod filter;
pub mod settings;

pub use combatant::{Combatant, CombatantId, CombatantKind};
pub use battle::{Battle, BattleId};
pub use interaction::{Interaction, ActionType, AidType, HarmType, FailedAction};
pub use snapshot::{LogSnapshot, SnapshotData};
pub use filter::{MobFilter, XpTier};
pub use settings::ReportSettings;
