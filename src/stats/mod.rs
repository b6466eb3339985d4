pub mod interval;
pub mod keys;
pub mod spell_family;

pub use interval::{ActionGroup, IntervalStats, aggregate, dedup_by_timestamp, interval_stats};
pub use keys::{ActionKey, Party, SELF_LABEL, OTHERS_LABEL, action_key, cast_by_key, family_key, received_from_key, target_key};
pub use spell_family::{SpellFamily, SpellFamilyTable, default_spell_families};
