pub mod evaluator;
pub mod mob_groups;
pub mod xp;

pub use evaluator::{FilterContext, FilterRecord, MobSide};
pub use mob_groups::{MobGroup, mob_groups};
pub use xp::{RecordedXp, XpLookup};
