pub mod regex;
pub mod selection;

pub use selection::{parse_mob_label, parse_selection};
