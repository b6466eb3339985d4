pub mod time;
pub mod settings_persistence;
pub mod snapshot_persistence;

pub use time::{delta_seconds, format_duration, format_interval};
pub use settings_persistence::{load_report_settings, save_report_settings};
pub use snapshot_persistence::load_snapshot;
