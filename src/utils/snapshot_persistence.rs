use std::fs;
use std::path::Path;
use tracing::info;
use crate::error::Result;
use crate::models::LogSnapshot;

/// Reads a JSON snapshot from disk. Unlike settings, errors propagate.
pub fn load_snapshot(file_path: &Path) -> Result<LogSnapshot> {
    let content = fs::read_to_string(file_path)?;
    let snapshot = LogSnapshot::from_json(&content)?;

    info!(
        path = %file_path.display(),
        combatants = snapshot.combatants().len(),
        battles = snapshot.battles().len(),
        interactions = snapshot.interactions().len(),
        "loaded snapshot"
    );
    Ok(snapshot)
}
