use serde::{Deserialize, Serialize};
use crate::stats::{SpellFamily, SpellFamilyTable, default_spell_families};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportSettings {
    /// Spell families the curing reports bucket actions into
    pub spell_families: Vec<SpellFamily>,
    /// Only the most recent interactions are analyzed when set
    pub max_interactions: Option<usize>,
    /// Width of the action name column (8-40)
    pub name_width: usize,
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            spell_families: default_spell_families(),
            max_interactions: None,
            name_width: 20,
        }
    }
}

impl ReportSettings {
    /// Clamps the name column width to valid range (8-40)
    pub fn set_name_width(&mut self, width: usize) {
        self.name_width = width.clamp(8, 40);
    }

    pub fn family_table(&self) -> SpellFamilyTable {
        SpellFamilyTable::new(self.spell_families.clone())
    }
}
