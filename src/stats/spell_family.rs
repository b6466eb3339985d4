use std::collections::HashMap;
use serde::{Deserialize, Serialize};

/// A set of action names that count as the same spell for curing reports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpellFamily {
    pub key: String,
    pub members: Vec<String>,
}

impl SpellFamily {
    pub fn new(key: &str, members: &[&str]) -> Self {
        Self {
            key: key.to_string(),
            members: members.iter().map(|member| member.to_string()).collect(),
        }
    }
}

/// Lookup from raw action name to spell family. Names match exactly.
#[derive(Debug, Clone, Default)]
pub struct SpellFamilyTable {
    families: Vec<SpellFamily>,
    index: HashMap<String, usize>,
}

impl SpellFamilyTable {
    /// Builds the lookup. A name listed under several families belongs to the first one.
    pub fn new(families: Vec<SpellFamily>) -> Self {
        let mut index = HashMap::new();
        for (position, family) in families.iter().enumerate() {
            for member in &family.members {
                index.entry(member.clone()).or_insert(position);
            }
        }
        Self { families, index }
    }

    pub fn position_of(&self, action: &str) -> Option<usize> {
        self.index.get(action).copied()
    }

    pub fn family_of(&self, action: &str) -> Option<&SpellFamily> {
        self.position_of(action).map(|position| &self.families[position])
    }

    pub fn family(&self, position: usize) -> Option<&SpellFamily> {
        self.families.get(position)
    }

    pub fn families(&self) -> &[SpellFamily] {
        &self.families
    }
}

/// Curing families in report column order.
pub fn default_spell_families() -> Vec<SpellFamily> {
    vec![
        SpellFamily::new("Cure", &["Cure", "Pollen", "Curing Waltz"]),
        SpellFamily::new("Cure II", &["Cure II", "Curing Waltz II"]),
        SpellFamily::new("Cure III", &["Cure III", "Wild Carrot", "Curing Waltz III"]),
        SpellFamily::new("Cure IV", &["Cure IV", "Magic Fruit", "Curing Waltz IV"]),
        SpellFamily::new("Cure V", &["Cure V", "Curing Waltz V"]),
        SpellFamily::new("Curaga", &["Curaga", "Curaga II", "Curaga III", "Curaga IV", "Healing Breeze", "Divine Waltz"]),
        SpellFamily::new("Regen", &["Regen", "Regen II", "Regen III"]),
        SpellFamily::new("Other", &["Chakra", "Potion", "Hi-Potion"]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equivalent_names_share_a_family() {
        let table = SpellFamilyTable::new(default_spell_families());

        assert_eq!(table.family_of("Wild Carrot").map(|family| family.key.as_str()), Some("Cure III"));
        assert_eq!(table.position_of("Cure III"), table.position_of("Curing Waltz III"));
        assert_eq!(table.family_of("cure iii"), None);
        assert_eq!(table.family_of("Cure VI"), None);
    }

    #[test]
    fn first_family_wins_for_duplicate_members() {
        let table = SpellFamilyTable::new(vec![
            SpellFamily::new("A", &["Shared"]),
            SpellFamily::new("B", &["Shared", "Only B"]),
        ]);

        assert_eq!(table.position_of("Shared"), Some(0));
        assert_eq!(table.position_of("Only B"), Some(1));
    }
}
