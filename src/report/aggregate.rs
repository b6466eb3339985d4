use std::collections::BTreeMap;
use serde::Serialize;
use crate::error::Result;
use crate::models::CombatantKind;
use crate::stats::{ActionGroup, ActionKey, Party};
use crate::utils::time::delta_seconds;

/// Raw numbers behind one report row.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AggregateRow {
    pub action: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub party: Option<String>,
    /// Distinct timestamps (casts)
    pub count: usize,
    /// Every matching record, one per target for area effects
    pub hits: usize,
    pub total_amount: i64,
    pub min_amount: Option<i32>,
    pub max_amount: Option<i32>,
    pub no_effect: usize,
    pub min_interval_secs: Option<f64>,
    pub max_interval_secs: Option<f64>,
    pub avg_interval_secs: Option<f64>,
    /// Named effects removed, for status cures
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub effects: BTreeMap<String, usize>,
}

impl AggregateRow {
    pub fn from_group(action: &str, party: Option<&Party>, group: &ActionGroup<'_>) -> Result<Self> {
        let intervals = group.intervals()?;
        let amounts = || group.records().iter().map(|interaction| interaction.amount);

        Ok(Self {
            action: action.to_string(),
            party: party.map(|party| party.label().to_string()),
            count: group.count(),
            hits: group.records().len(),
            total_amount: group.total_amount(),
            min_amount: amounts().min(),
            max_amount: amounts().max(),
            min_interval_secs: intervals.map(|stats| delta_seconds(stats.min)),
            max_interval_secs: intervals.map(|stats| delta_seconds(stats.max)),
            avg_interval_secs: intervals.map(|stats| delta_seconds(stats.average)),
            ..Self::default()
        })
    }

    pub fn average_amount(&self) -> Option<f64> {
        (self.hits > 0).then(|| self.total_amount as f64 / self.hits as f64)
    }

    pub fn is_zero(&self) -> bool {
        self.count == 0 && self.hits == 0 && self.total_amount == 0
    }

    /// Adds the additive fields of `other`. Intervals are not additive and stay unset.
    pub fn accumulate(&mut self, other: &AggregateRow) {
        self.count += other.count;
        self.hits += other.hits;
        self.total_amount += other.total_amount;
        self.no_effect += other.no_effect;
        self.min_amount = match (self.min_amount, other.min_amount) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        };
        self.max_amount = match (self.max_amount, other.max_amount) {
            (Some(a), Some(b)) => Some(a.max(b)),
            (a, b) => a.or(b),
        };
        for (effect, count) in &other.effects {
            *self.effects.entry(effect.clone()).or_default() += count;
        }
    }
}

/// Rows for groups keyed by action and party, in key order.
pub fn rows_by_party(groups: &BTreeMap<ActionKey, ActionGroup<'_>>) -> Result<Vec<AggregateRow>> {
    groups
        .iter()
        .map(|(key, group)| AggregateRow::from_group(&key.action, Some(&key.party), group))
        .collect()
}

/// Everything one combatant contributed to a report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CombatantAggregate {
    pub name: String,
    pub kind: CombatantKind,
    pub rows: Vec<AggregateRow>,
}
