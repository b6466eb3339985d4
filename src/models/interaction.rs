use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use crate::models::{BattleId, CombatantId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ActionType {
    Spell,
    Ability,
    Weaponskill,
    Item,
    Melee,
    Ranged,
    #[default]
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum AidType {
    #[default]
    None,
    Enhance,
    Recovery,
    RemoveStatus,
    RemoveEnmity,
    Item,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum HarmType {
    #[default]
    None,
    Damage,
    Drain,
    Enfeeble,
    Dispel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum FailedAction {
    #[default]
    None,
    NoEffect,
    Interrupted,
    Other,
}

/// One recorded combat event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Interaction {
    pub timestamp: NaiveDateTime,
    pub actor: CombatantId,
    #[serde(default)]
    pub target: Option<CombatantId>,
    /// None for interactions that happened between encounters
    #[serde(default)]
    pub battle: Option<BattleId>,
    /// None while the action could not be resolved from the log
    #[serde(default)]
    pub action_name: Option<String>,
    #[serde(default)]
    pub action_type: ActionType,
    #[serde(default)]
    pub aid_type: AidType,
    #[serde(default)]
    pub harm_type: HarmType,
    #[serde(default)]
    pub amount: i32,
    #[serde(default)]
    pub secondary_amount: i32,
    /// Effect removed by a status cure, when the log names it
    #[serde(default)]
    pub secondary_action: Option<String>,
    /// Cast still in progress; never counted
    #[serde(default)]
    pub preparing: bool,
    #[serde(default)]
    pub failed: FailedAction,
}

impl Interaction {
    pub fn new(timestamp: NaiveDateTime, actor: CombatantId, action_name: impl Into<String>) -> Self {
        Self {
            timestamp,
            actor,
            target: None,
            battle: None,
            action_name: Some(action_name.into()),
            action_type: ActionType::Unknown,
            aid_type: AidType::None,
            harm_type: HarmType::None,
            amount: 0,
            secondary_amount: 0,
            secondary_action: None,
            preparing: false,
            failed: FailedAction::None,
        }
    }

    pub fn resolved_action(&self) -> Option<&str> {
        self.action_name.as_deref().filter(|name| !name.is_empty())
    }

    /// No target, or the actor targeted themselves.
    pub fn is_self_targeted(&self) -> bool {
        self.target.is_none_or(|target| target == self.actor)
    }

    /// Resolved, finished actions are the only ones that feed statistics.
    pub fn is_countable(&self) -> bool {
        !self.preparing && self.resolved_action().is_some()
    }

    /// The combatant on the receiving end: the target, or the actor for untargeted actions.
    pub fn recipient(&self) -> CombatantId {
        self.target.unwrap_or(self.actor)
    }
}
