use std::collections::BTreeSet;
use crate::error::{AidError, Result};
use crate::models::{BattleId, MobFilter, XpTier};
use crate::parsing::regex::{RE_ALL_MOBS, RE_BATTLE_RANGE, RE_BATTLE_SET, RE_MOB_LABEL, RE_MOB_SELECTOR, RE_SINGLE_BATTLE};

/// Parses a mob selection string into a filter.
///
/// Accepted forms:
/// - `all` / `all-xp` (the latter skips zero-XP battles)
/// - `battle:7`
/// - `battles:1,4,9-12`
/// - `mob:Goblin Smithy` (any XP) / `mob:Goblin Smithy (120)`
pub fn parse_selection(input: &str) -> Result<MobFilter> {
    let input = input.trim();

    if let Some(caps) = RE_ALL_MOBS.captures(input) {
        return Ok(MobFilter::AllMobs {
            exclude_zero_xp: caps.name("xp_only").is_some(),
        });
    }

    if let Some(caps) = RE_SINGLE_BATTLE.captures(input) {
        let battle_id = parse_id(&caps["id"])?;
        return Ok(MobFilter::SingleBattle { battle_id });
    }

    if let Some(caps) = RE_BATTLE_SET.captures(input) {
        let battle_ids = parse_battle_list(&caps["list"])?;
        return Ok(MobFilter::CustomSet { battle_ids });
    }

    if let Some(caps) = RE_MOB_SELECTOR.captures(input) {
        let (mob_name, xp_tier) = parse_mob_label(&caps["label"]);
        if mob_name.is_empty() {
            return Err(AidError::InvalidSelection(input.to_string()));
        }
        return Ok(MobFilter::GroupedByNameAndXp { mob_name, xp_tier });
    }

    Err(AidError::InvalidSelection(input.to_string()))
}

/// Splits a mob list label into name and XP tier. Labels without a
/// trailing `(xp)` select the mob at any XP.
pub fn parse_mob_label(label: &str) -> (String, XpTier) {
    let label = label.trim();
    if let Some(caps) = RE_MOB_LABEL.captures(label) {
        if let Ok(xp) = caps["xp"].parse::<u32>() {
            return (caps["name"].trim().to_string(), XpTier::Exact(xp));
        }
    }
    (label.to_string(), XpTier::Any)
}

fn parse_id(text: &str) -> Result<BattleId> {
    text.trim()
        .parse::<u32>()
        .map(BattleId)
        .map_err(|_| AidError::InvalidSelection(format!("bad battle id '{}'", text)))
}

/// Comma separated ids and inclusive `a-b` ranges. An empty list is allowed
/// and selects nothing.
fn parse_battle_list(list: &str) -> Result<BTreeSet<BattleId>> {
    let mut ids = BTreeSet::new();

    for part in list.split(',').map(str::trim).filter(|part| !part.is_empty()) {
        if let Some(caps) = RE_BATTLE_RANGE.captures(part) {
            let start = parse_id(&caps["start"])?;
            let end = parse_id(&caps["end"])?;
            if start > end {
                return Err(AidError::InvalidSelection(format!("reversed range '{}'", part)));
            }
            ids.extend((start.0..=end.0).map(BattleId));
        } else {
            ids.insert(parse_id(part)?);
        }
    }

    Ok(ids)
}
