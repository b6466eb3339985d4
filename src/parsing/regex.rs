use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    pub static ref RE_ALL_MOBS: Regex = Regex::new(r"^(?i)all(?P<xp_only>-xp)?$").unwrap();
    pub static ref RE_SINGLE_BATTLE: Regex = Regex::new(r"^(?i)battle:\s*(?P<id>\d+)$").unwrap();
    pub static ref RE_BATTLE_SET: Regex = Regex::new(r"^(?i)battles:\s*(?P<list>.*)$").unwrap();
    pub static ref RE_BATTLE_RANGE: Regex = Regex::new(r"^(?P<start>\d+)\s*-\s*(?P<end>\d+)$").unwrap();
    pub static ref RE_MOB_SELECTOR: Regex = Regex::new(r"^(?i)mob:\s*(?P<label>.+)$").unwrap();

    // Mob list labels: "Goblin Smithy (120)" or a bare name
    pub static ref RE_MOB_LABEL: Regex = Regex::new(r"^(?P<name>.+?)\s*\((?P<xp>\d+)\)$").unwrap();
}
