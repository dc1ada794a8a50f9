use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::path::Path;

use crate::highlights::HighlightEvent;

pub type UserId = u32;
pub type SteamId = u64;

/// Display names indexed by the numeric team code carried on the wire.
pub const TEAM_NAMES: [&str; 4] = ["UNASSIGNED", "SPECTATOR", "RED", "BLU"];

const TEAM_NUMBER_OTHER: u32 = 0;
const TEAM_NUMBER_SPECTATOR: u32 = 1;
const TEAM_NUMBER_RED: u32 = 2;
const TEAM_NUMBER_BLUE: u32 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum Team {
    Red,
    Blue,
    Spectator,
    #[default]
    Other,
}

impl Team {
    pub fn from_number(team_number: u32) -> Self {
        match team_number {
            TEAM_NUMBER_SPECTATOR => Team::Spectator,
            TEAM_NUMBER_RED => Team::Red,
            TEAM_NUMBER_BLUE => Team::Blue,
            _ => Team::Other,
        }
    }

    pub fn number(self) -> u32 {
        match self {
            Team::Other => TEAM_NUMBER_OTHER,
            Team::Spectator => TEAM_NUMBER_SPECTATOR,
            Team::Red => TEAM_NUMBER_RED,
            Team::Blue => TEAM_NUMBER_BLUE,
        }
    }

    /// Red or blue; spectators and unassigned players are not on a side.
    pub fn is_playing(self) -> bool {
        matches!(self, Team::Red | Team::Blue)
    }

    pub fn opponent(self) -> Self {
        match self {
            Team::Red => Team::Blue,
            Team::Blue => Team::Red,
            other => other,
        }
    }
}

impl From<String> for Team {
    fn from(value: String) -> Self {
        match value.as_str() {
            "red" => Team::Red,
            "blue" => Team::Blue,
            "spectator" => Team::Spectator,
            _ => Team::Other,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Class {
    Other,
    Scout,
    Sniper,
    Soldier,
    Demoman,
    Medic,
    Heavy,
    Pyro,
    Spy,
    Engineer,
}

impl Class {
    const ALL: [Class; 10] = [
        Class::Other,
        Class::Scout,
        Class::Sniper,
        Class::Soldier,
        Class::Demoman,
        Class::Medic,
        Class::Heavy,
        Class::Pyro,
        Class::Spy,
        Class::Engineer,
    ];

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn name(self) -> &'static str {
        match self {
            Class::Other => "Other",
            Class::Scout => "Scout",
            Class::Sniper => "Sniper",
            Class::Soldier => "Soldier",
            Class::Demoman => "Demoman",
            Class::Medic => "Medic",
            Class::Heavy => "Heavy",
            Class::Pyro => "Pyro",
            Class::Spy => "Spy",
            Class::Engineer => "Engineer",
        }
    }
}

impl fmt::Display for Class {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.name())
    }
}

/// Aggregate stats for one participant over a whole demo.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerSummary {
    pub name: String,
    #[serde(default)]
    pub steam_id: SteamId,
    pub user_id: UserId,
    #[serde(default)]
    pub team: Team,
    /// Play time per class, indexed by the class number.
    #[serde(default)]
    pub classes: Vec<u32>,
    #[serde(default)]
    pub damage: u32,
    #[serde(default)]
    pub kills: u32,
    #[serde(default)]
    pub deaths: u32,
    #[serde(default)]
    pub assists: u32,
    #[serde(default)]
    pub healing: u32,
    #[serde(default)]
    pub invulns: u32,
    #[serde(default)]
    pub captures: u32,
}

impl PlayerSummary {
    pub fn main_class(&self) -> Option<Class> {
        self.classes
            .iter()
            .enumerate()
            .filter(|(_, play_time)| **play_time > 0)
            .max_by_key(|(index, play_time)| (**play_time, std::cmp::Reverse(*index)))
            .and_then(|(index, _)| Class::from_index(index))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameSummary {
    #[serde(default)]
    pub local_user_id: UserId,
    #[serde(default)]
    pub highlights: Vec<HighlightEvent>,
    #[serde(default)]
    pub red_team_score: u32,
    #[serde(default)]
    pub blue_team_score: u32,
    pub interval_per_tick: f64,
    #[serde(default)]
    pub players: Vec<PlayerSummary>,
}

/// Read-only `UserId -> PlayerSummary` index for one loaded session.
#[derive(Debug, Clone, Default)]
pub struct PlayerLookup {
    players: HashMap<UserId, PlayerSummary>,
}

impl PlayerLookup {
    pub fn from_players<I>(players: I) -> Self
    where
        I: IntoIterator<Item = PlayerSummary>,
    {
        let mut lookup = HashMap::new();
        for player in players {
            let user_id = player.user_id;
            if let Some(previous) = lookup.insert(user_id, player) {
                tracing::debug!(
                    user_id,
                    replaced_name = %previous.name,
                    "Duplicate player summary for user id, keeping the later entry"
                );
            }
        }

        Self { players: lookup }
    }

    pub fn get(&self, user_id: UserId) -> Option<&PlayerSummary> {
        self.players.get(&user_id)
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }
}

impl FromIterator<PlayerSummary> for PlayerLookup {
    fn from_iter<I: IntoIterator<Item = PlayerSummary>>(iter: I) -> Self {
        Self::from_players(iter)
    }
}

pub fn read_game_summary(path: &Path) -> Result<GameSummary, String> {
    let raw_json = std::fs::read_to_string(path).map_err(|error| {
        format!("Failed to read game summary '{}': {error}", path.display())
    })?;

    serde_json::from_str::<GameSummary>(&raw_json).map_err(|error| {
        format!("Failed to parse game summary '{}': {error}", path.display())
    })
}
