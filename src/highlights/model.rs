use serde::{Deserialize, Serialize};

use crate::summary::{PlayerSummary, Team, UserId};

/// A participant as recorded at the moment of one event. Name and team may
/// be stale relative to the session's player summaries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSnapshot {
    pub user_id: UserId,
    pub name: String,
    #[serde(default)]
    pub team: Team,
}

/// Anything a highlight can name: an event snapshot or a session summary.
pub trait HighlightPlayer {
    fn user_id(&self) -> UserId;
    fn name(&self) -> &str;
    fn team(&self) -> Team;
}

impl HighlightPlayer for PlayerSnapshot {
    fn user_id(&self) -> UserId {
        self.user_id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn team(&self) -> Team {
        self.team
    }
}

impl HighlightPlayer for PlayerSummary {
    fn user_id(&self) -> UserId {
        self.user_id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn team(&self) -> Team {
        self.team
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KillHighlight {
    /// `None` for world and environmental kills.
    #[serde(default)]
    pub killer: Option<PlayerSnapshot>,
    #[serde(default)]
    pub assister: Option<PlayerSnapshot>,
    pub victim: PlayerSnapshot,
    #[serde(default)]
    pub weapon: String,
    pub kill_icon: String,
    #[serde(default)]
    pub streak: u32,
    #[serde(default)]
    pub drop: bool,
    #[serde(default)]
    pub airshot: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KillStreakHighlight {
    pub player: PlayerSnapshot,
    pub streak: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KillStreakEndedHighlight {
    pub killer: PlayerSnapshot,
    pub victim: PlayerSnapshot,
    pub streak: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessageHighlight {
    pub sender: PlayerSnapshot,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AirshotHighlight {
    pub attacker: PlayerSnapshot,
    pub victim: PlayerSnapshot,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrossbowAirshotHighlight {
    pub healer: PlayerSnapshot,
    pub target: PlayerSnapshot,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointCapturedHighlight {
    pub point_name: String,
    pub capturing_team: u32,
    #[serde(default)]
    pub cappers: Vec<UserId>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundWinHighlight {
    pub winner: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerConnectedHighlight {
    pub user_id: UserId,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerDisconnectedHighlight {
    pub user_id: UserId,
    #[serde(default)]
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "t", content = "c")]
pub enum Highlight {
    Kill(KillHighlight),
    KillStreak(KillStreakHighlight),
    KillStreakEnded(KillStreakEndedHighlight),
    ChatMessage(ChatMessageHighlight),
    Airshot(AirshotHighlight),
    CrossbowAirshot(CrossbowAirshotHighlight),
    PointCaptured(PointCapturedHighlight),
    RoundStalemate,
    RoundStart,
    RoundWin(RoundWinHighlight),
    PlayerConnected(PlayerConnectedHighlight),
    PlayerDisconnected(PlayerDisconnectedHighlight),
    Pause,
    Unpause,
}

impl Highlight {
    pub fn tag(&self) -> &'static str {
        match self {
            Highlight::Kill(_) => "Kill",
            Highlight::KillStreak(_) => "KillStreak",
            Highlight::KillStreakEnded(_) => "KillStreakEnded",
            Highlight::ChatMessage(_) => "ChatMessage",
            Highlight::Airshot(_) => "Airshot",
            Highlight::CrossbowAirshot(_) => "CrossbowAirshot",
            Highlight::PointCaptured(_) => "PointCaptured",
            Highlight::RoundStalemate => "RoundStalemate",
            Highlight::RoundStart => "RoundStart",
            Highlight::RoundWin(_) => "RoundWin",
            Highlight::PlayerConnected(_) => "PlayerConnected",
            Highlight::PlayerDisconnected(_) => "PlayerDisconnected",
            Highlight::Pause => "Pause",
            Highlight::Unpause => "Unpause",
        }
    }
}

/// An event payload as it arrived from the session loader. Payloads that do
/// not decode as a known highlight are kept verbatim so a single bad event
/// never fails the whole summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DecodedHighlight {
    Known(Highlight),
    Unrecognized(serde_json::Value),
}

impl From<Highlight> for DecodedHighlight {
    fn from(highlight: Highlight) -> Self {
        DecodedHighlight::Known(highlight)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HighlightEvent {
    pub tick: u32,
    pub event: DecodedHighlight,
}

/// Orders events by tick. Events sharing a tick keep their recorded order.
pub fn sort_highlight_events(events: &mut [HighlightEvent]) {
    events.sort_by_key(|event| event.tick);
}
