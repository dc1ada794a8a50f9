use serde::Serialize;

use super::messages::{
    disconnect_reason, killstreak_message, team_display_name, StreakTier,
    KILL_ICON_ASSISTED_SUICIDE, KILL_ICON_FALL, KILL_ICON_SUICIDE, UNKNOWN_PLAYER_NAME,
};
use super::model::{
    DecodedHighlight, Highlight, HighlightPlayer, KillHighlight, KillStreakEndedHighlight,
    PlayerDisconnectedHighlight, PointCapturedHighlight,
};
use super::teams::infer_teams;
use crate::summary::{PlayerLookup, Team, UserId};

/// Sentinel user id for "no player", e.g. world damage or no assister.
const NO_PLAYER: UserId = 0;

/// Color class of a rendered player name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TeamColor {
    Red,
    Blue,
}

impl TeamColor {
    pub fn from_team(team: Team) -> Option<Self> {
        match team {
            Team::Red => Some(TeamColor::Red),
            Team::Blue => Some(TeamColor::Blue),
            Team::Spectator | Team::Other => None,
        }
    }
}

/// Symbolic icon reference, resolved to an asset by the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase", tag = "kind", content = "key")]
pub enum IconKey {
    KillIcon(String),
    RedCapture,
    BlueCapture,
    Killstreak(StreakTier),
}

impl IconKey {
    pub fn asset_name(&self) -> &str {
        match self {
            IconKey::KillIcon(kill_icon) => kill_icon,
            IconKey::RedCapture => "redcapture",
            IconKey::BlueCapture => "bluecapture",
            IconKey::Killstreak(tier) => tier.asset_name(),
        }
    }

    fn capture(team_number: u32) -> Option<Self> {
        match Team::from_number(team_number) {
            Team::Red => Some(IconKey::RedCapture),
            Team::Blue => Some(IconKey::BlueCapture),
            Team::Spectator | Team::Other => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase", tag = "type")]
pub enum HighlightToken {
    Text { text: String },
    Player { name: String, color: Option<TeamColor> },
    Icon { icon: IconKey },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct RenderedHighlight {
    pub alignment: Alignment,
    pub tokens: Vec<HighlightToken>,
}

impl RenderedHighlight {
    fn new(alignment: Alignment) -> Self {
        Self {
            alignment,
            tokens: Vec::new(),
        }
    }

    fn line(alignment: Alignment, text: impl Into<String>) -> Self {
        let mut rendered = Self::new(alignment);
        rendered.text(text);
        rendered
    }

    fn text(&mut self, text: impl Into<String>) -> &mut Self {
        self.tokens.push(HighlightToken::Text { text: text.into() });
        self
    }

    /// `team` overrides the player's own team when it names a side.
    fn player<P>(&mut self, player: Option<&P>, team: Option<Team>) -> &mut Self
    where
        P: HighlightPlayer + ?Sized,
    {
        let color = team
            .and_then(TeamColor::from_team)
            .or_else(|| player.and_then(|player| TeamColor::from_team(player.team())));
        let name = player.map_or(UNKNOWN_PLAYER_NAME, |player| player.name());

        self.tokens.push(HighlightToken::Player {
            name: name.to_string(),
            color,
        });
        self
    }

    fn icon(&mut self, icon: IconKey) -> &mut Self {
        self.tokens.push(HighlightToken::Icon { icon });
        self
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Flattens the tokens into one line; icons become `[asset_name]`.
    pub fn plain_text(&self) -> String {
        self.tokens
            .iter()
            .map(|token| match token {
                HighlightToken::Text { text } => text.clone(),
                HighlightToken::Player { name, .. } => name.clone(),
                HighlightToken::Icon { icon } => format!("[{}]", icon.asset_name()),
            })
            .collect()
    }
}

/// Renders one highlight. Every variant has exactly one rule.
pub fn resolve(highlight: &Highlight, players: &PlayerLookup) -> RenderedHighlight {
    match highlight {
        Highlight::Kill(kill) => render_kill(kill),
        Highlight::KillStreak(killstreak) => {
            let mut rendered = RenderedHighlight::new(Alignment::Right);
            rendered
                .player(Some(&killstreak.player), None)
                .text(format!(" {} ", killstreak_message(killstreak.streak)))
                .icon(IconKey::Killstreak(StreakTier::from_streak(killstreak.streak)));
            rendered
        }
        Highlight::KillStreakEnded(ended) => render_killstreak_ended(ended),
        Highlight::ChatMessage(chat) => {
            let mut rendered = RenderedHighlight::new(Alignment::Left);
            rendered
                .player(Some(&chat.sender), None)
                .text(": ")
                .text(chat.text.as_str());
            rendered
        }
        Highlight::Airshot(airshot) => RenderedHighlight::line(
            Alignment::Center,
            format!(
                "AIRSHOT: {} airshot {}",
                airshot.attacker.name, airshot.victim.name
            ),
        ),
        Highlight::CrossbowAirshot(airshot) => RenderedHighlight::line(
            Alignment::Center,
            format!(
                "AIRSHOT: {} airshot {}",
                airshot.healer.name, airshot.target.name
            ),
        ),
        Highlight::PointCaptured(capture) => render_point_captured(capture, players),
        Highlight::RoundStalemate => {
            RenderedHighlight::line(Alignment::Center, "Round ended in a stalemate")
        }
        Highlight::RoundStart => RenderedHighlight::line(Alignment::Center, "New round started"),
        Highlight::RoundWin(round_win) => RenderedHighlight::line(
            Alignment::Center,
            format!("{} won the round", team_display_name(round_win.winner)),
        ),
        Highlight::PlayerConnected(connected) => RenderedHighlight::line(
            Alignment::Left,
            format!("{} has joined the game", player_name(players, connected.user_id)),
        ),
        Highlight::PlayerDisconnected(disconnected) => {
            render_player_disconnected(disconnected, players)
        }
        Highlight::Pause => RenderedHighlight::line(Alignment::Center, "Game paused."),
        Highlight::Unpause => RenderedHighlight::line(Alignment::Center, "Game resumed."),
    }
}

/// Renders an event as decoded from the session. Unrecognized payloads are
/// reported and render as nothing.
pub fn resolve_decoded(highlight: &DecodedHighlight, players: &PlayerLookup) -> RenderedHighlight {
    match highlight {
        DecodedHighlight::Known(highlight) => resolve(highlight, players),
        DecodedHighlight::Unrecognized(raw) => {
            let tag = raw.get("t").and_then(|tag| tag.as_str()).unwrap_or("<missing>");
            tracing::error!(tag = %tag, payload = %raw, "Unknown highlight");
            RenderedHighlight::default()
        }
    }
}

fn player_name(players: &PlayerLookup, user_id: UserId) -> &str {
    players
        .get(user_id)
        .map_or(UNKNOWN_PLAYER_NAME, |player| player.name.as_str())
}

fn render_kill(kill: &KillHighlight) -> RenderedHighlight {
    let KillHighlight {
        killer,
        assister,
        victim,
        ..
    } = kill;

    // Snapshots often miss team updates, so color from inferred sides instead.
    let (aggressor_team, victim_team) = infer_teams(killer.as_ref(), assister.as_ref(), victim);
    let assister = assister
        .as_ref()
        .filter(|assister| assister.user_id != NO_PLAYER);

    let mut rendered = RenderedHighlight::new(Alignment::Right);
    match kill.kill_icon.as_str() {
        KILL_ICON_FALL => {
            rendered
                .player(Some(victim), Some(victim_team))
                .text(" fell to a clumsy, painful death");
        }
        KILL_ICON_SUICIDE => {
            rendered
                .player(Some(victim), Some(victim_team))
                .text(" bid farewell, cruel world!");
        }
        KILL_ICON_ASSISTED_SUICIDE => {
            rendered.player(killer.as_ref(), Some(aggressor_team));
            if let Some(assister) = assister {
                rendered.text(" + ").player(Some(assister), Some(aggressor_team));
            }
            rendered
                .text(" finished off ")
                .player(Some(victim), Some(victim_team));
        }
        kill_icon => {
            let killer = killer.as_ref().filter(|killer| {
                killer.user_id != NO_PLAYER && killer.user_id != victim.user_id
            });
            if let Some(killer) = killer {
                rendered.player(Some(killer), Some(aggressor_team));
            }
            if let Some(assister) = assister {
                rendered.text(" + ").player(Some(assister), Some(aggressor_team));
            }
            if !rendered.is_empty() {
                rendered.text(" ");
            }
            rendered
                .icon(IconKey::KillIcon(kill_icon.to_string()))
                .text(" ")
                .player(Some(victim), Some(victim_team));
        }
    }

    rendered
}

fn render_killstreak_ended(ended: &KillStreakEndedHighlight) -> RenderedHighlight {
    let mut rendered = RenderedHighlight::new(Alignment::Right);
    rendered.player(Some(&ended.killer), None);
    if ended.killer.user_id == ended.victim.user_id {
        rendered.text(" ended their own killstreak ");
    } else {
        rendered
            .text(" ended ")
            .player(Some(&ended.victim), None)
            .text("'s killstreak ");
    }
    rendered.icon(IconKey::Killstreak(StreakTier::from_streak(ended.streak)));
    rendered
}

fn render_point_captured(
    capture: &PointCapturedHighlight,
    players: &PlayerLookup,
) -> RenderedHighlight {
    let capturing_team = Team::from_number(capture.capturing_team);
    let mut rendered = RenderedHighlight::new(Alignment::Right);

    // Cappers missing from the lookup are dropped rather than shown as unknown.
    for capper in capture
        .cappers
        .iter()
        .filter_map(|user_id| players.get(*user_id))
    {
        if !rendered.is_empty() {
            rendered.text(" + ");
        }
        rendered.player(Some(capper), Some(capturing_team));
    }

    if !rendered.is_empty() {
        rendered.text(" ");
    }
    if let Some(icon) = IconKey::capture(capture.capturing_team) {
        rendered.icon(icon).text(" ");
    }
    rendered.text(format!("captured {}", capture.point_name));
    rendered
}

fn render_player_disconnected(
    disconnected: &PlayerDisconnectedHighlight,
    players: &PlayerLookup,
) -> RenderedHighlight {
    RenderedHighlight::line(
        Alignment::Left,
        format!(
            "{} left the game ({})",
            player_name(players, disconnected.user_id),
            disconnect_reason(&disconnected.reason)
        ),
    )
}
