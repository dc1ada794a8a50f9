mod messages;
mod model;
mod render;
mod teams;

pub use messages::{disconnect_reason, killstreak_message, team_display_name, StreakTier};
pub use model::{
    sort_highlight_events, AirshotHighlight, ChatMessageHighlight, CrossbowAirshotHighlight,
    DecodedHighlight, Highlight, HighlightEvent, HighlightPlayer, KillHighlight,
    KillStreakEndedHighlight, KillStreakHighlight, PlayerConnectedHighlight,
    PlayerDisconnectedHighlight, PlayerSnapshot, PointCapturedHighlight, RoundWinHighlight,
};
pub use render::{
    resolve, resolve_decoded, Alignment, HighlightToken, IconKey, RenderedHighlight, TeamColor,
};
pub use teams::infer_teams;
