use serde::Serialize;

use crate::summary::TEAM_NAMES;

pub(crate) const UNKNOWN_PLAYER_NAME: &str = "<unknown>";

pub(crate) const KILL_ICON_FALL: &str = "#fall";
pub(crate) const KILL_ICON_SUICIDE: &str = "#suicide";
pub(crate) const KILL_ICON_ASSISTED_SUICIDE: &str = "#assisted_suicide";

pub fn killstreak_message(streak: u32) -> &'static str {
    match streak {
        5 => "is on a killing spree!",
        10 => "is unstoppable!",
        15 => "is on a rampage!",
        20 => "is God-like!",
        _ => "is still God-like!",
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum StreakTier {
    Spree,
    Unstoppable,
    Rampage,
    GodLike,
}

impl StreakTier {
    pub fn from_streak(streak: u32) -> Self {
        match streak {
            0..=9 => StreakTier::Spree,
            10..=14 => StreakTier::Unstoppable,
            15..=19 => StreakTier::Rampage,
            _ => StreakTier::GodLike,
        }
    }

    pub fn asset_name(self) -> &'static str {
        match self {
            StreakTier::Spree => "killstreak_spree",
            StreakTier::Unstoppable => "killstreak_unstoppable",
            StreakTier::Rampage => "killstreak_rampage",
            StreakTier::GodLike => "killstreak_godlike",
        }
    }
}

pub fn disconnect_reason(reason: &str) -> &str {
    match reason {
        "#TF_MM_Generic_Kicked" => "Removed from match by system",
        "#TF_Idle_kicked" => "Kicked due to inactivity",
        other => other,
    }
}

/// Out-of-range codes name the unassigned team.
pub fn team_display_name(team_number: u32) -> &'static str {
    usize::try_from(team_number)
        .ok()
        .and_then(|index| TEAM_NAMES.get(index))
        .copied()
        .unwrap_or(TEAM_NAMES[0])
}

#[cfg(test)]
mod tests {
    use super::{disconnect_reason, killstreak_message, team_display_name, StreakTier};

    #[test]
    fn killstreak_messages_follow_milestones() {
        assert_eq!(killstreak_message(5), "is on a killing spree!");
        assert_eq!(killstreak_message(10), "is unstoppable!");
        assert_eq!(killstreak_message(15), "is on a rampage!");
        assert_eq!(killstreak_message(20), "is God-like!");
        assert_eq!(killstreak_message(37), "is still God-like!");
        assert_eq!(killstreak_message(7), "is still God-like!");
    }

    #[test]
    fn streak_tiers_cover_every_streak() {
        assert_eq!(StreakTier::from_streak(5), StreakTier::Spree);
        assert_eq!(StreakTier::from_streak(12), StreakTier::Unstoppable);
        assert_eq!(StreakTier::from_streak(15), StreakTier::Rampage);
        assert_eq!(StreakTier::from_streak(20), StreakTier::GodLike);
        assert_eq!(StreakTier::from_streak(u32::MAX), StreakTier::GodLike);
    }

    #[test]
    fn remaps_known_disconnect_reasons_only() {
        assert_eq!(disconnect_reason("#TF_Idle_kicked"), "Kicked due to inactivity");
        assert_eq!(
            disconnect_reason("#TF_MM_Generic_Kicked"),
            "Removed from match by system"
        );
        assert_eq!(disconnect_reason("custom reason"), "custom reason");
    }

    #[test]
    fn team_names_default_to_unassigned() {
        assert_eq!(team_display_name(2), "RED");
        assert_eq!(team_display_name(3), "BLU");
        assert_eq!(team_display_name(99), "UNASSIGNED");
    }
}
