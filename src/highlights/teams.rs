use super::model::HighlightPlayer;
use crate::summary::Team;

/// Guesses the sides of a kill's participants when some of them carry no
/// usable team (usually a missed team update upstream). The first participant
/// on a real side decides, in killer, assister, victim order; the other side
/// is assumed to be its opponent.
///
/// Returns `(aggressor_team, victim_team)`. Kills and assists on one's own
/// team are colored as opposing sides. A missing killer (world damage) is
/// skipped.
pub fn infer_teams<K, A, V>(killer: Option<&K>, assister: Option<&A>, victim: &V) -> (Team, Team)
where
    K: HighlightPlayer + ?Sized,
    A: HighlightPlayer + ?Sized,
    V: HighlightPlayer + ?Sized,
{
    let killer_team = killer
        .map(|killer| killer.team())
        .filter(|team| team.is_playing());
    let assister_team = assister
        .map(|assister| assister.team())
        .filter(|team| team.is_playing());

    let (aggressor_team, mut victim_team) = if let Some(team) = killer_team {
        (team, team.opponent())
    } else if let Some(team) = assister_team {
        (team, team.opponent())
    } else if victim.team().is_playing() {
        (victim.team().opponent(), victim.team())
    } else {
        (Team::Other, Team::Other)
    };

    let self_inflicted = killer.is_some_and(|killer| killer.user_id() == victim.user_id())
        || assister.is_some_and(|assister| assister.user_id() == victim.user_id());
    if self_inflicted {
        victim_team = aggressor_team;
    }

    (aggressor_team, victim_team)
}
