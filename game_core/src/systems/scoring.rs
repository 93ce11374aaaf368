use crate::{Config, Events, MatchPhase, SimState, Side};

/// Credit `scorer` with a point and serve again from the centre.
///
/// Reaching the win score ends the round; the ball is still re-centred but
/// stays hidden behind the round-over screen until the player restarts.
pub fn award_point(state: &mut SimState, config: &Config, scorer: Side, events: &mut Events) {
    state.score.increment(scorer);
    events.record_point(scorer);
    log::info!(
        "{:?} scored ({} - {})",
        scorer,
        state.score.human,
        state.score.opponent
    );

    if let Some(winner) = state.score.has_winner(config.win_score) {
        state.phase = MatchPhase::RoundOver { winner };
        events.round_over = true;
        log::info!("Round over, {:?} wins", winner);
    }

    state.reset(config);
}
