use crate::{Config, OpponentPolicy, SimState};

/// Move the opponent paddle according to the configured policy.
///
/// Reads only the current ball state; no prediction and no randomness.
/// Does nothing while the round-over screen is up.
pub fn move_opponent(state: &mut SimState, config: &Config) {
    if state.is_round_over() {
        return;
    }

    let ball = state.ball;
    let paddle = &mut state.opponent;

    let target = match config.opponent {
        OpponentPolicy::Threshold {
            speed_threshold,
            fast_indent,
            slow_indent,
        } => {
            let indent = if ball.vel.y.abs() > speed_threshold {
                fast_indent
            } else {
                slow_indent
            };
            ball.pos.y - indent
        }
        OpponentPolicy::ProportionalChase { reaction_factor } => {
            let max_step = reaction_factor * ball.vel.y.abs();
            let diff = ball.pos.y - paddle.center_y(config.paddle_height);
            // Clamping the step stops the paddle exactly on the ball
            paddle.y + diff.clamp(-max_step, max_step)
        }
    };

    paddle.y = config.clamp_paddle_y(target);
}
