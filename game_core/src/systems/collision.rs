use crate::{Config, Events, SimState, Side};

/// Result of testing the ball against one paddle plane
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaddleContact {
    /// Ball is not at this paddle's plane, or is moving away from it
    None,
    /// Ball was returned
    Hit,
    /// Ball reached the plane outside the paddle's span
    Miss,
}

/// Reflect the ball off the top and bottom walls.
///
/// Only a ball moving into a wall is reflected, so a ball still overlapping
/// the wall on the next tick is not flipped back.
pub fn bounce_off_walls(state: &mut SimState, config: &Config, events: &mut Events) {
    let ball = &mut state.ball;
    let r = config.ball_radius;

    let into_top = ball.top(r) <= 0.0 && ball.vel.y < 0.0;
    let into_bottom = ball.bottom(r) >= config.surface_height && ball.vel.y > 0.0;

    if into_top || into_bottom {
        ball.vel.y = -ball.vel.y;
        events.ball_hit_wall = true;
    }
}

/// Test the ball against one side's paddle.
///
/// On a hit the horizontal velocity is reversed and the vertical velocity
/// gains spin proportional to the distance from the paddle centre.
pub fn check_paddle(
    state: &mut SimState,
    config: &Config,
    side: Side,
    events: &mut Events,
) -> PaddleContact {
    let paddle = *state.paddle(side);
    let ball = &mut state.ball;
    let r = config.ball_radius;

    let at_plane = match side {
        Side::Human => ball.vel.x < 0.0 && ball.left(r) <= config.paddle_thickness,
        Side::Opponent => {
            ball.vel.x > 0.0 && ball.right(r) >= config.surface_width - config.paddle_thickness
        }
    };
    if !at_plane {
        return PaddleContact::None;
    }

    if !paddle.spans(ball.pos.y, config.paddle_height) {
        return PaddleContact::Miss;
    }

    ball.vel.x = -ball.vel.x;
    let offset = ball.pos.y - paddle.center_y(config.paddle_height);
    ball.vel.y = (ball.vel.y + offset * config.ball_spin_factor)
        .clamp(-config.ball_speed_max_y, config.ball_speed_max_y);
    events.ball_hit_paddle = true;

    PaddleContact::Hit
}
