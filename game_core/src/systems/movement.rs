use glam::Vec2;

use crate::{Ball, Config};

/// Advance the ball by the velocity it had at the start of the tick.
///
/// Velocity changes made by this tick's collision checks take effect on the
/// next tick. The centre is then clamped so the ball stays on the surface.
pub fn integrate_ball(ball: &mut Ball, start_vel: Vec2, config: &Config) {
    let r = config.ball_radius;
    ball.pos += start_vel;
    ball.pos.x = ball.pos.x.clamp(r, (config.surface_width - r).max(r));
    ball.pos.y = ball.pos.y.clamp(r, (config.surface_height - r).max(r));
}
