use glam::Vec2;

use crate::{
    draw_circle, draw_net, draw_rect, Color, Config, SimState, Side, Surface, SurfaceError,
};

/// Paint the current state. Reads the state only.
pub fn render<S: Surface + ?Sized>(
    surface: &mut S,
    state: &SimState,
    config: &Config,
) -> Result<(), SurfaceError> {
    let w = config.surface_width;

    draw_rect(surface, 0.0, 0.0, w, config.surface_height, Color::BLACK)?;
    draw_net(surface, config)?;
    surface.fill_rect(state.human.bounds(config), Color::GREEN)?;
    surface.fill_rect(state.opponent.bounds(config), Color::GREEN)?;

    if let Some(winner) = state.winner() {
        match winner {
            Side::Human => surface.fill_text("You Won!", Vec2::new(100.0, 100.0), Color::WHITE)?,
            Side::Opponent => {
                surface.fill_text("Computer Won!", Vec2::new(w - 150.0, 100.0), Color::WHITE)?
            }
        }
        surface.fill_text("click to continue", Vec2::new(300.0, 310.0), Color::WHITE)?;
        return Ok(());
    }

    draw_circle(surface, state.ball.pos, config.ball_radius, Color::RED)?;

    surface.fill_text(
        &state.score.human.to_string(),
        Vec2::new(100.0, 100.0),
        Color::WHITE,
    )?;
    surface.fill_text(
        &state.score.opponent.to_string(),
        Vec2::new(w - 100.0, 100.0),
        Color::WHITE,
    )?;

    Ok(())
}
