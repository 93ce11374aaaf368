pub mod components;
pub mod config;
pub mod draw;
pub mod error;
pub mod game;
pub mod geometry;
pub mod params;
pub mod render;
pub mod resources;
pub mod scheduler;
pub mod state;
pub mod systems;

pub use components::*;
pub use config::*;
pub use draw::*;
pub use error::*;
pub use game::*;
pub use geometry::*;
pub use params::*;
pub use render::*;
pub use resources::*;
pub use scheduler::*;
pub use state::*;

use systems::*;

/// Run one deterministic Pong simulation tick
pub fn step(state: &mut SimState, config: &Config, inputs: &mut InputQueue, events: &mut Events) {
    // Clear events at start of tick
    events.clear();

    // 1. Ingest inputs (human paddle, restart click)
    ingest_inputs(state, config, inputs);

    // Frozen until the player clicks through the round-over screen
    if state.is_round_over() {
        return;
    }

    // 2. Opponent tracks the ball
    move_opponent(state, config);

    // Integration below uses the velocity the ball entered the tick with
    let start_vel = state.ball.vel;

    // 3. Top/bottom walls
    bounce_off_walls(state, config, events);

    // 4. Paddle planes, left then right; a miss re-serves from the centre
    for side in [Side::Human, Side::Opponent] {
        if check_paddle(state, config, side, events) == PaddleContact::Miss {
            award_point(state, config, side.opposite(), events);
            return;
        }
    }

    // 5. Move ball
    integrate_ball(&mut state.ball, start_vel, config);
}
