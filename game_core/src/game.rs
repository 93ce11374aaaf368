use crate::{step, Config, Events, FrameClock, InputEvent, InputQueue, SimState};

/// A local game: simulation state plus everything needed to tick it
#[derive(Debug, Clone)]
pub struct Game {
    pub state: SimState,
    pub config: Config,
    pub inputs: InputQueue,
    pub events: Events,
    pub clock: FrameClock,
    pub tick: u64,
}

impl Game {
    pub fn new(config: Config) -> Self {
        Self {
            state: SimState::new(&config),
            config,
            inputs: InputQueue::new(),
            events: Events::new(),
            clock: FrameClock::new(),
            tick: 0,
        }
    }

    /// Queue input; it is applied at the start of the next tick
    pub fn push_input(&mut self, input: InputEvent) {
        self.inputs.push_input(input);
    }

    /// Run exactly one simulation tick
    pub fn step_once(&mut self) {
        step(
            &mut self.state,
            &self.config,
            &mut self.inputs,
            &mut self.events,
        );
        self.tick += 1;

        if self.events.round_over {
            log::info!(
                "Match finished at tick {} ({} - {})",
                self.tick,
                self.state.score.human,
                self.state.score.opponent
            );
        }
    }

    /// Run however many ticks a frame displayed at `now_ms` owes.
    /// Returns the number of ticks run.
    pub fn advance(&mut self, now_ms: f64) -> u32 {
        let ticks = self
            .clock
            .advance(now_ms, self.config.fixed_dt, self.config.max_dt);
        for _ in 0..ticks {
            self.step_once();
        }
        ticks
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    #[test]
    fn test_step_once_moves_ball() {
        let mut game = Game::default();
        let start = game.state.ball.pos;

        game.step_once();

        assert_eq!(game.tick, 1);
        assert_eq!(
            game.state.ball.pos,
            start + Vec2::new(game.config.ball_speed_initial, 0.0)
        );
    }

    #[test]
    fn test_advance_runs_owed_ticks() {
        let mut game = Game::default();
        assert_eq!(game.advance(0.0), 1);
        assert_eq!(game.advance(40.0), 2);
        assert_eq!(game.tick, 3);
    }

    #[test]
    fn test_input_applied_on_next_tick() {
        let mut game = Game::default();
        game.push_input(InputEvent::PointerMoved { y: 100.0 });
        assert_eq!(game.state.human.y, game.config.paddle_start_y);

        game.step_once();

        assert_eq!(game.state.human.y, 50.0);
    }
}
