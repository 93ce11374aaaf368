use glam::Vec2;

use crate::{Config, InputEvent, InputQueue, SimState};

/// Convert a viewport pointer position into drawing-surface coordinates
pub fn pointer_to_surface(client: Vec2, rect_origin: Vec2, scroll: Vec2) -> Vec2 {
    client - rect_origin - scroll
}

/// Top edge that centres the human paddle on the pointer, clamped to the field
pub fn paddle_top_for_pointer(pointer_y: f32, config: &Config) -> f32 {
    config.clamp_paddle_y(pointer_y - config.paddle_height / 2.0)
}

/// Apply queued pointer input. Only the human paddle and the restart
/// transition are touched here.
pub fn ingest_inputs(state: &mut SimState, config: &Config, queue: &mut InputQueue) {
    for input in queue.pop_inputs() {
        match input {
            InputEvent::PointerMoved { y } => {
                state.human.y = paddle_top_for_pointer(y, config);
            }
            InputEvent::Click => {
                if state.is_round_over() {
                    log::info!("Restarting match");
                    state.reset_match(config);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{MatchPhase, Side};

    #[test]
    fn test_pointer_to_surface_subtracts_rect_and_scroll() {
        let p = pointer_to_surface(
            Vec2::new(300.0, 420.0),
            Vec2::new(100.0, 50.0),
            Vec2::new(0.0, 20.0),
        );
        assert_eq!(p, Vec2::new(200.0, 350.0));
    }

    #[test]
    fn test_paddle_centres_on_pointer() {
        let config = Config::new();
        assert_eq!(paddle_top_for_pointer(300.0, &config), 250.0);
    }

    #[test]
    fn test_pointer_out_of_range_is_clamped() {
        let config = Config::new();
        assert_eq!(paddle_top_for_pointer(-500.0, &config), 0.0);
        assert_eq!(paddle_top_for_pointer(10.0, &config), 0.0);
        assert_eq!(
            paddle_top_for_pointer(5_000.0, &config),
            config.max_paddle_y()
        );
    }

    #[test]
    fn test_pointer_moves_only_human_paddle() {
        let config = Config::new();
        let mut state = SimState::new(&config);
        let before = state.clone();
        let mut queue = InputQueue::new();
        queue.push_input(InputEvent::PointerMoved { y: 400.0 });

        ingest_inputs(&mut state, &config, &mut queue);

        assert_eq!(state.human.y, 350.0);
        assert_eq!(state.opponent, before.opponent);
        assert_eq!(state.ball, before.ball);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_click_ignored_while_playing() {
        let config = Config::new();
        let mut state = SimState::new(&config);
        state.score.human = 2;
        let mut queue = InputQueue::new();
        queue.push_input(InputEvent::Click);

        ingest_inputs(&mut state, &config, &mut queue);

        assert_eq!(state.score.human, 2, "click mid-match must not reset");
    }

    #[test]
    fn test_click_restarts_after_round_over() {
        let config = Config::new();
        let mut state = SimState::new(&config);
        state.score.opponent = config.win_score;
        state.phase = MatchPhase::RoundOver {
            winner: Side::Opponent,
        };
        let mut queue = InputQueue::new();
        queue.push_input(InputEvent::Click);

        ingest_inputs(&mut state, &config, &mut queue);

        assert!(!state.is_round_over());
        assert_eq!(state.score.opponent, 0);
    }
}
