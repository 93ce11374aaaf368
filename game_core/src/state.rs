use glam::Vec2;

use crate::{Ball, Config, Paddle, Score, Side};

/// Where the match stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchPhase {
    Playing,
    /// A side reached the win score; frozen until the player clicks
    RoundOver { winner: Side },
}

/// Everything the simulation mutates, owned by the frame loop and passed by
/// reference to each system.
///
/// Write access per field: the input system owns `human`, the opponent
/// controller owns `opponent`, collision and scoring own `ball`, `score`
/// and `phase`.
#[derive(Debug, Clone, PartialEq)]
pub struct SimState {
    pub ball: Ball,
    pub human: Paddle,
    pub opponent: Paddle,
    pub score: Score,
    pub phase: MatchPhase,
}

impl SimState {
    pub fn new(config: &Config) -> Self {
        let start_y = config.clamp_paddle_y(config.paddle_start_y);
        Self {
            ball: Ball::new(config.center(), Vec2::new(config.ball_speed_initial, 0.0)),
            human: Paddle::new(Side::Human, start_y),
            opponent: Paddle::new(Side::Opponent, start_y),
            score: Score::new(),
            phase: MatchPhase::Playing,
        }
    }

    /// Re-centre the ball after a point; paddles return to their start
    /// position when the config asks for it
    pub fn reset(&mut self, config: &Config) {
        self.ball.reset(config);
        if config.reset_paddles_on_score {
            let start_y = config.clamp_paddle_y(config.paddle_start_y);
            self.human.y = start_y;
            self.opponent.y = start_y;
        }
    }

    /// Start a fresh match: zero scores, leave the round-over screen
    pub fn reset_match(&mut self, config: &Config) {
        self.score.reset();
        self.phase = MatchPhase::Playing;
        self.reset(config);
    }

    pub fn is_round_over(&self) -> bool {
        matches!(self.phase, MatchPhase::RoundOver { .. })
    }

    pub fn winner(&self) -> Option<Side> {
        match self.phase {
            MatchPhase::RoundOver { winner } => Some(winner),
            MatchPhase::Playing => None,
        }
    }

    pub fn paddle(&self, side: Side) -> &Paddle {
        match side {
            Side::Human => &self.human,
            Side::Opponent => &self.opponent,
        }
    }
}
