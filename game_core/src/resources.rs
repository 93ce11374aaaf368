use crate::Side;

/// Game score tracking
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub human: u8,
    pub opponent: u8,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self, side: Side) {
        match side {
            Side::Human => self.human = self.human.saturating_add(1),
            Side::Opponent => self.opponent = self.opponent.saturating_add(1),
        }
    }

    pub fn get(&self, side: Side) -> u8 {
        match side {
            Side::Human => self.human,
            Side::Opponent => self.opponent,
        }
    }

    pub fn has_winner(&self, win_score: u8) -> Option<Side> {
        if self.human >= win_score {
            Some(Side::Human)
        } else if self.opponent >= win_score {
            Some(Side::Opponent)
        } else {
            None
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Events that occurred during this tick
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Events {
    pub human_scored: bool,
    pub opponent_scored: bool,
    pub ball_hit_paddle: bool,
    pub ball_hit_wall: bool,
    pub round_over: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.human_scored = false;
        self.opponent_scored = false;
        self.ball_hit_paddle = false;
        self.ball_hit_wall = false;
        self.round_over = false;
    }

    pub fn record_point(&mut self, scorer: Side) {
        match scorer {
            Side::Human => self.human_scored = true,
            Side::Opponent => self.opponent_scored = true,
        }
    }
}

/// Pointer input delivered by the host between ticks
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Pointer y relative to the top of the drawing surface
    PointerMoved { y: f32 },
    /// Click or tap; only acted on while the round-over overlay is shown
    Click,
}

/// Input queue, drained at the start of every tick so that a frame never
/// sees a half-applied input
#[derive(Debug, Clone, Default)]
pub struct InputQueue {
    pub inputs: Vec<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.inputs.is_empty()
    }

    pub fn push_input(&mut self, input: InputEvent) {
        self.inputs.push(input);
    }

    pub fn pop_inputs(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.inputs)
    }
}

/// Converts host refresh timestamps into whole simulation ticks
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameClock {
    last_ms: Option<f64>,
    accumulator: f32,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of fixed ticks owed for a frame displayed at `now_ms`.
    ///
    /// The first frame always runs exactly one tick. Gaps longer than
    /// `max_dt` (a backgrounded tab) are clamped so the game does not jump.
    pub fn advance(&mut self, now_ms: f64, fixed_dt: f32, max_dt: f32) -> u32 {
        let dt = match self.last_ms {
            None => fixed_dt,
            Some(last) => (((now_ms - last) / 1000.0) as f32).clamp(0.0, max_dt),
        };
        self.last_ms = Some(now_ms);

        self.accumulator += dt;
        let mut ticks = 0;
        while self.accumulator >= fixed_dt {
            self.accumulator -= fixed_dt;
            ticks += 1;
        }
        ticks
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Params;

    #[test]
    fn test_score_increment() {
        let mut score = Score::new();
        score.increment(Side::Human);
        score.increment(Side::Opponent);
        score.increment(Side::Opponent);
        assert_eq!(score.get(Side::Human), 1);
        assert_eq!(score.get(Side::Opponent), 2);
    }

    #[test]
    fn test_score_has_winner() {
        let mut score = Score::new();
        for _ in 0..2 {
            score.increment(Side::Opponent);
        }
        assert_eq!(score.has_winner(3), None, "No winner below threshold");
        score.increment(Side::Opponent);
        assert_eq!(score.has_winner(3), Some(Side::Opponent));
    }

    #[test]
    fn test_score_reset() {
        let mut score = Score { human: 2, opponent: 1 };
        score.reset();
        assert_eq!(score, Score::new());
    }

    #[test]
    fn test_events_clear() {
        let mut events = Events::new();
        events.record_point(Side::Human);
        events.record_point(Side::Opponent);
        events.ball_hit_paddle = true;
        events.ball_hit_wall = true;
        events.round_over = true;

        events.clear();

        assert_eq!(events, Events::new());
    }

    #[test]
    fn test_input_queue_drains_in_order() {
        let mut queue = InputQueue::new();
        queue.push_input(InputEvent::PointerMoved { y: 10.0 });
        queue.push_input(InputEvent::Click);

        let inputs = queue.pop_inputs();
        assert_eq!(
            inputs,
            vec![InputEvent::PointerMoved { y: 10.0 }, InputEvent::Click]
        );
        assert!(queue.is_empty());
    }

    #[test]
    fn test_frame_clock_first_frame_runs_one_tick() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.advance(1234.0, Params::FIXED_DT, Params::MAX_DT), 1);
    }

    #[test]
    fn test_frame_clock_catches_up_and_clamps() {
        let mut clock = FrameClock::new();
        clock.advance(0.0, Params::FIXED_DT, Params::MAX_DT);
        assert_eq!(clock.advance(40.0, Params::FIXED_DT, Params::MAX_DT), 2);
        // A one second stall is clamped to MAX_DT
        assert_eq!(clock.advance(1040.0, Params::FIXED_DT, Params::MAX_DT), 6);
        assert_eq!(clock.advance(1045.0, Params::FIXED_DT, Params::MAX_DT), 0);
    }

    #[test]
    fn test_frame_clock_ignores_backwards_timestamps() {
        let mut clock = FrameClock::new();
        clock.advance(500.0, Params::FIXED_DT, Params::MAX_DT);
        assert_eq!(clock.advance(100.0, Params::FIXED_DT, Params::MAX_DT), 0);
    }
}
