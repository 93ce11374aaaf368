/// Game tuning parameters for Pong
///
/// Speeds are in pixels per simulation tick. One tick is `FIXED_DT` seconds.
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Surface
    pub const SURFACE_WIDTH: f32 = 800.0;
    pub const SURFACE_HEIGHT: f32 = 600.0;

    // Paddle
    pub const PADDLE_THICKNESS: f32 = 10.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    pub const PADDLE_START_Y: f32 = 150.0;

    // Ball
    pub const BALL_RADIUS: f32 = 15.0;
    pub const BALL_SPEED_INITIAL: f32 = 20.0;
    pub const BALL_SPEED_MAX_Y: f32 = 20.0;
    pub const BALL_SPIN_FACTOR: f32 = 0.2; // vy gained per pixel off paddle centre

    // Opponent
    pub const OPPONENT_SPEED_THRESHOLD: f32 = 9.0; // 0 (hard) to 10 (easy)
    pub const OPPONENT_FAST_INDENT: f32 = -10.0;
    pub const OPPONENT_SLOW_INDENT: f32 = 40.0;
    pub const OPPONENT_REACTION_FACTOR: f32 = 0.9;

    // Score
    pub const WIN_SCORE: u8 = 3;

    // Timing
    pub const FIXED_DT: f32 = 1.0 / 60.0;
    pub const MAX_DT: f32 = 0.1;
    pub const MAX_TICKS_PER_FRAME: f32 = 120.0; // upper bound on max_dt / fixed_dt
}
