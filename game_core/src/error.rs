use thiserror::Error;

/// Failures reported by a drawing surface or the frame host behind it.
///
/// None of these are fatal to the game: the frame loop treats them as a
/// signal to stop scheduling further frames.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SurfaceError {
    #[error("render target is no longer attached")]
    Detached,
    #[error("draw call failed: {0}")]
    Draw(String),
    #[error("frame request rejected: {0}")]
    Schedule(String),
}

/// Rejected configuration overrides.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("{field} must be positive, got {value}")]
    NotPositive { field: &'static str, value: f32 },
    #[error("{field} must be a finite number, got {value}")]
    NotFinite { field: &'static str, value: f32 },
    #[error("{field} must be finite and not negative, got {value}")]
    Negative { field: &'static str, value: f32 },
    #[error("max_dt {max_dt} over fixed_dt {fixed_dt} allows too many ticks per frame")]
    TooManyTicks { fixed_dt: f32, max_dt: f32 },
    #[error("paddle height {paddle_height} does not fit a surface {surface_height} high")]
    PaddleTooTall {
        paddle_height: f32,
        surface_height: f32,
    },
    #[error("win score must be at least 1")]
    ZeroWinScore,
}
