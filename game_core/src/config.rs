use glam::Vec2;
use serde::Deserialize;

use crate::{ConfigError, Params, Side};

/// Rule used to drive the opponent paddle
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum OpponentPolicy {
    /// Snap the paddle top to `ball.y - indent`, where the indent depends on
    /// how fast the ball moves vertically.
    Threshold {
        speed_threshold: f32,
        fast_indent: f32,
        slow_indent: f32,
    },
    /// Move the paddle centre toward the ball by a fraction of the ball's
    /// vertical speed each tick.
    ProportionalChase { reaction_factor: f32 },
}

impl Default for OpponentPolicy {
    fn default() -> Self {
        Self::Threshold {
            speed_threshold: Params::OPPONENT_SPEED_THRESHOLD,
            fast_indent: Params::OPPONENT_FAST_INDENT,
            slow_indent: Params::OPPONENT_SLOW_INDENT,
        }
    }
}

impl OpponentPolicy {
    pub fn proportional_chase() -> Self {
        Self::ProportionalChase {
            reaction_factor: Params::OPPONENT_REACTION_FACTOR,
        }
    }
}

/// Game configuration
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub surface_width: f32,
    pub surface_height: f32,
    pub paddle_thickness: f32,
    pub paddle_height: f32,
    pub paddle_start_y: f32,
    pub ball_radius: f32,
    pub ball_speed_initial: f32,
    pub ball_speed_max_y: f32,
    pub ball_spin_factor: f32,
    pub win_score: u8,
    pub reset_paddles_on_score: bool,
    pub opponent: OpponentPolicy,
    pub fixed_dt: f32,
    pub max_dt: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            surface_width: Params::SURFACE_WIDTH,
            surface_height: Params::SURFACE_HEIGHT,
            paddle_thickness: Params::PADDLE_THICKNESS,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_start_y: Params::PADDLE_START_Y,
            ball_radius: Params::BALL_RADIUS,
            ball_speed_initial: Params::BALL_SPEED_INITIAL,
            ball_speed_max_y: Params::BALL_SPEED_MAX_Y,
            ball_spin_factor: Params::BALL_SPIN_FACTOR,
            win_score: Params::WIN_SCORE,
            reset_paddles_on_score: true,
            opponent: OpponentPolicy::default(),
            fixed_dt: Params::FIXED_DT,
            max_dt: Params::MAX_DT,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check that every value describes a playable, finite game
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("surface_width", self.surface_width),
            ("surface_height", self.surface_height),
            ("paddle_thickness", self.paddle_thickness),
            ("paddle_height", self.paddle_height),
            ("ball_radius", self.ball_radius),
            ("ball_speed_initial", self.ball_speed_initial),
            ("fixed_dt", self.fixed_dt),
            ("max_dt", self.max_dt),
        ];
        for (field, value) in positive {
            // `!(v > 0)` also catches NaN
            if !(value > 0.0) || value.is_infinite() {
                return Err(ConfigError::NotPositive { field, value });
            }
        }

        let mut non_negative = vec![("ball_speed_max_y", self.ball_speed_max_y)];
        let mut finite = vec![
            ("paddle_start_y", self.paddle_start_y),
            ("ball_spin_factor", self.ball_spin_factor),
        ];
        match self.opponent {
            OpponentPolicy::Threshold {
                speed_threshold,
                fast_indent,
                slow_indent,
            } => finite.extend([
                ("speed_threshold", speed_threshold),
                ("fast_indent", fast_indent),
                ("slow_indent", slow_indent),
            ]),
            OpponentPolicy::ProportionalChase { reaction_factor } => {
                non_negative.push(("reaction_factor", reaction_factor))
            }
        }
        for (field, value) in non_negative {
            if !(value >= 0.0) || value.is_infinite() {
                return Err(ConfigError::Negative { field, value });
            }
        }
        for (field, value) in finite {
            if !value.is_finite() {
                return Err(ConfigError::NotFinite { field, value });
            }
        }

        if self.max_dt / self.fixed_dt > Params::MAX_TICKS_PER_FRAME {
            return Err(ConfigError::TooManyTicks {
                fixed_dt: self.fixed_dt,
                max_dt: self.max_dt,
            });
        }
        if self.paddle_height > self.surface_height {
            return Err(ConfigError::PaddleTooTall {
                paddle_height: self.paddle_height,
                surface_height: self.surface_height,
            });
        }
        if self.win_score == 0 {
            return Err(ConfigError::ZeroWinScore);
        }
        Ok(())
    }

    /// Centre of the play field
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.surface_width / 2.0, self.surface_height / 2.0)
    }

    /// Largest allowed paddle top edge
    pub fn max_paddle_y(&self) -> f32 {
        (self.surface_height - self.paddle_height).max(0.0)
    }

    /// Left edge of the paddle for the given side
    pub fn paddle_x(&self, side: Side) -> f32 {
        match side {
            Side::Human => 0.0,
            Side::Opponent => self.surface_width - self.paddle_thickness,
        }
    }

    /// Clamp a paddle top edge to the play field
    pub fn clamp_paddle_y(&self, y: f32) -> f32 {
        y.clamp(0.0, self.max_paddle_y())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_paddle_x() {
        let config = Config::new();
        assert_eq!(config.paddle_x(Side::Human), 0.0, "Left paddle X position");
        assert_eq!(
            config.paddle_x(Side::Opponent),
            790.0,
            "Right paddle X position"
        );
    }

    #[test]
    fn test_config_clamp_paddle_y() {
        let config = Config::new();
        assert_eq!(config.clamp_paddle_y(-40.0), 0.0);
        assert_eq!(config.clamp_paddle_y(10_000.0), 500.0);
        let valid_y = 220.0;
        assert_eq!(config.clamp_paddle_y(valid_y), valid_y);
    }

    #[test]
    fn test_default_is_valid() {
        assert_eq!(Config::new().validate(), Ok(()));
    }

    #[test]
    fn test_validate_rejects_tall_paddle() {
        let config = Config {
            paddle_height: 700.0,
            ..Config::new()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::PaddleTooTall { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_nan_radius() {
        let config = Config {
            ball_radius: f32::NAN,
            ..Config::new()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NotPositive {
                field: "ball_radius",
                ..
            })
        ));
    }

    #[test]
    fn test_validate_rejects_negative_max_y_speed() {
        let config: Config = serde_json::from_str(r#"{ "ball_speed_max_y": -1.0 }"#).unwrap();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Negative {
                field: "ball_speed_max_y",
                ..
            })
        ));
    }

    #[test]
    fn test_validate_rejects_nan_max_y_speed() {
        let config = Config {
            ball_speed_max_y: f32::NAN,
            ..Config::new()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Negative { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_negative_reaction_factor() {
        let config: Config = serde_json::from_str(
            r#"{ "opponent": { "kind": "proportional_chase", "reaction_factor": -0.5 } }"#,
        )
        .unwrap();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Negative {
                field: "reaction_factor",
                ..
            })
        ));
    }

    #[test]
    fn test_validate_rejects_non_finite_tuning() {
        let cases = [
            Config {
                paddle_start_y: f32::NAN,
                ..Config::new()
            },
            Config {
                ball_spin_factor: f32::INFINITY,
                ..Config::new()
            },
            Config {
                opponent: OpponentPolicy::Threshold {
                    speed_threshold: 9.0,
                    fast_indent: f32::NAN,
                    slow_indent: 40.0,
                },
                ..Config::new()
            },
        ];
        for config in cases {
            assert!(
                matches!(config.validate(), Err(ConfigError::NotFinite { .. })),
                "{config:?}"
            );
        }
    }

    #[test]
    fn test_validate_rejects_tiny_fixed_dt() {
        let config = Config {
            fixed_dt: 1e-9,
            ..Config::new()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::TooManyTicks { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_infinite_surface() {
        let config = Config {
            surface_width: f32::INFINITY,
            ..Config::new()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NotPositive {
                field: "surface_width",
                ..
            })
        ));
    }

    #[test]
    fn test_chase_policy_default_is_valid() {
        let config = Config {
            opponent: OpponentPolicy::proportional_chase(),
            ..Config::new()
        };
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config: Config = serde_json::from_str(r#"{ "win_score": 5 }"#).unwrap();
        assert_eq!(config.win_score, 5);
        assert_eq!(config.surface_width, Params::SURFACE_WIDTH);
        assert_eq!(config.opponent, OpponentPolicy::default());
    }

    #[test]
    fn test_json_selects_chase_policy() {
        let config: Config = serde_json::from_str(
            r#"{ "opponent": { "kind": "proportional_chase", "reaction_factor": 0.5 } }"#,
        )
        .unwrap();
        assert_eq!(
            config.opponent,
            OpponentPolicy::ProportionalChase {
                reaction_factor: 0.5
            }
        );
    }
}
