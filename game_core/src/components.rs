use glam::Vec2;

use crate::{Aabb, Config};

/// Which end of the table an entity belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Human,    // left, follows the pointer
    Opponent, // right, driven by the controller
}

impl Side {
    pub fn opposite(self) -> Self {
        match self {
            Side::Human => Side::Opponent,
            Side::Opponent => Side::Human,
        }
    }
}

/// Paddle - a vertically movable rectangle at one edge of the field
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paddle {
    pub side: Side,
    pub y: f32, // Top edge, clamped to [0, surface_height - paddle_height]
}

impl Paddle {
    pub fn new(side: Side, y: f32) -> Self {
        Self { side, y }
    }

    pub fn center_y(&self, height: f32) -> f32 {
        self.y + height / 2.0
    }

    /// Strict open-interval test: a ball level with either edge misses
    pub fn spans(&self, y: f32, height: f32) -> bool {
        y > self.y && y < self.y + height
    }

    pub fn bounds(&self, config: &Config) -> Aabb {
        Aabb::from_min_size(
            Vec2::new(config.paddle_x(self.side), self.y),
            Vec2::new(config.paddle_thickness, config.paddle_height),
        )
    }
}

/// Ball - the pong ball
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2, // pixels per tick
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self { pos, vel }
    }

    /// Reset ball to the centre with the base serve velocity.
    ///
    /// The horizontal heading is kept, so the ball travels toward the side
    /// that just conceded.
    pub fn reset(&mut self, config: &Config) {
        let dir = if self.vel.x < 0.0 { -1.0 } else { 1.0 };
        self.pos = config.center();
        self.vel = Vec2::new(config.ball_speed_initial * dir, 0.0);
    }

    pub fn top(&self, radius: f32) -> f32 {
        self.pos.y - radius
    }

    pub fn bottom(&self, radius: f32) -> f32 {
        self.pos.y + radius
    }

    pub fn left(&self, radius: f32) -> f32 {
        self.pos.x - radius
    }

    pub fn right(&self, radius: f32) -> f32 {
        self.pos.x + radius
    }
}
