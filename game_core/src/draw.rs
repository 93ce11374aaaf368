//! Drawing primitives
//!
//! The game draws through the [`Surface`] trait so the render pass stays a
//! pure function of the simulation state; the browser client implements it
//! on top of a 2D canvas context.

use glam::Vec2;

use crate::{Aabb, Config, SurfaceError};

/// Opaque RGB colour
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const GREEN: Color = Color::rgb(0, 128, 0);
    pub const RED: Color = Color::rgb(255, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// CSS hex form, e.g. `#ff0000`
    pub fn to_css(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// A rectangular 2D render target
pub trait Surface {
    /// False once the target has been torn down
    fn is_available(&self) -> bool {
        true
    }

    fn fill_rect(&mut self, rect: Aabb, color: Color) -> Result<(), SurfaceError>;

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color)
        -> Result<(), SurfaceError>;

    /// Draw `text` with its baseline starting at `at`
    fn fill_text(&mut self, text: &str, at: Vec2, color: Color) -> Result<(), SurfaceError>;
}

// Net dashes
const NET_WIDTH: f32 = 2.0;
const NET_DASH: f32 = 20.0;
const NET_SPACING: f32 = 40.0;

pub fn draw_rect<S: Surface + ?Sized>(
    surface: &mut S,
    x: f32,
    y: f32,
    w: f32,
    h: f32,
    color: Color,
) -> Result<(), SurfaceError> {
    surface.fill_rect(Aabb::from_min_size(Vec2::new(x, y), Vec2::new(w, h)), color)
}

pub fn draw_circle<S: Surface + ?Sized>(
    surface: &mut S,
    center: Vec2,
    radius: f32,
    color: Color,
) -> Result<(), SurfaceError> {
    surface.fill_circle(center, radius, color)
}

/// Dashed vertical line down the middle of the field
pub fn draw_net<S: Surface + ?Sized>(surface: &mut S, config: &Config) -> Result<(), SurfaceError> {
    let x = config.surface_width / 2.0 - NET_WIDTH / 2.0;
    let mut y = 0.0;
    while y < config.surface_height {
        draw_rect(surface, x, y, NET_WIDTH, NET_DASH, Color::WHITE)?;
        y += NET_SPACING;
    }
    Ok(())
}
