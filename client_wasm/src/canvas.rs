//! 2D canvas render target

use game_core::{Aabb, Color, Surface, SurfaceError};
use glam::Vec2;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

const FONT: &str = "16px sans-serif";

fn draw_err(e: JsValue) -> SurfaceError {
    SurfaceError::Draw(format!("{e:?}"))
}

/// Canvas element plus its 2D context
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, SurfaceError> {
        let ctx = canvas
            .get_context("2d")
            .map_err(draw_err)?
            .ok_or(SurfaceError::Detached)?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| SurfaceError::Draw("context is not 2d".to_string()))?;
        ctx.set_font(FONT);
        Ok(Self { canvas, ctx })
    }
}

impl Surface for CanvasSurface {
    fn is_available(&self) -> bool {
        self.canvas.is_connected()
    }

    fn fill_rect(&mut self, rect: Aabb, color: Color) -> Result<(), SurfaceError> {
        let size = rect.size();
        self.ctx.set_fill_style_str(&color.to_css());
        self.ctx.fill_rect(
            rect.min.x as f64,
            rect.min.y as f64,
            size.x as f64,
            size.y as f64,
        );
        Ok(())
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) -> Result<(), SurfaceError> {
        self.ctx.set_fill_style_str(&color.to_css());
        self.ctx.begin_path();
        self.ctx
            .arc(
                center.x as f64,
                center.y as f64,
                radius as f64,
                0.0,
                std::f64::consts::TAU,
            )
            .map_err(draw_err)?;
        self.ctx.fill();
        Ok(())
    }

    fn fill_text(&mut self, text: &str, at: Vec2, color: Color) -> Result<(), SurfaceError> {
        self.ctx.set_fill_style_str(&color.to_css());
        self.ctx
            .fill_text(text, at.x as f64, at.y as f64)
            .map_err(draw_err)
    }
}
