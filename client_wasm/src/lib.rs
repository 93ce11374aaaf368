//! Browser client for canvas Pong
//!
//! Binds the `game_core` frame loop to a `<canvas>` element: 2D context
//! drawing, `requestAnimationFrame` scheduling and mouse input.
//! Note: only compiled for the wasm32 target

#![cfg(target_arch = "wasm32")]

mod canvas;
mod host;
mod input;

use std::cell::RefCell;
use std::rc::Rc;

use canvas::CanvasSurface;
use game_core::{Config, FrameLoop, Game};
use host::{FrameCallback, RafHost};
use wasm_bindgen::prelude::*;
use web_sys::{HtmlCanvasElement, MouseEvent};

type PongLoop = FrameLoop<RafHost, CanvasSurface>;

#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        web_sys::console::warn_1(&"logger already initialised".into());
    }
}

fn parse_config(json: &str) -> Result<Config, JsValue> {
    let config: Config = serde_json::from_str(json)
        .map_err(|e| JsValue::from_str(&format!("Invalid config: {e}")))?;
    config
        .validate()
        .map_err(|e| JsValue::from_str(&format!("Invalid config: {e}")))?;
    Ok(config)
}

/// A running game bound to one canvas.
///
/// Dropping the handle (or calling `stop`) cancels the pending frame and
/// detaches every listener.
#[wasm_bindgen]
pub struct PongHandle {
    canvas: HtmlCanvasElement,
    frame_loop: Rc<RefCell<PongLoop>>,
    callback: FrameCallback,
    listeners: Vec<(&'static str, Closure<dyn FnMut(MouseEvent)>)>,
}

#[wasm_bindgen]
impl PongHandle {
    pub fn stop(&mut self) {
        self.teardown();
    }

    #[wasm_bindgen(getter)]
    pub fn is_running(&self) -> bool {
        self.frame_loop
            .try_borrow()
            .map(|fl| fl.is_running())
            .unwrap_or(false)
    }

    #[wasm_bindgen(getter)]
    pub fn human_score(&self) -> u8 {
        self.frame_loop
            .try_borrow()
            .map(|fl| fl.game().state.score.human)
            .unwrap_or(0)
    }

    #[wasm_bindgen(getter)]
    pub fn opponent_score(&self) -> u8 {
        self.frame_loop
            .try_borrow()
            .map(|fl| fl.game().state.score.opponent)
            .unwrap_or(0)
    }

    #[wasm_bindgen(getter)]
    pub fn is_round_over(&self) -> bool {
        self.frame_loop
            .try_borrow()
            .map(|fl| fl.game().state.is_round_over())
            .unwrap_or(false)
    }
}

impl PongHandle {
    fn listen<F>(&mut self, event: &'static str, handler: F) -> Result<(), JsValue>
    where
        F: FnMut(MouseEvent) + 'static,
    {
        let closure = Closure::<dyn FnMut(MouseEvent)>::new(handler);
        self.canvas
            .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
        self.listeners.push((event, closure));
        Ok(())
    }

    fn teardown(&mut self) {
        if let Ok(mut fl) = self.frame_loop.try_borrow_mut() {
            fl.stop();
        }
        for (event, closure) in self.listeners.drain(..) {
            if let Err(e) = self
                .canvas
                .remove_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
            {
                log::debug!("removeEventListener({event}) failed: {e:?}");
            }
        }
        // Breaks the loop <-> callback reference cycle
        self.callback.borrow_mut().take();
    }
}

impl Drop for PongHandle {
    fn drop(&mut self) {
        self.teardown();
    }
}

/// Start a game on `canvas`. `config_json` may override any subset of the
/// game configuration.
#[wasm_bindgen]
pub fn start_game(
    canvas: HtmlCanvasElement,
    config_json: Option<String>,
) -> Result<PongHandle, JsValue> {
    let config = match config_json {
        Some(json) => parse_config(&json)?,
        None => Config::default(),
    };
    canvas.set_width(config.surface_width as u32);
    canvas.set_height(config.surface_height as u32);

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("No window"))?;
    let surface =
        CanvasSurface::new(canvas.clone()).map_err(|e| JsValue::from_str(&e.to_string()))?;

    let callback: FrameCallback = Rc::new(RefCell::new(None));
    let host = RafHost::new(window, callback.clone());
    let frame_loop = Rc::new(RefCell::new(FrameLoop::new(
        Game::new(config),
        host,
        surface,
    )));

    {
        let frame_loop = frame_loop.clone();
        *callback.borrow_mut() = Some(Closure::<dyn FnMut(f64)>::new(move |timestamp: f64| {
            if let Ok(mut fl) = frame_loop.try_borrow_mut() {
                fl.on_frame(timestamp);
            }
        }));
    }

    // From here on an early return drops the handle, which tears down
    // whatever was already registered
    let mut handle = PongHandle {
        canvas: canvas.clone(),
        frame_loop,
        callback,
        listeners: Vec::new(),
    };

    {
        let frame_loop = handle.frame_loop.clone();
        let canvas = canvas.clone();
        handle.listen("mousemove", move |event: MouseEvent| {
            let input = input::handle_mouse_move(&canvas, &event);
            if let Ok(mut fl) = frame_loop.try_borrow_mut() {
                fl.push_input(input);
            }
        })?;
    }
    {
        let frame_loop = handle.frame_loop.clone();
        handle.listen("click", move |event: MouseEvent| {
            let input = input::handle_click(&event);
            if let Ok(mut fl) = frame_loop.try_borrow_mut() {
                fl.push_input(input);
            }
        })?;
    }

    let started = handle.frame_loop.borrow_mut().start();
    started.map_err(|e| JsValue::from_str(&e.to_string()))?;

    log::info!(
        "Pong started on a {}x{} canvas",
        canvas.width(),
        canvas.height()
    );
    Ok(handle)
}
