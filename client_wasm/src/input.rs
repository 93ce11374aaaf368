//! Mouse input handling

use game_core::{systems::pointer_to_surface, InputEvent};
use glam::Vec2;
use web_sys::{HtmlCanvasElement, MouseEvent};

/// Page scroll offset of the root element
fn page_scroll() -> Vec2 {
    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
        .map(|root| Vec2::new(root.scroll_left() as f32, root.scroll_top() as f32))
        .unwrap_or(Vec2::ZERO)
}

/// Pointer position in canvas pixels
pub fn pointer_position(canvas: &HtmlCanvasElement, event: &MouseEvent) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    pointer_to_surface(
        Vec2::new(event.client_x() as f32, event.client_y() as f32),
        Vec2::new(rect.left() as f32, rect.top() as f32),
        page_scroll(),
    )
}

/// Handle mouse move event
pub fn handle_mouse_move(canvas: &HtmlCanvasElement, event: &MouseEvent) -> InputEvent {
    InputEvent::PointerMoved {
        y: pointer_position(canvas, event).y,
    }
}

/// Handle click event
pub fn handle_click(_event: &MouseEvent) -> InputEvent {
    InputEvent::Click
}
