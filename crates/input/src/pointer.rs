//! Mouse events to grid-cell actions.
//!
//! A press toggles the cell under the pointer; dragging with the button held
//! paints cells alive. Coordinates are translated through the renderer's
//! [`BoardLayout`]; positions off the drawn cells (border, status and message
//! rows, clipped grid area) produce no action.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::types::BoardLayout;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerAction {
    Toggle { x: i32, y: i32 },
    Paint { x: i32, y: i32 },
}

/// Map a mouse event to a pointer action on the grid.
pub fn handle_mouse_event(event: MouseEvent, layout: &BoardLayout) -> Option<PointerAction> {
    let (x, y) = layout.visible_cell_at(event.column, event.row)?;
    match event.kind {
        MouseEventKind::Down(MouseButton::Left) => Some(PointerAction::Toggle { x, y }),
        MouseEventKind::Drag(MouseButton::Left) => Some(PointerAction::Paint { x, y }),
        _ => None,
    }
}
