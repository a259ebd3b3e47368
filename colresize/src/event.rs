//! Pointer input events at the host seam.
//!
//! The engine consumes its own event type; crossterm mouse events
//! convert into it at the edge, the same way the surrounding widget
//! stack converts crossterm input into its high-level events.

/// Pointer button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerButton {
    Left,
    Right,
    Middle,
}

/// A pointer event in table-local pixel coordinates.
///
/// `Move` events are document-scoped: during a drag they are delivered
/// wherever the pointer is, not only over the originating handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEvent {
    Down { x: i32, y: i32, button: PointerButton },
    Move { x: i32, y: i32 },
    Up { x: i32, y: i32 },
}

impl PointerEvent {
    /// Convert a crossterm mouse event, when it maps to a pointer
    /// gesture this engine cares about.
    pub fn from_mouse(event: crossterm::event::MouseEvent) -> Option<Self> {
        use crossterm::event::MouseEventKind;
        let x = i32::from(event.column);
        let y = i32::from(event.row);
        match event.kind {
            MouseEventKind::Down(button) => Some(PointerEvent::Down {
                x,
                y,
                button: button.into(),
            }),
            MouseEventKind::Drag(_) | MouseEventKind::Moved => Some(PointerEvent::Move { x, y }),
            MouseEventKind::Up(_) => Some(PointerEvent::Up { x, y }),
            _ => None,
        }
    }
}

impl From<crossterm::event::MouseButton> for PointerButton {
    fn from(btn: crossterm::event::MouseButton) -> Self {
        use crossterm::event::MouseButton as CtBtn;
        match btn {
            CtBtn::Left => PointerButton::Left,
            CtBtn::Right => PointerButton::Right,
            CtBtn::Middle => PointerButton::Middle,
        }
    }
}
