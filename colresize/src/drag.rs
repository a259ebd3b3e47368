//! The pointer-drag state machine.
//!
//! One gesture is `Idle -> Dragging -> Idle`. The controller owns only
//! the session state; widths are mutated exclusively through the handle
//! set's geometry contract, so a rejected move leaves everything as it
//! was.

use crate::event::PointerButton;
use crate::geometry::{Outcome, ResizePolicy};
use crate::handles::HandleSet;
use crate::host::HostTable;

/// Per-instance gesture state. Explicit, never process-wide: several
/// tables on one page each run their own machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging {
        /// Column whose handle anchors the session.
        anchor: usize,
        /// Pointer X at pointer-down.
        start_x: i32,
        /// Sum of deltas accepted so far this gesture.
        accepted: i32,
    },
}

/// An accepted move within a gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Accepted {
    pub column: usize,
    pub width: i32,
    pub delta: i32,
}

/// Emitted once per completed gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResizeNotice {
    pub column: usize,
    pub width: i32,
}

#[derive(Debug, Default)]
pub struct DragController {
    state: DragState,
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    /// Pointer-down: start a session when the point hits a handle.
    ///
    /// A second pointer-down while a session is active is ignored; the
    /// source left this undefined and ignoring is the explicit choice
    /// here.
    pub fn on_down(&mut self, x: i32, y: i32, button: PointerButton, handles: &HandleSet) -> bool {
        if button != PointerButton::Left {
            return false;
        }
        if self.is_dragging() {
            log::debug!("[drag] pointer-down ignored, session already active");
            return false;
        }
        let Some(anchor) = handles.hit_test(x, y) else {
            return false;
        };
        log::debug!("[drag] session started on column {anchor} at x={x}");
        self.state = DragState::Dragging {
            anchor,
            start_x: x,
            accepted: 0,
        };
        true
    }

    /// Pointer-move while dragging, scoped to the whole document.
    ///
    /// The delta is measured against the live handle position, not the
    /// session start, so consecutive moves stay consistent. On
    /// acceptance the new width is written to the header cell and, when
    /// the scroll mirror is active, to every rendered body cell of the
    /// column.
    pub fn on_move<H: HostTable>(
        &mut self,
        x: i32,
        handles: &mut HandleSet,
        host: &mut H,
        policy: ResizePolicy,
        propagate_body: bool,
    ) -> Option<Accepted> {
        let DragState::Dragging {
            anchor,
            start_x,
            accepted,
        } = self.state
        else {
            return None;
        };

        let delta = x - handles.handle(anchor).left;
        let Outcome::Applied { width, delta } = handles.apply_delta(anchor, delta, policy) else {
            return None;
        };

        self.state = DragState::Dragging {
            anchor,
            start_x,
            accepted: accepted + delta,
        };

        host.set_header_width(anchor, width);
        if policy == ResizePolicy::Squeeze {
            if let Some(next) = anchor.checked_add(1).filter(|n| *n < handles.len()) {
                host.set_header_width(next, handles.layout().width(next));
                if propagate_body {
                    host.set_body_column_width(next, handles.layout().width(next));
                }
            }
        }
        if propagate_body {
            host.set_body_column_width(anchor, width);
        }

        Some(Accepted {
            column: anchor,
            width,
            delta,
        })
    }

    /// Pointer-up anywhere cancels the session and yields the notice
    /// for the completed gesture.
    pub fn on_up(&mut self, handles: &HandleSet) -> Option<ResizeNotice> {
        let DragState::Dragging { anchor, .. } = self.state else {
            return None;
        };
        self.state = DragState::Idle;
        if anchor >= handles.len() {
            // Handle set was replaced under the session; nothing to report.
            return None;
        }
        let width = handles.layout().width(anchor);
        log::debug!("[drag] session ended, column {anchor} now {width}px");
        Some(ResizeNotice {
            column: anchor,
            width,
        })
    }

    /// Drop any active session without emitting a notice.
    pub fn cancel(&mut self) {
        self.state = DragState::Idle;
    }
}
