//! The per-column handle set.
//!
//! One handle per visible column, kept as an ordered list so neighbor
//! lookups are index arithmetic rather than DOM-style traversal. The set
//! is rebuilt wholesale on every lifecycle rebuild; it is never patched
//! in place across one.

use crate::geometry::{Layout, Outcome, ResizePolicy};

/// Half-width of the invisible grip strip centered on a handle, in px.
pub const GRIP_TOLERANCE: i32 = 4;

/// A draggable boundary bound to one column.
///
/// The last column's handle doubles as the table's right edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Handle {
    /// Index of the bound column.
    pub column: usize,
    /// Screen-space left position.
    pub left: i32,
    /// Top of the grip strip.
    pub top: i32,
    /// Vertical extent; spans header+body, or header-only when an
    /// empty-state row must stay uncovered.
    pub height: i32,
}

/// Ordered columns and their handles.
#[derive(Debug, Clone, Default)]
pub struct HandleSet {
    layout: Layout,
    handles: Vec<Handle>,
    resized: Vec<bool>,
    top: i32,
    height: i32,
}

impl HandleSet {
    /// Build handles for the given header widths.
    ///
    /// When `restored` is present and matches the header count it
    /// replaces the measured widths (clamped to the floor). A length
    /// mismatch is a recoverable inconsistency: it is logged and the
    /// measured widths win.
    pub fn build(
        header_widths: &[i32],
        restored: Option<&[i32]>,
        top: i32,
        height: i32,
        min_width: i32,
    ) -> Self {
        let widths = match restored {
            Some(saved) if saved.len() == header_widths.len() => saved,
            Some(saved) => {
                log::warn!(
                    "[handles] restored width count {} does not match header count {}, using measured widths",
                    saved.len(),
                    header_widths.len()
                );
                header_widths
            }
            None => header_widths,
        };

        let layout = Layout::compute(widths, min_width);
        let resized = vec![false; layout.len()];
        let mut set = Self {
            layout,
            handles: Vec::new(),
            resized,
            top,
            height,
        };
        set.refresh_handles();
        set
    }

    pub fn len(&self) -> usize {
        self.layout.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layout.is_empty()
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn widths(&self) -> &[i32] {
        self.layout.widths()
    }

    pub fn handles(&self) -> &[Handle] {
        &self.handles
    }

    pub fn handle(&self, column: usize) -> &Handle {
        &self.handles[column]
    }

    pub fn index_of(&self, handle: &Handle) -> usize {
        handle.column
    }

    /// The previous column's handle index, when there is one.
    pub fn neighbor_of(&self, column: usize) -> Option<usize> {
        column.checked_sub(1)
    }

    /// Whether the column has been explicitly resized by a gesture.
    pub fn was_resized(&self, column: usize) -> bool {
        self.resized.get(column).copied().unwrap_or(false)
    }

    /// Find the handle whose grip strip contains the point.
    pub fn hit_test(&self, x: i32, y: i32) -> Option<usize> {
        if y < self.top || y >= self.top + self.height {
            return None;
        }
        self.handles
            .iter()
            .find(|h| (x - h.left).abs() <= GRIP_TOLERANCE)
            .map(|h| h.column)
    }

    /// Update the vertical extent of every handle after a host redraw.
    pub fn set_extent(&mut self, top: i32, height: i32) {
        self.top = top;
        self.height = height;
        for handle in &mut self.handles {
            handle.top = top;
            handle.height = height;
        }
    }

    /// Apply a delta through the geometry engine and, on acceptance,
    /// refresh handle positions and mark the column as resized.
    pub fn apply_delta(&mut self, column: usize, delta: i32, policy: ResizePolicy) -> Outcome {
        let outcome = self.layout.apply_delta(column, delta, policy);
        if outcome.is_applied() {
            self.resized[column] = true;
            self.refresh_handles();
        }
        outcome
    }

    fn refresh_handles(&mut self) {
        self.handles.clear();
        for column in 0..self.layout.len() {
            self.handles.push(Handle {
                column,
                left: self.layout.left(column),
                top: self.top,
                height: self.height,
            });
        }
    }
}
