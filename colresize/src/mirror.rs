//! Scroll mirror: a decoupled scrollbar overlay kept in lockstep with
//! the table body.
//!
//! When a vertical viewport is configured the body scrolls inside it,
//! but the visible scrollbar belongs to a synthetic overlay. The overlay
//! offset is mirrored onto the body on every scroll event, and after a
//! redraw the overlay's content height is reset to the body's natural
//! height so the scrollbar reflects the current row count.

use crate::host::HostTable;

/// Width reserved for the overlay scrollbar, part of the table-width
/// invariant while the mirror is active.
pub const SCROLL_GUTTER: i32 = 15;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollMirror {
    viewport_height: i32,
    content_height: i32,
    offset: i32,
}

impl ScrollMirror {
    pub fn new(viewport_height: i32, content_height: i32) -> Self {
        Self {
            viewport_height,
            content_height,
            offset: 0,
        }
    }

    pub fn viewport_height(&self) -> i32 {
        self.viewport_height
    }

    pub fn content_height(&self) -> i32 {
        self.content_height
    }

    pub fn offset(&self) -> i32 {
        self.offset
    }

    pub fn max_offset(&self) -> i32 {
        (self.content_height - self.viewport_height).max(0)
    }

    /// Mirror an overlay scroll onto the body. Returns the clamped
    /// offset that was applied.
    pub fn on_overlay_scroll<H: HostTable>(&mut self, offset: i32, host: &mut H) -> i32 {
        let clamped = offset.clamp(0, self.max_offset());
        if clamped != self.offset {
            self.offset = clamped;
            host.set_body_scroll(clamped);
            log::trace!("[mirror] body scroll mirrored to {clamped}");
        }
        clamped
    }

    /// Re-measure the body after a redraw and re-clamp the offset so the
    /// scrollbar matches the new row count.
    pub fn refresh<H: HostTable>(&mut self, host: &mut H) {
        self.content_height = host.body_height();
        let clamped = self.offset.min(self.max_offset());
        if clamped != self.offset {
            self.offset = clamped;
            host.set_body_scroll(clamped);
        }
    }
}
