//! Traits at the host-table seam.
//!
//! The engine never owns rendering; everything it knows about the table
//! comes through [`HostTable`], and learned widths round-trip through a
//! [`WidthStore`]. Both are implemented by the surrounding widget stack
//! (or by in-memory fakes in tests).

use thiserror::Error;

/// What the host is able to provide, checked once at attach time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Capabilities {
    /// The host publishes [`TableNotice::Redrawn`] after every redraw.
    pub redraw_notices: bool,
    /// The host drives the width store (restore at startup, snapshot
    /// requests while running).
    pub state_hooks: bool,
}

/// Notifications pushed by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableNotice {
    /// The table finished an asynchronous redraw (pagination, sorting,
    /// row changes); row DOM was replaced.
    Redrawn,
    /// Columns were reordered.
    ColumnOrderChanged,
    /// A column was shown or hidden.
    ColumnVisibilityChanged,
    /// The table is being destroyed.
    Destroyed,
}

/// Event streams the engine registers for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interest {
    Pointer,
    Notices,
    Scroll,
    Snapshot,
}

/// Opaque registration token issued by the host.
///
/// Every registration lands in a disposal list so teardown can release
/// them atomically, however many rebuild cycles have happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerToken(pub u64);

/// The rendered table this extension decorates.
///
/// All dimensions are integer pixels; fractional measurements must be
/// rounded up by the implementor before crossing this boundary.
pub trait HostTable {
    fn capabilities(&self) -> Capabilities;

    /// Widths of the first header row's cells, visible columns only.
    fn header_widths(&self) -> Vec<i32>;

    /// Top of the table in screen space.
    fn table_top(&self) -> i32 {
        0
    }

    /// Full rendered height of the table, header included.
    fn table_height(&self) -> i32;

    /// Height of the header row.
    fn header_height(&self) -> i32;

    /// Natural (unconstrained) height of the body content.
    fn body_height(&self) -> i32;

    /// Number of currently rendered body rows.
    fn row_count(&self) -> usize;

    /// Whether the body currently shows an empty-state row.
    fn has_empty_row(&self) -> bool;

    /// Write a width to one header cell.
    fn set_header_width(&mut self, column: usize, width: i32);

    /// Write a width to every rendered body cell of one column.
    fn set_body_column_width(&mut self, column: usize, width: i32);

    /// Write the aggregate table/container width.
    fn set_table_width(&mut self, width: i32);

    /// Write the body's vertical scroll offset.
    fn set_body_scroll(&mut self, offset: i32);

    /// The host's own column show/hide operation.
    fn set_column_visible(&mut self, column: usize, visible: bool);

    /// Current width of one column, visible or hidden.
    fn column_width(&self, column: usize) -> i32;

    /// Register for an event stream; the token must stay valid until
    /// passed back to [`HostTable::unregister`].
    fn register(&mut self, interest: Interest) -> ListenerToken;

    fn unregister(&mut self, token: ListenerToken);
}

/// Persistence hook for learned column widths.
pub trait WidthStore {
    /// Widths saved by a previous session, if any.
    fn load(&self) -> Option<Vec<i32>>;

    /// Persist the current widths.
    fn save(&mut self, widths: &[i32]);
}

/// Fatal attach-time failures. The engine never partially initializes;
/// on error nothing was registered and nothing needs tearing down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AttachError {
    #[error("host does not publish redraw notices")]
    NoRedrawNotices,
    #[error("host does not expose state persistence hooks")]
    NoStateHooks,
}
