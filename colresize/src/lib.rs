//! Interactive column resizing for a tabular-data widget.
//!
//! Attach a [`ColResize`] to a host table and it maintains one
//! draggable handle per visible column, tracks pointer gestures into
//! width changes, keeps handle geometry synchronized across host
//! redraws, and persists learned widths through a [`WidthStore`].

pub mod dispose;
pub mod drag;
pub mod event;
pub mod geometry;
pub mod handles;
pub mod host;
pub mod manager;
pub mod mirror;
pub mod options;

pub use dispose::Disposables;
pub use drag::{Accepted, DragController, DragState, ResizeNotice};
pub use event::{PointerButton, PointerEvent};
pub use geometry::{px_ceil, Layout, Outcome, ResizePolicy};
pub use handles::{Handle, HandleSet, GRIP_TOLERANCE};
pub use host::{
    AttachError, Capabilities, HostTable, Interest, ListenerToken, TableNotice, WidthStore,
};
pub use manager::ColResize;
pub use mirror::{ScrollMirror, SCROLL_GUTTER};
pub use options::{Options, ParseScrollYError, ScrollY, DEFAULT_MIN_COLUMN_WIDTH};
