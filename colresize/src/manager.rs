//! Lifecycle & sync: attach, rebuild, redraw resync, teardown.
//!
//! The manager owns the handle set and the touched-column cache
//! exclusively. Structural host changes rebuild everything from live
//! measurements; ordinary redraws get a lightweight resync that is
//! deferred until the next [`ColResize::poll`], after the host's own
//! mutations have settled.

use std::collections::BTreeSet;

use crate::dispose::Disposables;
use crate::drag::{DragController, ResizeNotice};
use crate::event::PointerEvent;
use crate::geometry::ResizePolicy;
use crate::handles::HandleSet;
use crate::host::{AttachError, HostTable, Interest, TableNotice, WidthStore};
use crate::mirror::{ScrollMirror, SCROLL_GUTTER};
use crate::options::Options;

/// The column-resize engine bound to one host table.
///
/// Constructed with [`ColResize::attach`]; the host forwards pointer
/// events to [`ColResize::on_pointer`], notices to
/// [`ColResize::on_notice`], and pumps [`ColResize::poll`] from its
/// event loop.
#[derive(Debug)]
pub struct ColResize<H: HostTable, S: WidthStore> {
    host: H,
    store: S,
    options: Options,
    handles: HandleSet,
    drag: DragController,
    mirror: Option<ScrollMirror>,
    /// Columns whose body cells carry an explicit width that redraws
    /// wipe out and resync must restore.
    touched: BTreeSet<usize>,
    disposables: Disposables,
    pending_resync: bool,
    last_table_height: i32,
    notices: Vec<ResizeNotice>,
    detached: bool,
}

impl<H: HostTable, S: WidthStore> ColResize<H, S> {
    /// Attach to a host table.
    ///
    /// Capabilities are verified before anything is built, so a failed
    /// attach leaves no partial state behind. A table with no header
    /// cells attaches successfully as an empty, inert layer.
    pub fn attach(host: H, store: S, options: Options) -> Result<Self, AttachError> {
        let caps = host.capabilities();
        if !caps.redraw_notices {
            return Err(AttachError::NoRedrawNotices);
        }
        if !caps.state_hooks {
            return Err(AttachError::NoStateHooks);
        }

        let mut engine = Self {
            host,
            store,
            options,
            handles: HandleSet::default(),
            drag: DragController::new(),
            mirror: None,
            touched: BTreeSet::new(),
            disposables: Disposables::new(),
            pending_resync: false,
            last_table_height: 0,
            notices: Vec::new(),
            detached: false,
        };
        engine.init();
        Ok(engine)
    }

    /// Build handles and subscriptions from the host's current state.
    fn init(&mut self) {
        let restored = self.store.load();
        let headers = self.host.header_widths();
        if headers.is_empty() {
            log::debug!("[lifecycle] no header cells, attaching as empty layer");
        }

        let (top, height) = self.handle_extent();
        self.handles = HandleSet::build(
            &headers,
            restored.as_deref(),
            top,
            height,
            self.options.min_column_width,
        );

        self.mirror = self
            .options
            .scroll_y
            .height()
            .map(|viewport| ScrollMirror::new(viewport, self.host.body_height()));

        // Restored widths take precedence over what the host measured,
        // so push them back onto the header cells right away.
        for (column, width) in self.handles.widths().to_vec().into_iter().enumerate() {
            self.host.set_header_width(column, width);
        }
        self.write_table_width();

        self.disposables.push(self.host.register(Interest::Pointer));
        self.disposables.push(self.host.register(Interest::Notices));
        self.disposables.push(self.host.register(Interest::Snapshot));
        if self.mirror.is_some() {
            self.disposables.push(self.host.register(Interest::Scroll));
        }

        self.last_table_height = self.host.table_height();
        self.pending_resync = false;
        self.detached = false;
    }

    /// Vertical extent for handles: header+body normally, header-only
    /// when an empty-state row must stay uncovered.
    fn handle_extent(&self) -> (i32, i32) {
        let top = self.host.table_top();
        let height = if self.host.has_empty_row() {
            self.host.header_height()
        } else {
            self.host.table_height()
        };
        (top, height)
    }

    fn gutter(&self) -> i32 {
        if self.mirror.is_some() {
            SCROLL_GUTTER
        } else {
            0
        }
    }

    fn write_table_width(&mut self) {
        let width = self.handles.layout().total_width() + self.gutter();
        self.host.set_table_width(width);
    }

    /// Route a pointer event through the drag machine.
    pub fn on_pointer(&mut self, event: PointerEvent) {
        if self.detached {
            return;
        }
        match event {
            PointerEvent::Down { x, y, button } => {
                self.drag.on_down(x, y, button, &self.handles);
            }
            PointerEvent::Move { x, .. } => {
                let propagate = self.mirror.is_some();
                let accepted = self.drag.on_move(
                    x,
                    &mut self.handles,
                    &mut self.host,
                    self.options.policy(),
                    propagate,
                );
                if let Some(accepted) = accepted {
                    if propagate {
                        self.touched.insert(accepted.column);
                        if self.options.policy() == ResizePolicy::Squeeze
                            && accepted.column + 1 < self.handles.len()
                        {
                            self.touched.insert(accepted.column + 1);
                        }
                    }
                    self.write_table_width();
                }
            }
            PointerEvent::Up { .. } => {
                if let Some(notice) = self.drag.on_up(&self.handles) {
                    self.store.save(self.handles.widths());
                    self.notices.push(notice);
                }
            }
        }
    }

    /// React to a host notification.
    ///
    /// `Redrawn` only queues work: the resync runs on the next `poll`,
    /// once the redraw's own mutations have settled. Structural changes
    /// rebuild immediately.
    pub fn on_notice(&mut self, notice: TableNotice) {
        if self.detached {
            return;
        }
        match notice {
            TableNotice::Redrawn => {
                self.pending_resync = true;
            }
            TableNotice::ColumnOrderChanged | TableNotice::ColumnVisibilityChanged => {
                self.rebuild();
            }
            TableNotice::Destroyed => {
                self.detach();
            }
        }
    }

    /// Run any deferred resync work.
    pub fn poll(&mut self) {
        if self.detached || !self.pending_resync {
            return;
        }
        self.pending_resync = false;

        let table_height = self.host.table_height();
        if table_height != self.last_table_height {
            let (top, height) = self.handle_extent();
            self.handles.set_extent(top, height);
            self.last_table_height = table_height;
            log::debug!("[lifecycle] handle extent refreshed to {height}px");
        }

        // Redraws replace row DOM and lose inline widths; restore the
        // columns a gesture has touched.
        for column in &self.touched {
            if *column < self.handles.len() {
                self.host
                    .set_body_column_width(*column, self.handles.layout().width(*column));
            }
        }

        if let Some(mirror) = self.mirror.as_mut() {
            mirror.refresh(&mut self.host);
        }
    }

    /// Full teardown + rebuild against the host's current header set.
    pub fn redraw(&mut self) {
        self.rebuild();
    }

    fn rebuild(&mut self) {
        log::debug!("[lifecycle] rebuilding handle set");
        self.drag.cancel();
        self.disposables.release(&mut self.host);
        self.touched.clear();
        self.init();
    }

    /// Show or hide a column, keeping the tracked table width correct
    /// without waiting for the rebuild the host's visibility notice
    /// will trigger.
    pub fn set_column_visible(&mut self, column: usize, visible: bool) {
        let width = self.host.column_width(column);
        let delta = if visible { width } else { -width };
        let table_width = self.handles.layout().total_width() + delta + self.gutter();
        self.host.set_table_width(table_width);
        self.host.set_column_visible(column, visible);
    }

    /// Mirror an overlay scroll offset onto the table body.
    pub fn on_overlay_scroll(&mut self, offset: i32) {
        if let Some(mirror) = self.mirror.as_mut() {
            mirror.on_overlay_scroll(offset, &mut self.host);
        }
    }

    /// Persist the current widths; called when the host requests a
    /// state snapshot.
    pub fn write_snapshot(&mut self) {
        if !self.detached {
            self.store.save(self.handles.widths());
        }
    }

    /// Remove everything this extension created and release every
    /// registration. The host table's own structure is untouched.
    pub fn detach(&mut self) {
        if self.detached {
            return;
        }
        self.drag.cancel();
        self.disposables.release(&mut self.host);
        self.touched.clear();
        self.mirror = None;
        self.handles = HandleSet::default();
        self.pending_resync = false;
        self.detached = true;
        log::debug!("[lifecycle] detached");
    }

    /// Drain the resize notices emitted since the last call.
    pub fn take_notices(&mut self) -> Vec<ResizeNotice> {
        std::mem::take(&mut self.notices)
    }

    pub fn is_detached(&self) -> bool {
        self.detached
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    pub fn handles(&self) -> &HandleSet {
        &self.handles
    }

    pub fn widths(&self) -> &[i32] {
        self.handles.widths()
    }

    /// Table width including the scroll gutter when the mirror is
    /// active.
    pub fn table_width(&self) -> i32 {
        self.handles.layout().total_width() + self.gutter()
    }

    pub fn mirror(&self) -> Option<&ScrollMirror> {
        self.mirror.as_ref()
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
