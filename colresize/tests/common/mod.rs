//! In-memory host table and width store used across the test suites.
#![allow(dead_code)]

use colresize::{Capabilities, HostTable, Interest, ListenerToken, WidthStore};

pub const ROW_HEIGHT: i32 = 20;

/// A host table that records every write the engine performs.
pub struct FakeHost {
    /// Current header cell widths (inline width included).
    pub headers: Vec<i32>,
    /// The widths the host would measure on a fresh render.
    pub measured: Vec<i32>,
    /// Rendered body rows, one cell width per column.
    pub body: Vec<Vec<i32>>,
    pub table_width: i32,
    pub table_height: i32,
    pub header_height: i32,
    pub empty_row: bool,
    pub body_scroll: i32,
    pub caps: Capabilities,
    /// (column, visible) calls delegated to the host's own toggle.
    pub visibility_calls: Vec<(usize, bool)>,
    /// Registrations currently held against this host.
    pub active_listeners: Vec<(ListenerToken, Interest)>,
    next_token: u64,
}

impl FakeHost {
    pub fn with_columns(widths: &[i32]) -> Self {
        let mut host = Self {
            headers: widths.to_vec(),
            measured: widths.to_vec(),
            body: Vec::new(),
            table_width: widths.iter().sum(),
            table_height: 0,
            header_height: 30,
            empty_row: false,
            body_scroll: 0,
            caps: Capabilities {
                redraw_notices: true,
                state_hooks: true,
            },
            visibility_calls: Vec::new(),
            active_listeners: Vec::new(),
            next_token: 0,
        };
        host.render_rows(3);
        host
    }

    /// Render `rows` fresh body rows, as a host redraw would: inline
    /// cell widths are lost and cells fall back to measured widths.
    pub fn render_rows(&mut self, rows: usize) {
        self.body = vec![self.measured.clone(); rows];
        self.empty_row = rows == 0;
        self.table_height = self.header_height + ROW_HEIGHT * rows as i32;
    }

    pub fn body_cell(&self, row: usize, column: usize) -> i32 {
        self.body[row][column]
    }
}

impl HostTable for FakeHost {
    fn capabilities(&self) -> Capabilities {
        self.caps
    }

    fn header_widths(&self) -> Vec<i32> {
        self.headers.clone()
    }

    fn table_height(&self) -> i32 {
        self.table_height
    }

    fn header_height(&self) -> i32 {
        self.header_height
    }

    fn body_height(&self) -> i32 {
        ROW_HEIGHT * self.body.len() as i32
    }

    fn row_count(&self) -> usize {
        self.body.len()
    }

    fn has_empty_row(&self) -> bool {
        self.empty_row
    }

    fn set_header_width(&mut self, column: usize, width: i32) {
        self.headers[column] = width;
    }

    fn set_body_column_width(&mut self, column: usize, width: i32) {
        for row in &mut self.body {
            row[column] = width;
        }
    }

    fn set_table_width(&mut self, width: i32) {
        self.table_width = width;
    }

    fn set_body_scroll(&mut self, offset: i32) {
        self.body_scroll = offset;
    }

    fn set_column_visible(&mut self, column: usize, visible: bool) {
        self.visibility_calls.push((column, visible));
    }

    fn column_width(&self, column: usize) -> i32 {
        self.headers[column]
    }

    fn register(&mut self, interest: Interest) -> ListenerToken {
        let token = ListenerToken(self.next_token);
        self.next_token += 1;
        self.active_listeners.push((token, interest));
        token
    }

    fn unregister(&mut self, token: ListenerToken) {
        self.active_listeners.retain(|(t, _)| *t != token);
    }
}

/// A width store that remembers every save.
#[derive(Default)]
pub struct MemoryStore {
    pub initial: Option<Vec<i32>>,
    pub saves: Vec<Vec<i32>>,
}

impl MemoryStore {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_widths(widths: &[i32]) -> Self {
        Self {
            initial: Some(widths.to_vec()),
            saves: Vec::new(),
        }
    }
}

impl WidthStore for MemoryStore {
    fn load(&self) -> Option<Vec<i32>> {
        self.initial.clone()
    }

    fn save(&mut self, widths: &[i32]) {
        self.saves.push(widths.to_vec());
    }
}
