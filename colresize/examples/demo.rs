//! Drives the resize engine against an in-memory host table and prints
//! the widths after each scripted gesture.

use std::fs::File;

use colresize::{
    Capabilities, ColResize, HostTable, Interest, ListenerToken, Options, PointerButton,
    PointerEvent, ScrollY, TableNotice, WidthStore,
};
use simplelog::{Config, LevelFilter, WriteLogger};

/// A minimal host: three columns, a handful of rendered rows.
struct DemoTable {
    headers: Vec<i32>,
    rows: Vec<Vec<i32>>,
    table_width: i32,
    body_scroll: i32,
    next_token: u64,
}

impl DemoTable {
    fn new(widths: &[i32], rows: usize) -> Self {
        Self {
            headers: widths.to_vec(),
            rows: vec![widths.to_vec(); rows],
            table_width: widths.iter().sum(),
            body_scroll: 0,
            next_token: 0,
        }
    }
}

impl HostTable for DemoTable {
    fn capabilities(&self) -> Capabilities {
        Capabilities {
            redraw_notices: true,
            state_hooks: true,
        }
    }

    fn header_widths(&self) -> Vec<i32> {
        self.headers.clone()
    }

    fn table_height(&self) -> i32 {
        30 + 20 * self.rows.len() as i32
    }

    fn header_height(&self) -> i32 {
        30
    }

    fn body_height(&self) -> i32 {
        20 * self.rows.len() as i32
    }

    fn row_count(&self) -> usize {
        self.rows.len()
    }

    fn has_empty_row(&self) -> bool {
        self.rows.is_empty()
    }

    fn set_header_width(&mut self, column: usize, width: i32) {
        self.headers[column] = width;
    }

    fn set_body_column_width(&mut self, column: usize, width: i32) {
        for row in &mut self.rows {
            row[column] = width;
        }
    }

    fn set_table_width(&mut self, width: i32) {
        self.table_width = width;
    }

    fn set_body_scroll(&mut self, offset: i32) {
        self.body_scroll = offset;
    }

    fn set_column_visible(&mut self, _column: usize, _visible: bool) {}

    fn column_width(&self, column: usize) -> i32 {
        self.headers[column]
    }

    fn register(&mut self, _interest: Interest) -> ListenerToken {
        let token = ListenerToken(self.next_token);
        self.next_token += 1;
        token
    }

    fn unregister(&mut self, _token: ListenerToken) {}
}

struct DemoStore;

impl WidthStore for DemoStore {
    fn load(&self) -> Option<Vec<i32>> {
        None
    }

    fn save(&mut self, widths: &[i32]) {
        println!("store <- {widths:?}");
    }
}

fn drag(engine: &mut ColResize<DemoTable, DemoStore>, from_x: i32, to_x: i32) {
    engine.on_pointer(PointerEvent::Down {
        x: from_x,
        y: 5,
        button: PointerButton::Left,
    });
    engine.on_pointer(PointerEvent::Move { x: to_x, y: 5 });
    engine.on_pointer(PointerEvent::Up { x: to_x, y: 5 });
}

fn main() -> std::io::Result<()> {
    let log_file = File::create("demo.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let host = DemoTable::new(&[100, 150, 200], 4);
    let options = Options::new().scroll_y(ScrollY::Px(200));
    let mut engine = ColResize::attach(host, DemoStore, options).expect("attach failed");

    println!("initial widths: {:?}", engine.widths());

    // Grow column 0 by 30px; the squeeze policy shrinks column 1.
    drag(&mut engine, 100, 130);
    println!("after drag:     {:?}", engine.widths());

    // Host redraws a new page; the deferred resync restores cell widths.
    engine.host_mut().rows = vec![vec![100, 150, 200]; 8];
    engine.on_notice(TableNotice::Redrawn);
    engine.poll();
    println!("after redraw:   row 0 = {:?}", engine.host().rows[0]);

    for notice in engine.take_notices() {
        println!("resized column {} to {}px", notice.column, notice.width);
    }

    engine.detach();
    Ok(())
}
