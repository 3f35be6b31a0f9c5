//! Surfaces that keep what was presented in memory, for running
//! the gate without a real display.

use crate::result::Result;
use crate::screens::{Color, Screen, Surface, SurfaceSource, TextGrid};

use failure::format_err;

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

const COLUMNS: u32 = 60;
const ROWS: u32 = 18;

/// What happened to one screen so far.
#[derive(Debug, Clone)]
pub struct ScreenRecord {
    /// Every presented frame in order.
    pub presented: Vec<TextGrid>,
    /// Every surface operation in order, e.g. `clear #000000`.
    pub calls: Vec<String>,
    pub released: bool,
}

impl ScreenRecord {
    fn new() -> Self {
        ScreenRecord {
            presented: Vec::new(),
            calls: Vec::new(),
            released: false,
        }
    }

    pub fn last_presented(&self) -> Option<&TextGrid> {
        self.presented.last()
    }
}

type Records = Rc<RefCell<HashMap<Screen, ScreenRecord>>>;

/// Hands out in-memory surfaces and keeps a record of what was
/// shown on them, readable after the surfaces are gone.
#[derive(Clone)]
pub struct MemorySource {
    records: Records,
    unavailable: Option<Screen>,
}

impl MemorySource {
    pub fn new() -> Self {
        MemorySource {
            records: Rc::new(RefCell::new(HashMap::new())),
            unavailable: None,
        }
    }

    /// A source that fails to hand out a surface for the given
    /// screen, as if out of memory.
    pub fn unavailable(screen: Screen) -> Self {
        MemorySource {
            unavailable: Some(screen),
            ..MemorySource::new()
        }
    }

    /// Record of the screen, `None` if it was never acquired.
    pub fn record(&self, screen: Screen) -> Option<ScreenRecord> {
        self.records.borrow().get(&screen).cloned()
    }
}

impl Default for MemorySource {
    fn default() -> Self {
        MemorySource::new()
    }
}

impl SurfaceSource for MemorySource {
    fn acquire(&mut self, screen: Screen) -> Result<Box<dyn Surface>> {
        if self.unavailable == Some(screen) {
            return Err(format_err!("No memory left for {} screen", screen));
        }

        self.records
            .borrow_mut()
            .insert(screen, ScreenRecord::new());

        Ok(Box::new(MemorySurface {
            screen,
            grid: TextGrid::new(COLUMNS, ROWS),
            records: Rc::clone(&self.records),
        }))
    }
}

struct MemorySurface {
    screen: Screen,
    grid: TextGrid,
    records: Records,
}

impl MemorySurface {
    fn log_call(&self, call: String) {
        if let Some(record) = self.records.borrow_mut().get_mut(&self.screen) {
            record.calls.push(call);
        }
    }
}

impl Surface for MemorySurface {
    fn clear(&mut self, color: Color) -> Result<()> {
        self.log_call(format!("clear {}", color));
        self.grid.clear(color)
    }

    fn put_text(&mut self, column: u32, row: u32, text: &str) -> Result<()> {
        self.log_call(format!("put {},{} {}", column, row, text));
        self.grid.put_text(column, row, text)
    }

    fn present(&mut self) -> Result<()> {
        self.log_call("present".to_string());
        if let Some(record) = self.records.borrow_mut().get_mut(&self.screen) {
            record.presented.push(self.grid.clone());
        }
        Ok(())
    }
}

impl Drop for MemorySurface {
    fn drop(&mut self) {
        if let Some(record) = self.records.borrow_mut().get_mut(&self.screen) {
            record.released = true;
        }
    }
}
