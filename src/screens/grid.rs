use crate::result::Result;
use crate::screens::{Color, Surface};

/// In-memory grid of characters on a background color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextGrid {
    columns: u32,
    rows: u32,
    cells: Vec<char>,
    background: Color,
}

impl TextGrid {
    pub fn new(columns: u32, rows: u32) -> Self {
        TextGrid {
            columns,
            rows,
            cells: vec![' '; (columns * rows) as usize],
            background: Color::BLACK,
        }
    }

    pub fn columns(&self) -> u32 {
        self.columns
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    pub fn background(&self) -> Color {
        self.background
    }

    pub fn fill(&mut self, color: Color) {
        self.background = color;
        for cell in self.cells.iter_mut() {
            *cell = ' ';
        }
    }

    /// Writes the text at the given cell, cutting off whatever
    /// does not fit in the row. Rows below the grid are ignored.
    pub fn write(&mut self, column: u32, row: u32, text: &str) {
        if row >= self.rows {
            return;
        }

        let start = (row * self.columns) as usize;
        let row_cells = &mut self.cells[start..start + self.columns as usize];
        for (cell, ch) in row_cells
            .iter_mut()
            .skip(column as usize)
            .zip(text.chars())
        {
            *cell = ch;
        }
    }

    /// Text of the given row without trailing blanks.
    pub fn row_text(&self, row: u32) -> String {
        if row >= self.rows {
            return String::new();
        }

        let start = (row * self.columns) as usize;
        let text: String = self.cells[start..start + self.columns as usize]
            .iter()
            .collect();
        text.trim_end().to_string()
    }

    /// All rows up to the last one with text on it.
    pub fn text_rows(&self) -> Vec<String> {
        let mut rows: Vec<String> = (0..self.rows).map(|r| self.row_text(r)).collect();
        while rows.last().map_or(false, |r| r.is_empty()) {
            rows.pop();
        }
        rows
    }

    pub fn contains(&self, needle: &str) -> bool {
        (0..self.rows).any(|r| self.row_text(r).contains(needle))
    }
}

impl Surface for TextGrid {
    fn clear(&mut self, color: Color) -> Result<()> {
        self.fill(color);
        Ok(())
    }

    fn put_text(&mut self, column: u32, row: u32, text: &str) -> Result<()> {
        self.write(column, row, text);
        Ok(())
    }

    fn present(&mut self) -> Result<()> {
        Ok(())
    }
}
