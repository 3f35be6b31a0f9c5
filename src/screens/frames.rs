//! Everything the gate shows, as frames for both screens.

use crate::screens::Color;
use crate::states::Feedback;

pub const TITLE: &str = "BOOT SECURITY MODULE";

/// Text at a cell of the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub column: u32,
    pub row: u32,
    pub text: String,
}

/// A full screen worth of content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    background: Color,
    lines: Vec<Line>,
}

impl Frame {
    pub fn new(background: Color) -> Self {
        Frame {
            background,
            lines: Vec::new(),
        }
    }

    /// Adds a line of text starting in the first column.
    pub fn line(mut self, row: u32, text: impl Into<String>) -> Self {
        self.lines.push(Line {
            column: 0,
            row,
            text: text.into(),
        });
        self
    }

    pub fn background(&self) -> Color {
        self.background
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }
}

/// `*` for every entered symbol, `_` for every open one.
pub fn progress(entered: usize, total: usize) -> String {
    let marks: Vec<&str> = (0..total)
        .map(|i| if i < entered { "*" } else { "_" })
        .collect();
    format!("Sequence: {}", marks.join(" "))
}

/// The prompt shown while waiting for input.
pub fn prompt(entered: usize, total: usize, remaining_secs: u64) -> Frame {
    Frame::new(Color::BLACK)
        .line(0, TITLE)
        .line(1, "Enter password to continue boot")
        .line(3, progress(entered, total))
        .line(5, "D-Pad: Enter sequence")
        .line(6, "+: Submit   HOME: Reset")
        .line(8, format!("Auto-continue in {} seconds", remaining_secs))
}

pub fn accepted() -> Frame {
    Frame::new(Color::GREEN)
        .line(8, "PASSWORD ACCEPTED")
        .line(10, "Continuing boot...")
}

pub fn rejected() -> Frame {
    Frame::new(Color::RED)
        .line(8, "INCORRECT PASSWORD")
        .line(10, "Try again...")
}

pub fn timed_out() -> Frame {
    Frame::new(Color::BLUE)
        .line(8, "SECURITY TIMEOUT")
        .line(10, "Continuing boot anyway...")
}

/// Shown once the gate is done, whatever the outcome.
pub fn handoff() -> Frame {
    Frame::new(Color::BLACK)
        .line(8, "Security check complete")
        .line(10, "Loading next module...")
}

/// Shown by the hardware check.
pub fn check_pattern() -> Frame {
    Frame::new(Color::BLACK)
        .line(0, TITLE)
        .line(1, "Screen check")
        .line(3, "0123456789 ABCDEFGHIJKLMNOPQRSTUVWXYZ")
        .line(5, "Press any button")
}

pub fn for_feedback(feedback: Feedback) -> Frame {
    match feedback {
        Feedback::Accepted => accepted(),
        Feedback::Rejected => rejected(),
        Feedback::Expired => timed_out(),
    }
}
