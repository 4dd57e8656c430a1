//! Styling for audit output.
//!
//! Views render through a [`Style`], which carries the resolved color and
//! unicode settings so no view has to branch on them.

use crossterm::style::{Color, Stylize};

/// Status mark printed in front of a report line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mark {
    Compliant,
    Missing,
    Outdated,
    Unclassified,
    Hint,
}

impl Mark {
    fn glyph(self, unicode: bool) -> &'static str {
        match (self, unicode) {
            (Mark::Compliant, true) => "✓",
            (Mark::Compliant, false) => "[OK]",
            (Mark::Missing, true) => "✗",
            (Mark::Missing, false) => "[FAIL]",
            (Mark::Outdated, true) => "⚠",
            (Mark::Outdated, false) => "[WARN]",
            (Mark::Unclassified, true) => "○",
            (Mark::Unclassified, false) => "[ ]",
            (Mark::Hint, true) => "↳",
            (Mark::Hint, false) => "[>]",
        }
    }

    fn color(self) -> Color {
        match self {
            Mark::Compliant => Color::Green,
            Mark::Missing => Color::Red,
            Mark::Outdated => Color::Yellow,
            Mark::Unclassified | Mark::Hint => Color::DarkGrey,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Style {
    color: bool,
    unicode: bool,
}

impl Style {
    pub fn new(color: bool, unicode: bool) -> Self {
        Self { color, unicode }
    }

    pub fn mark(&self, mark: Mark) -> String {
        self.paint(mark.glyph(self.unicode), Some(mark.color()), false)
    }

    /// Bold line such as a section title.
    pub fn heading(&self, text: &str) -> String {
        self.paint(text, None, true)
    }

    /// Bold text in the mark's color; used for the summary verdict.
    pub fn verdict(&self, mark: Mark, text: &str) -> String {
        format!("{} {}", self.mark(mark), self.paint(text, Some(mark.color()), true))
    }

    /// Categories, periods and renewal cycles.
    pub fn accent(&self, text: &str) -> String {
        self.paint(text, Some(Color::Cyan), false)
    }

    pub fn dim(&self, text: &str) -> String {
        self.paint(text, Some(Color::DarkGrey), false)
    }

    fn paint(&self, text: &str, color: Option<Color>, bold: bool) -> String {
        if !self.color {
            return text.to_string();
        }
        let mut styled = text.stylize();
        if let Some(color) = color {
            styled = styled.with(color);
        }
        if bold {
            styled = styled.bold();
        }
        styled.to_string()
    }
}
