//! ANSI console colors
//!
//! Pure lookup from a color name to its escape sequence. Log files are never
//! colored; this is for console output of the embedding application.

/// Console foreground colors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleColor {
    Reset,
    Red,
    Green,
    Yellow,
    Blue,
}

impl ConsoleColor {
    /// The ANSI escape sequence selecting this color
    pub fn escape_code(&self) -> &'static str {
        match self {
            ConsoleColor::Reset => "\x1b[0m",
            ConsoleColor::Red => "\x1b[31m",
            ConsoleColor::Green => "\x1b[32m",
            ConsoleColor::Yellow => "\x1b[33m",
            ConsoleColor::Blue => "\x1b[34m",
        }
    }

    /// Wrap `text` in this color, resetting afterwards
    pub fn paint(&self, text: &str) -> String {
        format!(
            "{}{}{}",
            self.escape_code(),
            text,
            ConsoleColor::Reset.escape_code()
        )
    }
}
