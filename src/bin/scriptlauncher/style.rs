use std::io::IsTerminal;

use anstyle::{AnsiColor, Reset};

const PRIMARY_COLOR: anstyle::Style =
    anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(AnsiColor::Cyan)));
const SUCCESS_COLOR: anstyle::Style =
    anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(AnsiColor::Green)));
const ERROR_COLOR: anstyle::Style =
    anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(AnsiColor::Red)));
const WARN_COLOR: anstyle::Style =
    anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(AnsiColor::Yellow)));
const DIM: anstyle::Style = anstyle::Style::new().dimmed();
const BOLD: anstyle::Style = anstyle::Style::new().bold();

/// ANSI styling, only emitted when stdout is a terminal
#[derive(Debug, Clone, Copy)]
pub struct Style {
    color: bool,
}

impl Style {
    pub fn new() -> Self {
        Self {
            color: std::io::stdout().is_terminal(),
        }
    }

    #[cfg(test)]
    pub fn plain() -> Self {
        Self { color: false }
    }

    fn paint(self, style: anstyle::Style, s: &str) -> String {
        if self.color {
            format!("{style}{s}{Reset}")
        } else {
            s.to_string()
        }
    }

    pub fn arrow(self) -> String {
        self.paint(PRIMARY_COLOR, "❱")
    }

    pub fn success(self, message: &str) -> String {
        format!("{} {message} {}", self.arrow(), self.paint(SUCCESS_COLOR, "✓"))
    }

    pub fn ignored(self, message: &str) -> String {
        format!("{} {message} {}", self.arrow(), self.paint(WARN_COLOR, "⚠"))
    }

    pub fn failure(self, message: &str) -> String {
        format!("{} {message} {}", self.arrow(), self.paint(ERROR_COLOR, "✘"))
    }

    pub fn tag(self, label: &str) -> String {
        self.paint(WARN_COLOR, &format!("[{label}]"))
    }

    pub fn dim(self, s: &str) -> String {
        self.paint(DIM, s)
    }

    pub fn bold(self, s: &str) -> String {
        self.paint(BOLD, s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_style_has_no_escapes() {
        let sty = Style::plain();
        assert_eq!(sty.tag("STARTUP"), "[STARTUP]");
        assert_eq!(sty.success("done"), "❱ done ✓");
        assert_eq!(sty.failure("broken"), "❱ broken ✘");
    }

    #[test]
    fn test_color_style_wraps_text() {
        let sty = Style { color: true };
        let bold = sty.bold("name");
        assert!(bold.starts_with('\x1b'));
        assert!(bold.contains("name"));
    }
}
