use crate::view::Style;
use colored::*;

pub struct ColorScheme;

impl ColorScheme {
    pub fn new(use_colors: bool) -> Self {
        if !use_colors {
            colored::control::set_override(false);
        }
        Self
    }

    /// Colors `text` the way the legend describes `style`.
    pub fn paint(&self, style: Style, text: &str) -> ColoredString {
        match style {
            Style::Empty => text.normal(),
            Style::Wall => text.bright_black(),
            Style::FromStart => text.green(),
            Style::FromGoal => text.red(),
            Style::Both | Style::Meeting => text.yellow().bold(),
            Style::Path => text.cyan().bold(),
            Style::Start => text.bright_green().bold(),
            Style::Goal => text.bright_red().bold(),
        }
    }

    pub fn node_name(&self, text: &str) -> ColoredString {
        text.yellow()
    }

    pub fn success(&self, text: &str) -> ColoredString {
        text.green()
    }

    pub fn error(&self, text: &str) -> ColoredString {
        text.red()
    }

    pub fn number(&self, text: &str) -> ColoredString {
        text.green()
    }

    pub fn stats(&self, text: &str) -> ColoredString {
        text.blue()
    }

    pub fn dim(&self, text: &str) -> ColoredString {
        text.dimmed()
    }
}
