use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::ui::theme::Theme;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Bottom hint bar.
pub struct Footer;

impl Default for Footer {
    fn default() -> Self {
        Self::new()
    }
}

impl Footer {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, theme: &Theme, area: Rect) -> Paragraph<'static> {
        let hints = " ↑↓ Scroll │ 1-5 Jump │ Tab Focus │ m Menu │ t Theme │ q Quit";
        let version = format!("v{} ", VERSION);

        // Pad with char counts, not byte counts (the hints contain Unicode).
        let hints_width = hints.chars().count();
        let version_width = version.chars().count();
        let padding = usize::from(area.width)
            .saturating_sub(hints_width)
            .saturating_sub(version_width);

        let text_style = Style::default().fg(theme.muted).add_modifier(Modifier::DIM);

        Paragraph::new(Line::from(vec![
            Span::styled(hints, text_style),
            Span::styled(" ".repeat(padding), text_style),
            Span::styled(version, text_style),
        ]))
    }
}
