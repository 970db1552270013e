use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::site::{SectionId, NAV_LINKS, SITE_NAME};
use crate::ui::nav::NavState;
use crate::ui::theme::Theme;

/// Sticky navigation bar. Transparent while the page sits at the top;
/// condensed with a hard edge once the scroll threshold is crossed.
pub struct Header;

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}

impl Header {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(
        &self,
        nav: &NavState,
        theme: &Theme,
        current: SectionId,
    ) -> Paragraph<'static> {
        let mut spans = vec![
            Span::raw(" "),
            Span::styled(
                SITE_NAME,
                Style::default()
                    .fg(theme.text)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("   "),
        ];

        for (position, link) in NAV_LINKS.iter().enumerate() {
            if position > 0 {
                spans.push(Span::raw("  "));
            }
            let active = link.target == current;
            let style = if active {
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
            } else {
                Style::default().fg(theme.muted)
            };
            spans.push(Span::styled(link.name, style));
        }

        spans.push(Span::raw("   "));
        spans.push(Span::styled(
            if nav.menu_open { "[m] Close" } else { "[m] Menu" },
            Style::default().fg(theme.muted).add_modifier(Modifier::DIM),
        ));
        spans.push(Span::raw("  "));
        spans.push(Span::styled(
            "Get in Touch",
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        ));

        let block = if nav.scrolled {
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(theme.accent))
        } else {
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(theme.border))
        };

        Paragraph::new(Line::from(spans)).block(block)
    }
}
