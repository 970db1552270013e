use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use crate::site::{CTA_EMAIL, CTA_TEXT, CTA_TITLE};
use crate::ui::reveal::Reveal;
use crate::ui::sections::{vcenter, wrap};
use crate::ui::theme::Theme;

const HEADLINE: u32 = 0;
const ACTIONS: u32 = 2;
const CONTACT_LINE: u32 = 3;

pub fn lines(width: u16, height: u16, reveal: Reveal, theme: &Theme) -> Vec<Line<'static>> {
    let text_width = usize::from(width.saturating_sub(4)).clamp(20, 64);
    let mut content: Vec<Line<'static>> = Vec::new();

    if reveal.child(HEADLINE) {
        content.push(
            Line::from(Span::styled(
                CTA_TITLE,
                Style::default()
                    .fg(theme.text)
                    .add_modifier(Modifier::BOLD),
            ))
            .centered(),
        );
        for row in wrap(CTA_TEXT, text_width) {
            content.push(Line::from(Span::styled(row, Style::default().fg(theme.muted))).centered());
        }
    } else {
        content.extend(std::iter::repeat_with(Line::default).take(3));
    }
    content.push(Line::default());

    content.push(if reveal.child(ACTIONS) {
        Line::from(vec![
            Span::styled(
                "[ Get in Touch ]",
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("   "),
            Span::styled("[ Book a Call ]", Style::default().fg(theme.text)),
        ])
        .centered()
    } else {
        Line::default()
    });

    content.push(if reveal.child(CONTACT_LINE) {
        Line::from(Span::styled(
            format!("✉ {CTA_EMAIL}"),
            Style::default().fg(theme.muted),
        ))
        .centered()
    } else {
        Line::default()
    });

    vcenter(content, height)
}
