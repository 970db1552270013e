use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use crate::site::{HERO_BADGE, HERO_HEADLINE, HERO_STATS, HERO_SUBHEADLINE};
use crate::ui::reveal::Reveal;
use crate::ui::sections::{vcenter, wrap};
use crate::ui::theme::Theme;

// Stagger indices mirror the mount animation order: badge, headline pair,
// subheadline, calls to action, stats.
const BADGE: u32 = 2;
const HEADLINE_TOP: u32 = 4;
const HEADLINE_BOTTOM: u32 = 5;
const SUBHEADLINE: u32 = 8;
const ACTIONS: u32 = 10;
const STATS: u32 = 12;

pub fn lines(width: u16, height: u16, reveal: Reveal, theme: &Theme) -> Vec<Line<'static>> {
    let text_width = usize::from(width.saturating_sub(4)).clamp(20, 64);
    let mut content: Vec<Line<'static>> = Vec::new();

    if reveal.child(BADGE) {
        content.push(
            Line::from(Span::styled(
                format!("✦ {HERO_BADGE}"),
                Style::default().fg(theme.accent),
            ))
            .centered(),
        );
    } else {
        content.push(Line::default());
    }
    content.push(Line::default());

    let headline_style = Style::default()
        .fg(theme.text)
        .add_modifier(Modifier::BOLD);
    content.push(if reveal.child(HEADLINE_TOP) {
        Line::from(Span::styled(HERO_HEADLINE[0], headline_style)).centered()
    } else {
        Line::default()
    });
    content.push(if reveal.child(HEADLINE_BOTTOM) {
        Line::from(Span::styled(
            HERO_HEADLINE[1],
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        ))
        .centered()
    } else {
        Line::default()
    });
    content.push(Line::default());

    if reveal.child(SUBHEADLINE) {
        for row in wrap(HERO_SUBHEADLINE, text_width) {
            content.push(Line::from(Span::styled(row, Style::default().fg(theme.muted))).centered());
        }
    } else {
        content.extend(std::iter::repeat_with(Line::default).take(2));
    }
    content.push(Line::default());

    content.push(if reveal.child(ACTIONS) {
        Line::from(vec![
            Span::styled(
                "[ View My Work ]",
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("   "),
            Span::styled("[ Get in Touch ]", Style::default().fg(theme.text)),
        ])
        .centered()
    } else {
        Line::default()
    });
    content.push(Line::default());

    content.push(if reveal.child(STATS) {
        let mut spans = Vec::new();
        for (position, stat) in HERO_STATS.iter().enumerate() {
            if position > 0 {
                spans.push(Span::styled("   │   ", Style::default().fg(theme.border)));
            }
            spans.push(Span::styled(
                stat.value,
                Style::default()
                    .fg(theme.text)
                    .add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::styled(
                format!(" {}", stat.label),
                Style::default().fg(theme.muted),
            ));
        }
        Line::from(spans).centered()
    } else {
        Line::default()
    });

    vcenter(content, height)
}
