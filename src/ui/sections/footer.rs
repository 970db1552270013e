use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use crate::site::{FOOTER_COLUMNS, NEWSLETTER_PROMPT, NEWSLETTER_THANKS, SITE_NAME, SOCIAL_LINKS};
use crate::ui::newsletter::NewsletterState;
use crate::ui::sections::pad_to;
use crate::ui::theme::Theme;

pub fn lines(
    _width: u16,
    height: u16,
    theme: &Theme,
    newsletter: &NewsletterState,
    focused: bool,
) -> Vec<Line<'static>> {
    let mut content: Vec<Line<'static>> = Vec::new();

    content.push(Line::from(Span::styled(
        SITE_NAME,
        Style::default()
            .fg(theme.text)
            .add_modifier(Modifier::BOLD),
    )));
    content.push(Line::default());

    for column in FOOTER_COLUMNS {
        content.push(Line::from(vec![
            Span::styled(
                format!("{:<10}", column.title),
                Style::default().fg(theme.muted),
            ),
            Span::styled(
                column.entries.join(" · "),
                Style::default().fg(theme.text),
            ),
        ]));
    }
    content.push(Line::default());

    if newsletter.subscribed {
        content.push(Line::from(Span::styled(
            format!("✔ {NEWSLETTER_THANKS}"),
            Style::default().fg(theme.ok),
        )));
    } else {
        let value = if newsletter.email.is_empty() && !focused {
            Span::styled(
                "your@email.com",
                Style::default()
                    .fg(theme.muted)
                    .add_modifier(Modifier::DIM),
            )
        } else {
            Span::styled(
                format!("{}{}", newsletter.email, if focused { "_" } else { "" }),
                Style::default().fg(theme.text),
            )
        };
        content.push(Line::from(vec![
            Span::styled("Newsletter  ", Style::default().fg(theme.muted)),
            Span::raw("[ "),
            value,
            Span::raw(" ]  "),
            Span::styled(
                "[ Subscribe ]",
                Style::default().fg(theme.accent),
            ),
        ]));
    }
    content.push(Line::from(Span::styled(
        NEWSLETTER_PROMPT,
        Style::default()
            .fg(theme.muted)
            .add_modifier(Modifier::DIM),
    )));
    content.push(Line::default());

    let social = SOCIAL_LINKS
        .iter()
        .map(|link| link.label)
        .collect::<Vec<_>>()
        .join(" · ");
    content.push(Line::from(Span::styled(
        social,
        Style::default().fg(theme.accent_soft),
    )));
    content.push(Line::from(Span::styled(
        format!("© 2025 {SITE_NAME}. All rights reserved."),
        Style::default().fg(theme.muted),
    )));

    pad_to(content, height)
}
