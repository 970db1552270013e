use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use crate::site::{SERVICES, SERVICES_CTA};
use crate::ui::reveal::Reveal;
use crate::ui::sections::{pad_to, section_header, wrap};
use crate::ui::theme::Theme;

const CARDS_BASE: u32 = 3;
const BOTTOM_CTA: u32 = 10;

pub fn lines(width: u16, height: u16, reveal: Reveal, theme: &Theme) -> Vec<Line<'static>> {
    let text_width = usize::from(width.saturating_sub(4)).clamp(20, 72);
    let mut content = section_header(
        "SERVICES",
        "What I Can Do for You",
        "From concept to launch, end-to-end services that cover every stage of a \
digital product.",
        reveal,
        theme,
        text_width,
    );

    for (position, service) in SERVICES.iter().enumerate() {
        let shown = reveal.child(CARDS_BASE + position as u32);
        if !shown {
            content.extend(std::iter::repeat_with(Line::default).take(5));
            continue;
        }
        content.push(Line::from(vec![
            Span::styled(
                service.title,
                Style::default()
                    .fg(theme.text)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  {}", service.price),
                Style::default().fg(theme.accent),
            ),
        ]));
        let description = wrap(service.description, text_width);
        for row in description.into_iter().take(2) {
            content.push(Line::from(Span::styled(
                row,
                Style::default().fg(theme.muted),
            )));
        }
        content.push(Line::from(Span::styled(
            service.features.join(" · "),
            Style::default().fg(theme.accent_soft),
        )));
        content.push(Line::default());
    }

    if reveal.child(BOTTOM_CTA) {
        content.push(
            Line::from(Span::styled(
                SERVICES_CTA,
                Style::default().fg(theme.muted),
            ))
            .centered(),
        );
        content.push(
            Line::from(Span::styled(
                "[ Schedule a Free Consultation ]",
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            ))
            .centered(),
        );
    }

    pad_to(content, height)
}
