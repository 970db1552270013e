use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use crate::ui::carousel::CarouselState;
use crate::ui::reveal::Reveal;
use crate::ui::sections::{pad_to, section_header, wrap};
use crate::ui::theme::Theme;

const CAROUSEL_BLOCK: u32 = 3;

pub fn lines(
    width: u16,
    height: u16,
    reveal: Reveal,
    theme: &Theme,
    carousel: &CarouselState,
    focused: bool,
) -> Vec<Line<'static>> {
    let text_width = usize::from(width.saturating_sub(8)).clamp(20, 64);
    let mut content = section_header(
        "TESTIMONIALS",
        "What Clients Say",
        "Don't just take my word for it. Here's what my clients have to say about \
working together.",
        reveal,
        theme,
        text_width,
    );

    if reveal.child(CAROUSEL_BLOCK) {
        let active = carousel.active();

        content.push(
            Line::from(Span::styled(
                "★".repeat(usize::from(active.rating)),
                Style::default().fg(theme.star),
            ))
            .centered(),
        );
        for row in wrap(active.content, text_width).into_iter().take(4) {
            content.push(
                Line::from(Span::styled(
                    format!("\u{201c}{row}\u{201d}"),
                    Style::default().fg(theme.text),
                ))
                .centered(),
            );
        }
        content.push(
            Line::from(vec![
                Span::styled(
                    active.name,
                    Style::default()
                        .fg(theme.text)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!("  {}, {}", active.role, active.company),
                    Style::default().fg(theme.muted),
                ),
            ])
            .centered(),
        );
        content.push(Line::default());

        // Prev/next controls around dots bound 1:1 to the items.
        let mut spans = vec![Span::styled(
            "‹ Prev   ",
            Style::default().fg(if focused { theme.accent } else { theme.muted }),
        )];
        for index in 0..carousel.len() {
            let dot = if index == carousel.active_index() {
                Span::styled("●", Style::default().fg(theme.accent))
            } else {
                Span::styled("○", Style::default().fg(theme.muted))
            };
            spans.push(dot);
            spans.push(Span::raw(" "));
        }
        spans.push(Span::styled(
            "  Next ›",
            Style::default().fg(if focused { theme.accent } else { theme.muted }),
        ));
        content.push(Line::from(spans).centered());

        // Peripheral previews of the neighboring cards.
        content.push(
            Line::from(Span::styled(
                format!("◂ {}   ·   {} ▸", carousel.previous().name, carousel.next().name),
                Style::default()
                    .fg(theme.muted)
                    .add_modifier(Modifier::DIM),
            ))
            .centered(),
        );
    }

    pad_to(content, height)
}
