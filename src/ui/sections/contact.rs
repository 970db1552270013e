use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use crate::site::{
    CONTACT_DETAILS, CONTACT_SUCCESS_TEXT, CONTACT_SUCCESS_TITLE, CONTACT_TEXT, CONTACT_TITLE,
    SOCIAL_LINKS,
};
use crate::ui::contact::{ContactFormState, Field, Submission};
use crate::ui::reveal::Reveal;
use crate::ui::sections::{pad_to, section_header};
use crate::ui::theme::Theme;

const INFO_BLOCK: u32 = 3;
const FORM_BLOCK: u32 = 4;

pub fn lines(
    width: u16,
    height: u16,
    reveal: Reveal,
    theme: &Theme,
    form: &ContactFormState,
    focused: bool,
) -> Vec<Line<'static>> {
    let text_width = usize::from(width.saturating_sub(4)).clamp(20, 72);
    let mut content = section_header(
        "CONTACT",
        CONTACT_TITLE,
        CONTACT_TEXT,
        reveal,
        theme,
        text_width,
    );

    if reveal.child(INFO_BLOCK) {
        for detail in CONTACT_DETAILS {
            content.push(Line::from(vec![
                Span::styled(
                    format!("{:<10}", detail.label),
                    Style::default().fg(theme.muted),
                ),
                Span::styled(detail.value, Style::default().fg(theme.text)),
            ]));
        }
        let social = SOCIAL_LINKS
            .iter()
            .map(|link| link.label)
            .collect::<Vec<_>>()
            .join(" · ");
        content.push(Line::from(vec![
            Span::styled("Follow me  ", Style::default().fg(theme.muted)),
            Span::styled(social, Style::default().fg(theme.accent_soft)),
        ]));
    } else {
        content.extend(std::iter::repeat_with(Line::default).take(4));
    }
    content.push(Line::default());

    if reveal.child(FORM_BLOCK) {
        render_form(&mut content, theme, form, focused);
    }

    pad_to(content, height)
}

fn render_form(
    content: &mut Vec<Line<'static>>,
    theme: &Theme,
    form: &ContactFormState,
    focused: bool,
) {
    if form.submission == Submission::Succeeded {
        content.push(
            Line::from(Span::styled(
                format!("✔ {CONTACT_SUCCESS_TITLE}"),
                Style::default().fg(theme.ok).add_modifier(Modifier::BOLD),
            ))
            .centered(),
        );
        content.push(
            Line::from(Span::styled(
                CONTACT_SUCCESS_TEXT,
                Style::default().fg(theme.muted),
            ))
            .centered(),
        );
        return;
    }

    if let Some(error) = form.error() {
        content.push(Line::from(Span::styled(
            format!("✗ {error}"),
            Style::default().fg(theme.error),
        )));
    } else {
        content.push(Line::default());
    }

    for field in Field::ALL {
        let active = focused && form.focused == field;
        let marker = if active { "› " } else { "  " };
        let value = form.fields.get(field);
        let (shown, value_style) = if value.is_empty() {
            (
                field.placeholder().to_string(),
                Style::default()
                    .fg(theme.muted)
                    .add_modifier(Modifier::DIM),
            )
        } else {
            (value.to_string(), Style::default().fg(theme.text))
        };
        let cursor = if active { "_" } else { "" };
        content.push(Line::from(vec![
            Span::styled(
                marker,
                Style::default().fg(theme.accent),
            ),
            Span::styled(
                format!("{:<12}", field.label()),
                if active {
                    Style::default()
                        .fg(theme.accent)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(theme.muted)
                },
            ),
            Span::styled(shown, value_style),
            Span::styled(cursor, Style::default().fg(theme.accent)),
        ]));
    }

    content.push(Line::default());
    let button = if form.is_pending() {
        Span::styled(
            "[ Sending... ]",
            Style::default()
                .fg(theme.muted)
                .add_modifier(Modifier::DIM),
        )
    } else {
        Span::styled(
            "[ Send Message ]",
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        )
    };
    content.push(Line::from(button));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::reveal::Reveal as RevealSnapshot;

    fn render(form: &ContactFormState) -> String {
        lines(80, 25, RevealSnapshot::settled(), &crate::ui::theme::DARK, form, true)
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn pending_disables_the_submit_control() {
        let mut form = ContactFormState::default();
        form.submission = Submission::Pending;
        let rendered = render(&form);
        assert!(rendered.contains("[ Sending... ]"));
        assert!(!rendered.contains("[ Send Message ]"));
    }

    #[test]
    fn success_notice_replaces_the_form() {
        let mut form = ContactFormState::default();
        form.submission = Submission::Succeeded;
        let rendered = render(&form);
        assert!(rendered.contains(CONTACT_SUCCESS_TITLE));
        assert!(!rendered.contains("Send Message"));
    }

    #[test]
    fn failure_line_is_shown_with_the_form() {
        let mut form = ContactFormState::default();
        form.submission = Submission::Failed("Failed to send message. Please try again.".into());
        let rendered = render(&form);
        assert!(rendered.contains("Failed to send message"));
        assert!(rendered.contains("[ Send Message ]"));
    }
}
