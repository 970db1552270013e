use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use crate::site::{ABOUT_INTRO, ABOUT_PARAGRAPHS, ABOUT_TITLE, HIGHLIGHTS, SKILLS};
use crate::ui::reveal::Reveal;
use crate::ui::sections::{pad_to, section_header, wrap};
use crate::ui::theme::Theme;

const SKILL_BAR_WIDTH: usize = 20;

// Header children animate first; skills follow the header block.
const SKILLS_BASE: u32 = 4;
const HIGHLIGHTS_BASE: u32 = 3;

pub fn lines(width: u16, height: u16, reveal: Reveal, theme: &Theme) -> Vec<Line<'static>> {
    let text_width = usize::from(width.saturating_sub(4)).clamp(20, 72);
    let mut content = section_header("ABOUT ME", ABOUT_TITLE, ABOUT_INTRO, reveal, theme, text_width);

    if reveal.child(3) {
        for paragraph in ABOUT_PARAGRAPHS {
            for row in wrap(paragraph, text_width) {
                content.push(Line::from(Span::styled(
                    row,
                    Style::default().fg(theme.muted),
                )));
            }
            content.push(Line::default());
        }
    } else {
        content.extend(std::iter::repeat_with(Line::default).take(12));
    }

    content.push(Line::from(Span::styled(
        "Technical Skills",
        Style::default()
            .fg(theme.text)
            .add_modifier(Modifier::BOLD),
    )));
    for (position, skill) in SKILLS.iter().enumerate() {
        if !reveal.child(SKILLS_BASE + position as u32) {
            content.push(Line::default());
            continue;
        }
        let filled = usize::from(skill.level) * SKILL_BAR_WIDTH / 100;
        let bar = format!(
            "{}{}",
            "█".repeat(filled),
            "░".repeat(SKILL_BAR_WIDTH - filled)
        );
        content.push(Line::from(vec![
            Span::styled(format!("{:<16}", skill.name), Style::default().fg(theme.text)),
            Span::styled(bar, Style::default().fg(theme.accent)),
            Span::styled(format!(" {:>3}%", skill.level), Style::default().fg(theme.muted)),
        ]));
    }
    content.push(Line::default());

    for (position, highlight) in HIGHLIGHTS.iter().enumerate() {
        if !reveal.child(HIGHLIGHTS_BASE + position as u32) {
            content.push(Line::default());
            continue;
        }
        content.push(Line::from(vec![
            Span::styled("▪ ", Style::default().fg(theme.accent)),
            Span::styled(
                format!("{:<16}", highlight.title),
                Style::default()
                    .fg(theme.text)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                highlight.description,
                Style::default().fg(theme.muted),
            ),
        ]));
    }

    pad_to(content, height)
}
