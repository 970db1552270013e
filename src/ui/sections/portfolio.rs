use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use crate::site::PROJECTS;
use crate::ui::reveal::Reveal;
use crate::ui::sections::{pad_to, section_header, wrap};
use crate::ui::theme::Theme;

const PROJECTS_BASE: u32 = 4;

pub fn lines(width: u16, height: u16, reveal: Reveal, theme: &Theme) -> Vec<Line<'static>> {
    let text_width = usize::from(width.saturating_sub(4)).clamp(20, 72);
    let mut content = section_header(
        "SELECTED WORK",
        "Projects That Speak for Themselves",
        "A few recent projects across web, mobile, and brand design.",
        reveal,
        theme,
        text_width,
    );

    for (position, project) in PROJECTS.iter().enumerate() {
        if !reveal.child(PROJECTS_BASE + position as u32) {
            content.extend(std::iter::repeat_with(Line::default).take(6));
            continue;
        }
        content.push(Line::from(Span::styled(
            project.category,
            Style::default().fg(theme.accent),
        )));
        content.push(Line::from(Span::styled(
            project.title,
            Style::default()
                .fg(theme.text)
                .add_modifier(Modifier::BOLD),
        )));
        for row in wrap(project.description, text_width).into_iter().take(2) {
            content.push(Line::from(Span::styled(
                row,
                Style::default().fg(theme.muted),
            )));
        }
        let stats = project
            .stats
            .iter()
            .map(|(name, value)| format!("{name} {value}"))
            .collect::<Vec<_>>()
            .join("  ");
        content.push(Line::from(vec![
            Span::styled(
                project.tags.join(" · "),
                Style::default().fg(theme.accent_soft),
            ),
            Span::styled(format!("   {stats}"), Style::default().fg(theme.muted)),
        ]));
        content.push(Line::default());
    }

    pad_to(content, height)
}
