//! Per-section line renderers.
//!
//! Each section renders to exactly its configured page height so the
//! scrolled body can be assembled by simple row slicing. Children that have
//! not reached their stagger delay render as blank rows, which is the
//! terminal analog of the initial zero-opacity pose.

pub mod about;
pub mod contact;
pub mod cta;
pub mod footer;
pub mod hero;
pub mod portfolio;
pub mod services;
pub mod testimonials;

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use crate::ui::reveal::Reveal;
use crate::ui::theme::Theme;

/// Shared section header: label, title, and intro copy at stagger indices
/// 0, 1, and 2, followed by a blank separator row.
pub(crate) fn section_header(
    label: &'static str,
    title: &'static str,
    intro: &'static str,
    reveal: Reveal,
    theme: &Theme,
    text_width: usize,
) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    lines.push(if reveal.child(0) {
        Line::from(Span::styled(label, Style::default().fg(theme.accent))).centered()
    } else {
        Line::default()
    });
    lines.push(if reveal.child(1) {
        Line::from(Span::styled(
            title,
            Style::default()
                .fg(theme.text)
                .add_modifier(Modifier::BOLD),
        ))
        .centered()
    } else {
        Line::default()
    });
    if reveal.child(2) {
        for row in wrap(intro, text_width) {
            lines.push(Line::from(Span::styled(row, Style::default().fg(theme.muted))).centered());
        }
    } else {
        lines.push(Line::default());
        lines.push(Line::default());
    }
    lines.push(Line::default());
    lines
}

/// Greedy word wrap. Words longer than the width get a line of their own.
pub(crate) fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if current.is_empty() {
            current.push_str(word);
        } else if current.len() + 1 + word.len() <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Truncate or blank-pad to the section's fixed height.
pub(crate) fn pad_to(mut lines: Vec<Line<'static>>, height: u16) -> Vec<Line<'static>> {
    let height = height as usize;
    lines.truncate(height);
    while lines.len() < height {
        lines.push(Line::default());
    }
    lines
}

/// Vertically center content within the section's fixed height.
pub(crate) fn vcenter(lines: Vec<Line<'static>>, height: u16) -> Vec<Line<'static>> {
    let height = height as usize;
    if lines.len() >= height {
        let mut lines = lines;
        lines.truncate(height);
        return lines;
    }
    let top = (height - lines.len()) / 2;
    let mut out = vec![Line::default(); top];
    out.extend(lines);
    pad_to(out, height as u16)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_respects_width() {
        let wrapped = wrap("one two three four", 9);
        assert_eq!(wrapped, ["one two", "three", "four"]);
    }

    #[test]
    fn wrap_handles_overlong_words() {
        let wrapped = wrap("tiny enormousword", 6);
        assert_eq!(wrapped, ["tiny", "enormousword"]);
    }

    #[test]
    fn pad_to_is_exact() {
        assert_eq!(pad_to(vec![], 4).len(), 4);
        assert_eq!(pad_to(vec![Line::default(); 9], 4).len(), 4);
    }

    #[test]
    fn vcenter_is_exact() {
        let centered = vcenter(vec![Line::raw("x")], 5);
        assert_eq!(centered.len(), 5);
        assert_eq!(centered[2].to_string(), "x");
    }
}
