use std::time::Instant;

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::site::{SectionId, NAV_LINKS};
use crate::ui::app::{App, Focus};
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{centered_rect_by_size, layout_regions};
use crate::ui::sections;
use crate::ui::theme::{theme, Theme};

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let now = Instant::now();
    let theme = theme(app.theme_mode());
    let (header_area, body, footer_area) = layout_regions(frame.area());

    if body.height > 0 {
        let mut rows: Vec<Line<'static>> = Vec::new();
        for section in SectionId::ALL {
            rows.extend(section_lines(app, section, body.width, now, theme));
        }
        let visible: Vec<Line<'static>> = rows
            .into_iter()
            .skip(usize::from(app.page().scroll()))
            .take(usize::from(body.height))
            .collect();
        frame.render_widget(Paragraph::new(visible), body);
    }

    frame.render_widget(
        Header::new().widget(app.nav(), theme, app.page().current_section()),
        header_area,
    );
    if footer_area.height > 0 {
        frame.render_widget(Footer::new().widget(theme, footer_area), footer_area);
    }

    if app.nav().menu_open {
        draw_menu(frame, app, theme);
    }
}

fn section_lines(
    app: &App,
    section: SectionId,
    width: u16,
    now: Instant,
    theme: &Theme,
) -> Vec<Line<'static>> {
    let height = app.page().height_of(section);
    let reveal = app.reveal(section, now);
    match section {
        SectionId::Home => sections::hero::lines(width, height, reveal, theme),
        SectionId::About => sections::about::lines(width, height, reveal, theme),
        SectionId::Services => sections::services::lines(width, height, reveal, theme),
        SectionId::Work => sections::portfolio::lines(width, height, reveal, theme),
        SectionId::Testimonials => sections::testimonials::lines(
            width,
            height,
            reveal,
            theme,
            app.carousel(),
            app.focus() == Focus::Carousel,
        ),
        SectionId::Cta => sections::cta::lines(width, height, reveal, theme),
        SectionId::Contact => sections::contact::lines(
            width,
            height,
            reveal,
            theme,
            app.contact(),
            app.focus() == Focus::Form,
        ),
        SectionId::Footer => sections::footer::lines(
            width,
            height,
            theme,
            app.newsletter(),
            app.focus() == Focus::Newsletter,
        ),
    }
}

fn draw_menu(frame: &mut Frame<'_>, app: &App, theme: &Theme) {
    let mut lines: Vec<Line<'static>> = Vec::new();
    for (position, link) in NAV_LINKS.iter().enumerate() {
        let selected = position == app.nav().menu_selection;
        let style = if selected {
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.text)
        };
        let mut line = Line::from(vec![
            Span::styled(
                format!(" {:>2}. ", position + 1),
                Style::default().fg(theme.muted),
            ),
            Span::styled(link.name, style),
        ]);
        if selected {
            line = line.style(Style::default().bg(theme.highlight));
        }
        lines.push(line);
    }
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        " ↑↓ Move  Enter Go  1-5 Jump  Esc Close",
        Style::default().fg(theme.muted).add_modifier(Modifier::DIM),
    )));

    let content_width = lines.iter().map(Line::width).max().unwrap_or(0) as u16;
    let popup_width = content_width.saturating_add(4);
    let popup_height = lines.len().saturating_add(2) as u16;
    let area = centered_rect_by_size(frame.area(), popup_width, popup_height);

    frame.render_widget(Clear, area);
    let popup = Block::default()
        .title(Span::styled("Menu", Style::default().fg(theme.accent)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border));
    frame.render_widget(Paragraph::new(lines).block(popup), area);
}
